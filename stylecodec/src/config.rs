//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// Scanner settings.
///
/// Formatting codes (bold, color, reset, reverse, italic, underline) and the
/// digits of a color specification are always consumed. This configuration
/// only decides what happens to the remaining control bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct StyleConfig {
    /// Strip C0 Control Bytes that are not Formatting Codes
    pub strip_control_codes: bool,
}

impl StyleConfig {
    /// Drop unrecognized control bytes from the rendered text.
    pub fn strip_all() -> StyleConfig {
        StyleConfig {
            strip_control_codes: true,
        }
    }
    /// Keep unrecognized control bytes as ordinary text.
    pub fn passthrough() -> StyleConfig {
        StyleConfig {
            strip_control_codes: false,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::strip_all()
    }
}

impl From<bool> for StyleConfig {
    fn from(strip_control_codes: bool) -> Self {
        StyleConfig {
            strip_control_codes,
        }
    }
}
