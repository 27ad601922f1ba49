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

/// Toggles bold text.
pub const BOLD: u8 = 0x02;

/// Introduces a color specification (`fg[,bg]`).
pub const COLOR: u8 = 0x03;

/// Restores every style attribute to its default.
pub const RESET: u8 = 0x0F;

/// Toggles reverse video (swap foreground and background).
pub const REVERSE: u8 = 0x16;

/// Toggles italic text.
pub const ITALIC: u8 = 0x1D;

/// Toggles underlined text.
pub const UNDERLINE: u8 = 0x1F;

/// Maximum number of digits consumed for each of the foreground and
/// background parts of a color specification.
///
/// Two digits cover the `0..=99` palette; any further digits are ordinary
/// text.
pub const MAX_COLOR_DIGITS: usize = 2;

/// Separator between the foreground and background parts of a color
/// specification.
pub const COLOR_SEPARATOR: u8 = b',';
