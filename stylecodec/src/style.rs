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

use crate::code::ControlCode;
use crate::color::ColorSpec;

/// The formatting attributes active at some point of a message.
///
/// `StyleState` is a plain value: copying it produces an independent
/// snapshot, so fragments keep the style they were emitted with no matter
/// how the scanner's running state evolves afterwards.
///
/// Colors are palette indices in `0..=99`; `None` means the client default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Bold Text
    pub bold: bool,
    /// Text Color
    pub text_color: Option<u8>,
    /// Background Color
    pub bg_color: Option<u8>,
    /// Reverse Video
    pub reverse: bool,
    /// Italic Text
    pub italic: bool,
    /// Underlined Text
    pub underline: bool,
}

impl StyleState {
    /// Returns `true` if every attribute holds its default value.
    pub fn is_default(&self) -> bool {
        *self == StyleState::default()
    }

    /// Restore every attribute to its default value.
    pub fn reset(&mut self) {
        *self = StyleState::default();
    }

    /// Replace both colors with the given specification.
    ///
    /// A specification without a background clears the background, whatever
    /// it was before.
    pub fn set_colors(&mut self, spec: ColorSpec) {
        self.text_color = spec.foreground;
        self.bg_color = spec.background;
    }

    /// Apply a control code to this state.
    ///
    /// `color` is only consulted for [`ControlCode::Color`]; the other codes
    /// ignore it.
    pub fn apply(&mut self, code: ControlCode, color: ColorSpec) {
        match code {
            ControlCode::Bold => self.bold = !self.bold,
            ControlCode::Color => self.set_colors(color),
            ControlCode::Reset => self.reset(),
            ControlCode::Reverse => self.reverse = !self.reverse,
            ControlCode::Italic => self.italic = !self.italic,
            ControlCode::Underline => self.underline = !self.underline,
        }
    }
}
