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

use crate::consts::{BOLD, COLOR, ITALIC, RESET, REVERSE, UNDERLINE};

/// Formatting control codes recognized inside chat text.
///
/// Each code is a single C0 byte embedded in the message. The boolean
/// attributes are toggles: sending the same code twice restores the previous
/// value. [`ControlCode::Color`] is followed by an optional numeric color
/// specification, see [`ColorSpec`](crate::ColorSpec).
///
/// | Code        | Byte   | Effect                        |
/// |-------------|--------|-------------------------------|
/// | `Bold`      | `0x02` | toggle bold                   |
/// | `Color`     | `0x03` | set or clear the colors       |
/// | `Reset`     | `0x0F` | restore every default         |
/// | `Reverse`   | `0x16` | toggle reverse video          |
/// | `Italic`    | `0x1D` | toggle italic                 |
/// | `Underline` | `0x1F` | toggle underline              |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlCode {
    /// Toggle Bold
    Bold,
    /// Color Specification
    Color,
    /// Reset All Attributes
    Reset,
    /// Toggle Reverse Video
    Reverse,
    /// Toggle Italic
    Italic,
    /// Toggle Underline
    Underline,
}

impl ControlCode {
    /// Look up the control code for a raw byte.
    ///
    /// Returns `None` for every byte outside the formatting table, including
    /// other C0 control bytes.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            BOLD => Some(ControlCode::Bold),
            COLOR => Some(ControlCode::Color),
            RESET => Some(ControlCode::Reset),
            REVERSE => Some(ControlCode::Reverse),
            ITALIC => Some(ControlCode::Italic),
            UNDERLINE => Some(ControlCode::Underline),
            _ => None,
        }
    }

    /// Look up the control code for a character.
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_byte)
    }

    /// The byte this code is transmitted as.
    pub fn as_byte(self) -> u8 {
        match self {
            ControlCode::Bold => BOLD,
            ControlCode::Color => COLOR,
            ControlCode::Reset => RESET,
            ControlCode::Reverse => REVERSE,
            ControlCode::Italic => ITALIC,
            ControlCode::Underline => UNDERLINE,
        }
    }

    /// The character this code is transmitted as.
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }
}

/// Returns `true` if `ch` lies in the control range the scanner treats as
/// non-printable.
///
/// The range is the whole C0 block (`0x00..=0x1F`). Formatting
/// codes are part of this range; callers check [`ControlCode::from_char`]
/// first.
pub fn is_control_char(ch: char) -> bool {
    match u8::try_from(ch) {
        Ok(byte) => byte <= 0x1F,
        Err(_) => false,
    }
}
