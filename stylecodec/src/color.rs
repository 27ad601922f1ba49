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

use crate::consts::{COLOR_SEPARATOR, MAX_COLOR_DIGITS};

/// Numeric color specification following a [`ControlCode::Color`] byte.
///
/// The grammar is `(fg (',' bg)?)?` where both `fg` and `bg` are one or two
/// ASCII digits. Both parts therefore always fall inside `0..=99`.
///
/// | Tail      | `foreground` | `background` |
/// |-----------|--------------|--------------|
/// | (none)    | `None`       | `None`       |
/// | `4`       | `Some(4)`    | `None`       |
/// | `04,12`   | `Some(4)`    | `Some(12)`   |
/// | `4,`      | `Some(4)`    | `None`       |
///
/// [`ControlCode::Color`]: crate::ControlCode::Color
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColorSpec {
    /// Text Color
    pub foreground: Option<u8>,
    /// Background Color
    pub background: Option<u8>,
}

impl ColorSpec {
    /// Parse the color specification at the start of `tail`.
    ///
    /// `tail` is the text immediately after the color control byte. Returns
    /// the parsed specification and the number of bytes it occupies; those
    /// bytes are control syntax and must not be rendered.
    ///
    /// A comma that is not followed by a digit is left in `tail`.
    pub fn parse(tail: &str) -> (ColorSpec, usize) {
        let bytes = tail.as_bytes();

        let (foreground, fg_len) = match parse_digits(bytes) {
            Some(parsed) => parsed,
            None => return (ColorSpec::default(), 0),
        };

        if bytes.get(fg_len) == Some(&COLOR_SEPARATOR) {
            if let Some((background, bg_len)) = parse_digits(&bytes[fg_len + 1..]) {
                let spec = ColorSpec {
                    foreground: Some(foreground),
                    background: Some(background),
                };
                return (spec, fg_len + 1 + bg_len);
            }
        }

        let spec = ColorSpec {
            foreground: Some(foreground),
            background: None,
        };
        (spec, fg_len)
    }
}

/// Reads up to [`MAX_COLOR_DIGITS`] leading ASCII digits.
fn parse_digits(bytes: &[u8]) -> Option<(u8, usize)> {
    let len = bytes
        .iter()
        .take(MAX_COLOR_DIGITS)
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if len == 0 {
        return None;
    }
    let value = bytes[..len]
        .iter()
        .fold(0u8, |acc, byte| acc * 10 + (byte - b'0'));
    Some((value, len))
}
