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

use crate::code::{ControlCode, is_control_char};
use crate::color::ColorSpec;
use std::borrow::Cow;

/// Removes formatting codes and other control bytes from a message.
///
/// The result is exactly the text a [`StyleScanner`](crate::StyleScanner)
/// with the default configuration would render, without building any
/// fragments:
///
/// - Formatting codes (bold, color, reset, reverse, italic, underline) are
///   removed.
/// - The numeric tail of a color code (`fg` or `fg,bg`) is removed with it.
/// - Every other C0 control byte is removed.
///
/// # Performance
///
/// If the message holds no control bytes the input is returned borrowed
/// (zero-copy). Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use ircstyle_stylecodec::strip_format_codes;
///
/// assert_eq!(strip_format_codes("\x02bold\x02 \x034,5colored"), "bold colored");
///
/// let plain = strip_format_codes("Plain Text");
/// assert!(matches!(plain, Cow::Borrowed(_)));
/// ```
pub fn strip_format_codes(str: &str) -> Cow<'_, str> {
    if !str.chars().any(is_control_char) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut rest = str;

    while let Some(ch) = rest.chars().next() {
        rest = &rest[ch.len_utf8()..];

        if ControlCode::from_char(ch) == Some(ControlCode::Color) {
            let (_, consumed) = ColorSpec::parse(rest);
            rest = &rest[consumed..];
        } else if !is_control_char(ch) {
            result.push(ch);
        }
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyledText;

    #[test]
    fn test_plain_text_is_borrowed() {
        let result = strip_format_codes("no codes here at all");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "no codes here at all");
    }

    #[test]
    fn test_removes_style_codes() {
        assert_eq!(
            strip_format_codes("\x02\x034\x16\x1d\x1ffull\x0fnone"),
            "fullnone"
        );
    }

    #[test]
    fn test_removes_color_tail() {
        assert_eq!(strip_format_codes("\x0304,12text"), "text");
        assert_eq!(strip_format_codes("\x03123"), "3");
        assert_eq!(strip_format_codes("\x034,"), ",");
    }

    #[test]
    fn test_removes_line_breaks() {
        assert_eq!(strip_format_codes("one\ntwo\r\n"), "onetwo");
    }

    #[test]
    fn test_removes_other_controls() {
        assert_eq!(
            strip_format_codes("text\x01with\x04control\x05codes"),
            "textwithcontrolcodes"
        );
    }

    #[test]
    fn test_matches_scanner_rendering() {
        for input in [
            "",
            "\x02bold\x038yellow\x02nonBold\x03default",
            "\x031\x031,2\x031\x031,2\x031\x031,2\x03a",
            "\x034,8yellowBG redText",
            "a\x07b\x03,5c",
        ] {
            assert_eq!(strip_format_codes(input), StyledText::parse(input).plain_text());
        }
    }
}
