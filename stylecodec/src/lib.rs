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

//! Formatting code scanner for chat text.
//!
//! Chat protocols embed single-byte formatting codes (bold, color, italic,
//! underline, reverse video, reset) directly in message text. This crate
//! splits such a message into contiguous [`StyleFragment`]s, each carrying
//! the [`StyleState`] active for its run, so the message can be re-rendered
//! in any presentation.
//!
//! ```rust
//! use ircstyle_stylecodec::parse_style;
//!
//! let fragments = parse_style("\x02bold\x038yellow", true);
//! assert_eq!(fragments.len(), 2);
//! assert_eq!(fragments[1].state().text_color, Some(8));
//! ```

mod code;
mod color;
mod config;
mod consts;
mod fragment;
mod scanner;
mod style;
pub mod utility;

pub use self::code::{ControlCode, is_control_char};
pub use self::color::ColorSpec;
pub use self::config::StyleConfig;
pub use self::fragment::StyleFragment;
pub use self::scanner::StyleScanner;
pub use self::style::StyleState;
pub use self::utility::{StyledText, strip_format_codes};

/// Split `text` into styled fragments.
///
/// When `strip_control_codes` is `true`, control bytes that are not
/// formatting codes are dropped from the rendered text; when `false` they
/// are kept as ordinary characters. Formatting codes and color digits are
/// removed in both cases.
///
/// Fragments are ordered, contiguous, start at offset `0`, and are never
/// empty. Offsets are byte offsets into the rendered text.
pub fn parse_style(text: &str, strip_control_codes: bool) -> Vec<StyleFragment> {
    StyleScanner::new(StyleConfig::from(strip_control_codes))
        .scan(text)
        .into_fragments()
}
