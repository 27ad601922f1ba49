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
use crate::config::StyleConfig;
use crate::fragment::StyleFragment;
use crate::style::StyleState;
use crate::utility::StyledText;
use tracing::{instrument, trace};

/// Splits chat text into styled fragments.
///
/// `StyleScanner` walks a message once, left to right, tracking the running
/// [`StyleState`]. Ordinary characters accumulate in a buffer; whenever a
/// formatting code is about to change the state, the buffer is flushed as a
/// [`StyleFragment`] carrying the state *before* the change.
///
/// Because a flush only happens when the buffer holds text, any run of
/// formatting codes with nothing visible in between yields no fragment. Only
/// the state in force when text resumes is observable.
///
/// The scanner itself holds nothing but its configuration, so one instance
/// can be reused for any number of messages, from any number of threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleScanner {
    config: StyleConfig,
}

impl StyleScanner {
    /// Creates a scanner with the given configuration.
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// Scan a message into its styled fragments.
    ///
    /// Never fails: every string has a rendering. An empty message produces
    /// an empty [`StyledText`].
    #[instrument(level = "trace", skip_all, fields(len = text.len()))]
    pub fn scan(&self, text: &str) -> StyledText {
        StyledText::from_fragments(Emitter::new(self.config, text.len()).run(text))
    }
}

/// Per-call scan state.
struct Emitter {
    config: StyleConfig,
    state: StyleState,
    buffer: String,
    cursor: usize,
    fragments: Vec<StyleFragment>,
}

impl Emitter {
    fn new(config: StyleConfig, capacity: usize) -> Self {
        Self {
            config,
            state: StyleState::default(),
            buffer: String::with_capacity(capacity),
            cursor: 0,
            fragments: Vec::new(),
        }
    }

    fn run(mut self, text: &str) -> Vec<StyleFragment> {
        let mut rest = text;

        while let Some(ch) = rest.chars().next() {
            rest = &rest[ch.len_utf8()..];

            match ControlCode::from_char(ch) {
                Some(code) => {
                    let color = if code == ControlCode::Color {
                        let (spec, consumed) = ColorSpec::parse(rest);
                        rest = &rest[consumed..];
                        spec
                    } else {
                        ColorSpec::default()
                    };
                    self.flush();
                    self.state.apply(code, color);
                }
                None if self.config.strip_control_codes && is_control_char(ch) => {}
                None => self.buffer.push(ch),
            }
        }

        self.flush();
        self.fragments
    }

    /// Emit the buffered text with the current state, if there is any.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.buffer);
        let fragment = StyleFragment::new(self.state, text, self.cursor);
        trace!(
            start = fragment.start(),
            end = fragment.end(),
            state = ?fragment.state(),
            "Emitting fragment"
        );
        self.cursor = fragment.end();
        self.fragments.push(fragment);
    }
}
