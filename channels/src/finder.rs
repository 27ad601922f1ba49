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

use crate::config::ChannelConfig;
use crate::result::{ChannelError, ChannelResult};
use regex::{CaptureMatches, Regex};
use std::ops::Range;
use tracing::debug;

/// A channel mention located in a message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChannelMatch {
    /// Byte offset of the channel prefix
    pub start: usize,
    /// Byte offset one past the end of the channel name
    pub end: usize,
    /// Channel name including its prefix, without membership markers
    pub channel: String,
}

impl ChannelMatch {
    /// `start..end`
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Locates channel mentions in free text.
///
/// A mention starts at the beginning of the text or after whitespace, may be
/// preceded by any number of membership markers (`@#ops`), and consists of
/// one channel prefix followed by one or more characters that are neither
/// whitespace nor BEL.
///
/// The pattern is compiled once in [`ChannelFinder::new`]; the finder is
/// immutable afterwards and can be shared freely.
///
/// # Examples
///
/// ```rust
/// use ircstyle_channels::{ChannelConfig, ChannelFinder};
///
/// let finder = ChannelFinder::new(&ChannelConfig::default()).unwrap();
/// let found = finder.find("join #rust or @#ops");
///
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].channel, "#rust");
/// assert_eq!(found[1].range(), 15..19);
/// ```
#[derive(Clone, Debug)]
pub struct ChannelFinder {
    pattern: Regex,
}

impl ChannelFinder {
    /// Compile a finder for the given character sets.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::NoChannelPrefixes`] if the prefix set is empty.
    pub fn new(config: &ChannelConfig) -> ChannelResult<Self> {
        if config.channel_prefixes.is_empty() {
            return Err(ChannelError::NoChannelPrefixes);
        }

        let prefixes = char_class(&config.channel_prefixes);
        let modes = if config.user_modes.is_empty() {
            String::new()
        } else {
            format!("{}*", char_class(&config.user_modes))
        };
        let source = format!(r"(?:^|\s){modes}({prefixes}[^\s\x07]+)");
        let pattern = Regex::new(&source)?;

        debug!(pattern = %source, "Compiled channel pattern");
        Ok(Self { pattern })
    }

    /// Collect every channel mention in `text`, in order.
    pub fn find(&self, text: &str) -> Vec<ChannelMatch> {
        self.find_iter(text).collect()
    }

    /// Iterate over the channel mentions in `text`, in order.
    pub fn find_iter<'r, 'h>(&'r self, text: &'h str) -> ChannelMatches<'r, 'h> {
        ChannelMatches {
            captures: self.pattern.captures_iter(text),
        }
    }

    /// Returns `true` if `text` mentions at least one channel.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Iterator over the channel mentions of a message.
///
/// Created by [`ChannelFinder::find_iter`].
#[derive(Debug)]
pub struct ChannelMatches<'r, 'h> {
    captures: CaptureMatches<'r, 'h>,
}

impl Iterator for ChannelMatches<'_, '_> {
    type Item = ChannelMatch;

    fn next(&mut self) -> Option<Self::Item> {
        // Group 1 is always present when the whole pattern matched.
        self.captures.by_ref().find_map(|captures| {
            captures.get(1).map(|channel| ChannelMatch {
                start: channel.start(),
                end: channel.end(),
                channel: channel.as_str().to_string(),
            })
        })
    }
}

/// Build a regex character class matching exactly `chars`.
fn char_class(chars: &[char]) -> String {
    let mut class = String::from("[");
    let mut buffer = [0u8; 4];
    for ch in chars {
        class.push_str(&regex::escape(ch.encode_utf8(&mut buffer)));
    }
    class.push(']');
    class
}

/// Find channel mentions in `text` using the given character sets.
///
/// Compiles a new pattern on each call; keep a [`ChannelFinder`] around when
/// scanning many messages with the same sets.
///
/// # Errors
///
/// Returns [`ChannelError::NoChannelPrefixes`] if `channel_prefixes` is empty.
pub fn find_channels(
    text: &str,
    channel_prefixes: &[char],
    user_modes: &[char],
) -> ChannelResult<Vec<ChannelMatch>> {
    let config = ChannelConfig {
        channel_prefixes: channel_prefixes.to_vec(),
        user_modes: user_modes.to_vec(),
    };
    Ok(ChannelFinder::new(&config)?.find(text))
}
