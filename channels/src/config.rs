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

/// Default channel prefix
pub const DEFAULT_CHANNEL_PREFIXES: [char; 1] = ['#'];

/// Default membership markers (operator, voice)
pub const DEFAULT_USER_MODES: [char; 2] = ['@', '+'];

/// Character sets used to recognize channel mentions.
///
/// Both sets come from the server: `channel_prefixes` from the advertised
/// `CHANTYPES` token and `user_modes` from the symbols of the `PREFIX` token.
/// See [`ChannelConfig::from_isupport`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ChannelConfig {
    /// Characters a Channel Name Starts With
    pub channel_prefixes: Vec<char>,
    /// Membership Markers that may Precede a Channel Name
    pub user_modes: Vec<char>,
}

impl ChannelConfig {
    /// Replace the channel prefix set.
    pub fn with_channel_prefixes<I>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.channel_prefixes = prefixes.into_iter().collect();
        self
    }

    /// Replace the membership marker set.
    pub fn with_user_modes<I>(mut self, modes: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.user_modes = modes.into_iter().collect();
        self
    }

    /// Build a configuration from the server's advertised tokens.
    ///
    /// `chantypes` is the value of `CHANTYPES` (e.g. `"#&"`). `prefix` is the
    /// value of `PREFIX`, either in its usual `(modes)symbols` form such as
    /// `"(ov)@+"` or as a bare symbol list. Only the symbols are kept.
    ///
    /// ```rust
    /// use ircstyle_channels::ChannelConfig;
    ///
    /// let config = ChannelConfig::from_isupport("#&", "(qaohv)~&@%+");
    /// assert_eq!(config.channel_prefixes, ['#', '&']);
    /// assert_eq!(config.user_modes, ['~', '&', '@', '%', '+']);
    /// ```
    pub fn from_isupport(chantypes: &str, prefix: &str) -> Self {
        let symbols = match prefix.strip_prefix('(') {
            Some(rest) => rest.split_once(')').map_or("", |(_, symbols)| symbols),
            None => prefix,
        };
        ChannelConfig {
            channel_prefixes: chantypes.chars().collect(),
            user_modes: symbols.chars().collect(),
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        ChannelConfig {
            channel_prefixes: DEFAULT_CHANNEL_PREFIXES.to_vec(),
            user_modes: DEFAULT_USER_MODES.to_vec(),
        }
    }
}
