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

//! Error types for the channels crate.

use thiserror::Error;

/// Result type for channel finder operations
pub type ChannelResult<T> = std::result::Result<T, ChannelError>;

/// Errors raised while building a [`ChannelFinder`](crate::ChannelFinder).
///
/// Searching text never fails; only the caller-supplied character sets can
/// be rejected.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The channel prefix set is empty, so no channel could ever match
    #[error("No channel prefixes configured")]
    NoChannelPrefixes,

    /// The pattern built from the configured sets failed to compile
    #[error("Invalid channel pattern: {0}")]
    Pattern(#[from] regex::Error),
}
