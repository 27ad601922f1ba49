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

use crate::style::StyleState;
use std::ops::Range;

/// A run of rendered text sharing one style.
///
/// Offsets are byte offsets into the rendered text, i.e. the message with its
/// control syntax removed. `end - start` always equals `text().len()` and a
/// fragment is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StyleFragment {
    state: StyleState,
    text: String,
    start: usize,
    end: usize,
}

impl StyleFragment {
    pub(crate) fn new(state: StyleState, text: String, start: usize) -> Self {
        debug_assert!(!text.is_empty(), "fragments are never empty");
        let end = start + text.len();
        Self {
            state,
            text,
            start,
            end,
        }
    }

    /// The style active for this run.
    pub fn state(&self) -> &StyleState {
        &self.state
    }

    /// The rendered text of this run.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte offset of the first byte of this run.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last byte of this run.
    pub fn end(&self) -> usize {
        self.end
    }

    /// `start()..end()`
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length of this run in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; present for symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the fragment, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}
