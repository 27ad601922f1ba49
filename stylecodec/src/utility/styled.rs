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

use crate::config::StyleConfig;
use crate::fragment::StyleFragment;
use crate::scanner::StyleScanner;
use std::ops::Index;

/// The fragments of a scanned message.
///
/// `StyledText` is a newtype around `Vec<StyleFragment>` that guarantees the
/// scanner's layout: fragments are ordered, contiguous, start at offset `0`
/// and are never empty. It is produced by [`StyleScanner::scan`] or
/// [`StyledText::parse`].
///
/// # Examples
///
/// ```rust
/// use ircstyle_stylecodec::StyledText;
///
/// let styled = StyledText::parse("\x02bold\x02 plain");
///
/// assert_eq!(styled.count(), 2);
/// assert_eq!(styled.len(), 10);
/// assert_eq!(styled.plain_text(), "bold plain");
/// assert!(styled[0].state().bold);
/// ```
///
/// # Performance
///
/// - Indexing, `len()` and `count()` are O(1)
/// - [`fragment_at`](StyledText::fragment_at) is O(log n)
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyledText(Vec<StyleFragment>);

impl StyledText {
    /// Scan `string` with the default configuration, stripping unrecognized
    /// control bytes.
    pub fn parse(string: &str) -> StyledText {
        StyleScanner::default().scan(string)
    }

    /// Scan `string` with an explicit configuration.
    pub fn parse_with(string: &str, config: StyleConfig) -> StyledText {
        StyleScanner::new(config).scan(string)
    }

    pub(crate) fn from_fragments(fragments: Vec<StyleFragment>) -> StyledText {
        StyledText(fragments)
    }

    /// Byte length of the rendered text.
    pub fn len(&self) -> usize {
        self.0.last().map_or(0, StyleFragment::end)
    }

    /// Returns `true` if the message had no visible text.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fragments.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the fragments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleFragment> {
        self.0.iter()
    }

    /// Consume the collection, returning the fragments.
    pub fn into_fragments(self) -> Vec<StyleFragment> {
        self.0
    }

    /// The rendered text: every fragment's text, concatenated.
    pub fn plain_text(&self) -> String {
        let mut text = String::with_capacity(self.len());
        for fragment in &self.0 {
            text.push_str(fragment.text());
        }
        text
    }

    /// The fragment covering the rendered byte `offset`, if any.
    ///
    /// ```rust
    /// use ircstyle_stylecodec::StyledText;
    ///
    /// let styled = StyledText::parse("ab\x1fcd");
    /// assert!(!styled.fragment_at(1).unwrap().state().underline);
    /// assert!(styled.fragment_at(2).unwrap().state().underline);
    /// assert!(styled.fragment_at(4).is_none());
    /// ```
    pub fn fragment_at(&self, offset: usize) -> Option<&StyleFragment> {
        let index = self.0.partition_point(|fragment| fragment.end() <= offset);
        self.0
            .get(index)
            .filter(|fragment| fragment.start() <= offset)
    }
}

impl Index<usize> for StyledText {
    type Output = StyleFragment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for StyledText {
    type Item = StyleFragment;
    type IntoIter = std::vec::IntoIter<StyleFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyledText {
    type Item = &'a StyleFragment;
    type IntoIter = std::slice::Iter<'a, StyleFragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<StyledText> for Vec<StyleFragment> {
    fn from(text: StyledText) -> Self {
        text.0
    }
}
