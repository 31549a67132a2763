use std::slice;

use crate::dictionary::{DictionaryEntry, normalize};

/// Lazy sequence of dictionary words that contain a typed fragment.
///
/// Borrowing the dictionary, it walks the words in dictionary order. Cloning
/// a fresh `Suggestions` gives an independent pass over the same matches.
#[derive(Debug, Clone)]
pub struct Suggestions<'a> {
    entries: slice::Iter<'a, DictionaryEntry>,
    needle: String,
}

impl<'a> Suggestions<'a> {
    pub(crate) fn new(entries: &'a [DictionaryEntry], partial: &str) -> Self {
        let needle = normalize(partial);
        // Nothing typed, nothing suggested.
        let entries = if needle.is_empty() {
            &entries[..0]
        } else {
            entries
        };

        Self {
            entries: entries.iter(),
            needle,
        }
    }
}

impl<'a> Iterator for Suggestions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.entries
            .find(|entry| entry.word.contains(needle))
            .map(|entry| entry.word.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.entries.size_hint().1)
    }
}

impl std::iter::FusedIterator for Suggestions<'_> {}
