// src/sequence/mod.rs
//! Ordered strings that hand out independent hashing cursors.
//!
//! Every cursor borrows the sequence, so the list cannot grow while a
//! traversal is in progress. Dropping the cursor releases the borrow and a
//! new cursor restarts from the first item.

pub mod cursor;

pub use cursor::{digest_hex, HashCursor, Pull};

/// Append-only list of strings to be hashed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSequence {
    items: Vec<String>,
}

impl StringSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a text on single spaces, keeping empty words
    pub fn from_words(text: &str) -> Self {
        text.split(' ').map(str::to_string).collect()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Start a fresh traversal at the first item
    pub fn cursor(&self) -> HashCursor<'_> {
        HashCursor::new(&self.items)
    }
}

impl From<Vec<String>> for StringSequence {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for StringSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for StringSequence {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a StringSequence {
    type Item = String;
    type IntoIter = HashCursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
