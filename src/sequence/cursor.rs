// src/sequence/cursor.rs
use sha1::{Digest, Sha1};
use tracing::{debug, trace};

/// Outcome of pulling from a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pull {
    /// Lowercase hex SHA-1 digest of the next item
    Value(String),
    /// No items remain; returned on every pull after exhaustion
    EndOfSequence,
}

impl Pull {
    pub fn into_value(self) -> Option<String> {
        match self {
            Pull::Value(digest) => Some(digest),
            Pull::EndOfSequence => None,
        }
    }
}

/// Hex-encoded SHA-1 digest of the UTF-8 bytes of `text` (40 characters)
pub fn digest_hex(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// One traversal over a borrowed list of strings
#[derive(Debug, Clone)]
pub struct HashCursor<'a> {
    items: &'a [String],
    position: usize,
}

impl<'a> HashCursor<'a> {
    pub(crate) fn new(items: &'a [String]) -> Self {
        Self { items, position: 0 }
    }

    /// Hash the item at the current position and advance
    pub fn pull(&mut self) -> Pull {
        match self.items.get(self.position) {
            Some(item) => {
                let digest = digest_hex(item);
                trace!("Hashed item {} -> {}", self.position, digest);
                self.position += 1;
                if self.position == self.items.len() {
                    debug!("Cursor exhausted after {} items", self.position);
                }
                Pull::Value(digest)
            }
            None => Pull::EndOfSequence,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl Iterator for HashCursor<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.pull().into_value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for HashCursor<'_> {}

impl std::iter::FusedIterator for HashCursor<'_> {}
