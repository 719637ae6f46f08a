//! An accepted path between the pair words
//!
//! Solutions exist purely for the post-win display overlay; they play no part
//! in validation. Each one is an immutable snapshot of fully-populated words.

use crate::core::Word;
use std::fmt;

/// Error type for malformed solutions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    /// A word in the path was missing characters
    NotPopulated(usize),
    /// The path was empty
    Empty,
}

impl fmt::Display for SolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPopulated(index) => {
                write!(f, "Solution word at index {index} is not fully populated")
            }
            Self::Empty => write!(f, "Solution contains no words"),
        }
    }
}

impl std::error::Error for SolutionError {}

/// An immutable, fully-populated word path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    words: Vec<Word>,
}

impl Solution {
    /// Snapshot a word path as a solution
    ///
    /// # Errors
    /// Returns `SolutionError` if the path is empty or any word has an unset
    /// letter.
    pub fn new(words: Vec<Word>) -> Result<Self, SolutionError> {
        if words.is_empty() {
            return Err(SolutionError::Empty);
        }
        for (index, word) in words.iter().enumerate() {
            if !word.is_populated() {
                return Err(SolutionError::NotPopulated(index));
            }
        }
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lookup key for deduplication: the words joined with '/'
    #[must_use]
    pub fn key(&self) -> String {
        let texts: Vec<String> = self.words.iter().map(Word::text_or_blank).collect();
        texts.join("/")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
