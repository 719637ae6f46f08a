//! One word row of the puzzle board
//!
//! A Word is a fixed-length run of [`Letter`]s plus the validation status the
//! server last reported for it. Derived state (`populated`) is recomputed
//! after every letter mutation, and any character change invalidates a prior
//! validation result by resetting the status to `Initialized`.

use crate::core::Letter;
use std::fmt;

/// Validation status of a word; the variants are mutually exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordStatus {
    /// Never tested, or edited since the last test
    #[default]
    Initialized,
    /// Server confirmed this word as a valid hop
    Solved,
    /// Server rejected this word
    Wrong,
    /// A validation request is in flight
    Testing,
    /// Waiting for the word-pair fetch that populates the board
    Loading,
    /// The last validation attempt failed at the transport level
    Broken,
}

/// A fixed-length sequence of letters with lock and validation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
    locked: bool,
    pair_word: bool,
    status: WordStatus,
    populated: bool,
}

impl Word {
    /// Create an empty word of `len` letters
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            letters: vec![Letter::new(); len],
            locked: false,
            pair_word: false,
            status: WordStatus::Initialized,
            populated: len == 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> &Letter {
        &self.letters[index]
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    #[must_use]
    pub const fn is_pair_word(&self) -> bool {
        self.pair_word
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> WordStatus {
        self.status
    }

    /// True iff every letter holds a character
    #[inline]
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.populated
    }

    /// Store a character in one cell
    ///
    /// No-op while the word (and therefore the letter) is locked. On any
    /// applied change, `populated` is recomputed and the status falls back to
    /// `Initialized` because the previous validation no longer describes the
    /// word.
    pub fn set_ch(&mut self, index: usize, value: Option<char>, user_entered: bool) {
        if self.locked || index >= self.letters.len() {
            return;
        }
        if self.letters[index].set_ch(value) {
            self.letters[index].set_user_entered(user_entered && value.is_some());
            self.status = WordStatus::Initialized;
            self.check_populated();
        }
    }

    /// Assign characters positionally from a string
    ///
    /// Only effective while unlocked. Cells beyond the end of `text` are
    /// cleared; characters beyond the word length are ignored. Characters are
    /// stored uppercased and flagged per `user_entered`.
    pub fn set_text(&mut self, text: &str, user_entered: bool) {
        if self.locked {
            return;
        }
        let mut chars = text.chars();
        for index in 0..self.letters.len() {
            let value = chars.next().map(|c| c.to_ascii_uppercase());
            self.letters[index].set_ch(value);
            self.letters[index].set_user_entered(user_entered && value.is_some());
        }
        self.status = WordStatus::Initialized;
        self.check_populated();
    }

    /// Lock or unlock the word, cascading the flag to every letter
    pub fn set_locked(&mut self, value: bool) {
        self.locked = value;
        for letter in &mut self.letters {
            letter.set_locked(value);
        }
    }

    pub fn set_pair_word(&mut self, value: bool) {
        self.pair_word = value;
    }

    pub fn set_status(&mut self, status: WordStatus) {
        self.status = status;
    }

    /// Clear the `user_entered` flag on every letter
    ///
    /// Used after pair-word initialization so server-provided characters are
    /// not styled as player input.
    pub fn clear_user_entered(&mut self) {
        for letter in &mut self.letters {
            letter.set_user_entered(false);
        }
    }

    /// Recompute `populated` from the current letters
    pub fn check_populated(&mut self) {
        self.populated = self.letters.iter().all(|l| l.ch().is_some());
    }

    /// Render the word with unset cells as spaces
    ///
    /// Returns `None` when every cell is blank, so callers using the result
    /// as a lookup key can tell "empty row" apart from a partial word.
    #[must_use]
    pub fn stringify(&self) -> Option<String> {
        if self.letters.iter().all(|l| l.ch().is_none()) {
            return None;
        }
        Some(self.text_or_blank())
    }

    /// Render the word with unset cells as spaces, blank rows included
    #[must_use]
    pub fn text_or_blank(&self) -> String {
        self.letters.iter().map(|l| l.ch().unwrap_or(' ')).collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text_or_blank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_has_fixed_length_and_no_status() {
        let word = Word::new(5);
        assert_eq!(word.len(), 5);
        assert_eq!(word.status(), WordStatus::Initialized);
        assert!(!word.is_populated());
        assert_eq!(word.stringify(), None);
    }

    #[test]
    fn populated_tracks_every_letter() {
        let mut word = Word::new(5);
        for (i, ch) in "HELL".chars().enumerate() {
            word.set_ch(i, Some(ch), true);
        }
        assert!(!word.is_populated());

        word.set_ch(4, Some('O'), true);
        assert!(word.is_populated());
        assert_eq!(word.stringify().as_deref(), Some("HELLO"));

        word.set_ch(2, None, false);
        assert!(!word.is_populated());
        assert_eq!(word.stringify().as_deref(), Some("HE LO"));
    }

    #[test]
    fn character_change_resets_status() {
        let mut word = Word::new(3);
        word.set_text("CAT", true);
        word.set_status(WordStatus::Solved);

        word.set_ch(0, Some('B'), true);
        assert_eq!(word.status(), WordStatus::Initialized);
    }

    #[test]
    fn locked_word_rejects_all_mutation() {
        let mut word = Word::new(3);
        word.set_text("CAT", false);
        word.set_locked(true);

        word.set_ch(0, Some('B'), true);
        word.set_text("DOG", true);
        assert_eq!(word.stringify().as_deref(), Some("CAT"));

        // Cascade: individual letters are locked too.
        assert!(word.letters().iter().all(Letter::is_locked));
    }

    #[test]
    fn unlock_cascades_to_letters() {
        let mut word = Word::new(3);
        word.set_locked(true);
        word.set_locked(false);
        assert!(word.letters().iter().all(|l| !l.is_locked()));
    }

    #[test]
    fn set_text_uppercases_and_clears_tail() {
        let mut word = Word::new(5);
        word.set_text("hello", true);
        assert_eq!(word.stringify().as_deref(), Some("HELLO"));

        word.set_text("hi", true);
        assert_eq!(word.stringify().as_deref(), Some("HI   "));
        assert!(!word.is_populated());
    }

    #[test]
    fn set_ch_out_of_range_is_ignored() {
        let mut word = Word::new(2);
        word.set_ch(7, Some('X'), true);
        assert_eq!(word.stringify(), None);
    }

    #[test]
    fn user_entered_cleared_on_blank_cells() {
        let mut word = Word::new(2);
        word.set_ch(0, Some('A'), true);
        assert!(word.letter(0).is_user_entered());
        word.set_ch(0, None, true);
        assert!(!word.letter(0).is_user_entered());
    }
}
