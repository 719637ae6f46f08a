//! The puzzle board
//!
//! A Board owns the ordered word rows for one puzzle instance: the two locked
//! pair words at the ends and the player-editable hop rows between them. It
//! also accumulates accepted solutions and can temporarily swap the puzzle
//! rows for a solution overlay.

use crate::core::{Solution, Word};
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for board construction and initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A pair word did not match the configured letter count
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(f, "Pair word must be exactly {expected} letters, got {got}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Word grid for one puzzle: `num_hops + 1` rows of `num_letters` cells
#[derive(Debug, Clone)]
pub struct Board {
    num_letters: usize,
    num_hops: usize,
    words: Vec<Word>,
    broken: bool,
    solutions: Vec<Solution>,
    solution_keys: FxHashSet<String>,
    // Puzzle rows saved while a solution overlay is displayed.
    overlay_saved: Option<Vec<Word>>,
}

impl Board {
    /// Build an empty board; rows 0 and `num_hops` are locked pair words
    #[must_use]
    pub fn new(num_letters: usize, num_hops: usize) -> Self {
        let num_words = num_hops + 1;
        let mut words = vec![Word::new(num_letters); num_words];

        for index in [0, num_hops] {
            words[index].set_pair_word(true);
            words[index].set_locked(true);
        }

        Self {
            num_letters,
            num_hops,
            words,
            broken: false,
            solutions: Vec::new(),
            solution_keys: FxHashSet::default(),
            overlay_saved: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn num_letters(&self) -> usize {
        self.num_letters
    }

    #[inline]
    #[must_use]
    pub const fn num_hops(&self) -> usize {
        self.num_hops
    }

    #[inline]
    #[must_use]
    pub const fn num_words(&self) -> usize {
        self.num_hops + 1
    }

    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> &Word {
        &self.words[index]
    }

    #[inline]
    pub fn word_mut(&mut self, index: usize) -> &mut Word {
        &mut self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    #[inline]
    #[must_use]
    pub const fn is_broken(&self) -> bool {
        self.broken
    }

    pub fn set_broken(&mut self, value: bool) {
        self.broken = value;
    }

    /// Populate the two pair words from server-provided strings
    ///
    /// The pair words are unlocked just long enough to set their text, then
    /// re-locked, and their letters are flagged as not user-entered.
    ///
    /// # Errors
    /// Returns `BoardError::LengthMismatch` if either string is not exactly
    /// `num_letters` characters; the board is left unchanged in that case.
    pub fn initialize(&mut self, start_word: &str, end_word: &str) -> Result<(), BoardError> {
        for text in [start_word, end_word] {
            let got = text.chars().count();
            if got != self.num_letters {
                return Err(BoardError::LengthMismatch {
                    expected: self.num_letters,
                    got,
                });
            }
        }

        let last = self.num_hops;
        for (index, text) in [(0, start_word), (last, end_word)] {
            self.words[index].set_locked(false);
            self.words[index].set_text(text, false);
            self.words[index].clear_user_entered();
            self.words[index].set_locked(true);
        }
        Ok(())
    }

    /// True iff every row holds a full word
    ///
    /// A precondition helper only; winning requires server-verified solved
    /// status on every hop row.
    #[must_use]
    pub fn all_words_populated(&self) -> bool {
        self.words.iter().all(Word::is_populated)
    }

    /// Record an accepted solution for the display overlay
    ///
    /// Returns `false` (and keeps nothing) if an identical path was already
    /// recorded.
    pub fn add_solution(&mut self, solution: Solution) -> bool {
        if solution.len() != self.num_words() {
            return false;
        }
        if !self.solution_keys.insert(solution.key()) {
            return false;
        }
        self.solutions.push(solution);
        true
    }

    #[inline]
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    #[inline]
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub const fn overlay_active(&self) -> bool {
        self.overlay_saved.is_some()
    }

    /// Swap the puzzle rows for a solution overlay
    ///
    /// Solution letters fill every cell the player has not typed into;
    /// user-entered cells keep their characters. No-op if an overlay is
    /// already showing or `index` is out of range. The pre-overlay rows are
    /// saved verbatim for [`Board::revert_overlay`].
    pub fn show_solution(&mut self, index: usize) {
        if self.overlay_saved.is_some() || index >= self.solutions.len() {
            return;
        }
        let solution = self.solutions[index].clone();
        self.overlay_saved = Some(self.words.clone());

        for (word, solved) in self.words.iter_mut().zip(solution.words()) {
            if word.is_locked() {
                continue;
            }
            for cell in 0..word.len() {
                let keep = word.letter(cell).is_user_entered() && word.letter(cell).ch().is_some();
                if !keep {
                    word.set_ch(cell, solved.letter(cell).ch(), false);
                }
            }
        }
    }

    /// Restore the puzzle rows saved by [`Board::show_solution`]
    ///
    /// Returns `true` if an overlay was actually reverted.
    pub fn revert_overlay(&mut self) -> bool {
        match self.overlay_saved.take() {
            Some(saved) => {
                self.words = saved;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordStatus;

    fn populated(text: &str) -> Word {
        let mut word = Word::new(text.len());
        word.set_text(text, false);
        word
    }

    fn solution_from(texts: &[&str]) -> Solution {
        Solution::new(texts.iter().map(|t| populated(t)).collect()).unwrap()
    }

    #[test]
    fn new_board_locks_pair_rows() {
        let board = Board::new(5, 5);
        assert_eq!(board.num_words(), 6);

        assert!(board.word(0).is_locked());
        assert!(board.word(0).is_pair_word());
        assert!(board.word(5).is_locked());
        assert!(board.word(5).is_pair_word());

        for index in 1..5 {
            assert!(!board.word(index).is_locked());
            assert!(!board.word(index).is_pair_word());
        }
    }

    #[test]
    fn initialize_sets_pair_words_and_relocks() {
        let mut board = Board::new(5, 5);
        board.initialize("HELLO", "WORLD").unwrap();

        assert_eq!(board.word(0).stringify().as_deref(), Some("HELLO"));
        assert_eq!(board.word(5).stringify().as_deref(), Some("WORLD"));
        assert!(board.word(0).is_locked());
        assert!(board.word(5).is_locked());

        // Server-provided characters are not player input.
        assert!(board.word(0).letters().iter().all(|l| !l.is_user_entered()));
    }

    #[test]
    fn initialize_rejects_wrong_length() {
        let mut board = Board::new(5, 5);
        let err = board.initialize("HI", "WORLD").unwrap_err();
        assert_eq!(
            err,
            BoardError::LengthMismatch {
                expected: 5,
                got: 2
            }
        );
        assert_eq!(board.word(0).stringify(), None);
    }

    #[test]
    fn all_words_populated_needs_every_row() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "CORD").unwrap();
        assert!(!board.all_words_populated());

        board.word_mut(1).set_text("CORD", true);
        assert!(board.all_words_populated());
    }

    #[test]
    fn add_solution_deduplicates() {
        let mut board = Board::new(4, 2);
        let path = &["COLD", "CORD", "WORD"];

        assert!(board.add_solution(solution_from(path)));
        assert!(!board.add_solution(solution_from(path)));
        assert_eq!(board.solution_count(), 1);
    }

    #[test]
    fn add_solution_rejects_wrong_row_count() {
        let mut board = Board::new(4, 2);
        assert!(!board.add_solution(solution_from(&["COLD", "WORD"])));
    }

    #[test]
    fn overlay_round_trip_restores_exact_state() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        board.word_mut(1).set_ch(0, Some('C'), true);
        board.word_mut(1).set_ch(1, Some('O'), true);
        board.add_solution(solution_from(&["COLD", "CORD", "WORD"]));

        let before = board.words().to_vec();

        board.show_solution(0);
        assert!(board.overlay_active());
        // Unfilled cells take solution letters; user-entered ones survive.
        assert_eq!(board.word(1).stringify().as_deref(), Some("CORD"));
        assert!(board.word(1).letter(0).is_user_entered());
        assert!(!board.word(1).letter(2).is_user_entered());

        assert!(board.revert_overlay());
        assert!(!board.overlay_active());
        assert_eq!(board.words(), &before[..]);
    }

    #[test]
    fn overlay_preserves_user_entered_characters() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        // Player typed something that disagrees with the solution.
        board.word_mut(1).set_ch(1, Some('X'), true);
        board.add_solution(solution_from(&["COLD", "CORD", "WORD"]));

        board.show_solution(0);
        assert_eq!(board.word(1).stringify().as_deref(), Some("CXRD"));
        board.revert_overlay();
    }

    #[test]
    fn second_show_solution_is_a_no_op_until_revert() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        board.add_solution(solution_from(&["COLD", "CORD", "WORD"]));
        board.add_solution(solution_from(&["COLD", "WOLD", "WORD"]));

        board.show_solution(0);
        board.show_solution(1);
        assert_eq!(board.word(1).stringify().as_deref(), Some("CORD"));

        board.revert_overlay();
        board.show_solution(1);
        assert_eq!(board.word(1).stringify().as_deref(), Some("WOLD"));
        board.revert_overlay();
    }

    #[test]
    fn overlay_ignores_out_of_range_index() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        board.show_solution(3);
        assert!(!board.overlay_active());
        assert!(!board.revert_overlay());
    }

    #[test]
    fn overlay_does_not_disturb_statuses_after_revert() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        board.word_mut(1).set_text("CORD", true);
        board.word_mut(1).set_status(WordStatus::Solved);
        board.add_solution(solution_from(&["COLD", "CORD", "WORD"]));

        board.show_solution(0);
        board.revert_overlay();
        assert_eq!(board.word(1).status(), WordStatus::Solved);
    }
}
