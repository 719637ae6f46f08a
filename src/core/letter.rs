//! A single letter cell on the board
//!
//! A Letter holds at most one uppercase character, a lock flag, and a marker
//! distinguishing player-typed characters from solution-overlay characters.

/// One character cell of a [`Word`](crate::core::Word)
///
/// Locked letters refuse character mutation; the lock itself can always be
/// toggled. `user_entered` tracks whether the current character came from the
/// player (as opposed to pair-word initialization or a solution overlay).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Letter {
    ch: Option<char>,
    locked: bool,
    user_entered: bool,
}

impl Letter {
    /// Create an empty, unlocked letter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored character, if any
    #[inline]
    #[must_use]
    pub const fn ch(&self) -> Option<char> {
        self.ch
    }

    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    #[inline]
    #[must_use]
    pub const fn is_user_entered(&self) -> bool {
        self.user_entered
    }

    /// Store a character (or clear with `None`)
    ///
    /// A no-op on a locked letter. Returns `true` if the character was
    /// actually applied, so the owning word knows to recompute derived state.
    pub fn set_ch(&mut self, value: Option<char>) -> bool {
        if self.locked {
            return false;
        }
        self.ch = value;
        true
    }

    /// Toggle the lock; unconditional and leaves the character alone
    pub fn set_locked(&mut self, value: bool) {
        self.locked = value;
    }

    pub fn set_user_entered(&mut self, value: bool) {
        self.user_entered = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_letter_is_empty_and_unlocked() {
        let letter = Letter::new();
        assert_eq!(letter.ch(), None);
        assert!(!letter.is_locked());
        assert!(!letter.is_user_entered());
    }

    #[test]
    fn set_ch_stores_and_clears() {
        let mut letter = Letter::new();
        assert!(letter.set_ch(Some('A')));
        assert_eq!(letter.ch(), Some('A'));
        assert!(letter.set_ch(None));
        assert_eq!(letter.ch(), None);
    }

    #[test]
    fn locked_letter_rejects_mutation() {
        let mut letter = Letter::new();
        letter.set_ch(Some('A'));
        letter.set_locked(true);

        assert!(!letter.set_ch(Some('B')));
        assert_eq!(letter.ch(), Some('A'));
    }

    #[test]
    fn unlocking_does_not_touch_character() {
        let mut letter = Letter::new();
        letter.set_ch(Some('Q'));
        letter.set_locked(true);
        letter.set_locked(false);
        assert_eq!(letter.ch(), Some('Q'));
        assert!(letter.set_ch(Some('R')));
    }
}
