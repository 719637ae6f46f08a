//! Classified keyboard input for the game
//!
//! The interactive layer maps raw terminal events onto this enum; the state
//! machine dispatches on it without knowing anything about crossterm. Keys
//! that match no variant never reach the machine.

/// One classified keystroke aimed at the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// A printable character; only ASCII alphabetic ones take effect
    Char(char),
    /// Clear the current cell and step the cursor left
    Backspace,
    /// Clear the current cell in place
    Delete,
    /// Submit the current word for validation
    Enter,
    Up,
    Down,
    Left,
    Right,
}
