//! Core domain types for the word-ladder board
//!
//! The fundamental board types: letters, word rows, the board itself, and
//! accepted solutions. Everything here is pure state with no network or
//! terminal dependencies.

mod board;
mod letter;
mod solution;
mod word;

pub use board::{Board, BoardError};
pub use letter::Letter;
pub use solution::{Solution, SolutionError};
pub use word::{Word, WordStatus};
