//! Wordhop
//!
//! Client for a word-ladder puzzle game: transform a start word into an end
//! word through single-step hops, with every word verified by a remote
//! puzzle service. The client owns the board state machine and the terminal
//! interface; word generation, validation, and hints all live on the server.
//!
//! # Quick Start
//!
//! ```rust
//! use wordhop::core::Board;
//!
//! let mut board = Board::new(5, 5);
//! board.initialize("HELLO", "WORLD").unwrap();
//! assert_eq!(board.word(0).stringify().as_deref(), Some("HELLO"));
//! ```

// Core board types
pub mod core;

// Game state machine and settings
pub mod game;

// Remote puzzle-service client
pub mod gateway;

// Cooperative timers and the solution cycler
pub mod sched;

// Interactive TUI interface
pub mod interactive;

// Terminal output for the probe command
pub mod output;
