//! Game session state and keyboard-driven state machine
//!
//! The machine owns one session's board and cursor; settings arrive from the
//! CLI layer and stay read-only; input arrives pre-classified from the
//! interactive layer.

mod input;
mod machine;
pub mod settings;

pub use input::InputKey;
pub use machine::{
    Command, Cursor, Effect, GameMachine, GameStatus, Message, MessageKind, SoundCue,
};
pub use settings::{Difficulty, GameMode, HintType, PlayerSettings};
