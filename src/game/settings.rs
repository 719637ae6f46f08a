//! Player-facing puzzle configuration
//!
//! Supplied by the CLI layer and treated as read-only by the state machine.

use crate::gateway::HintKind;
use clap::ValueEnum;

/// How a session is framed; purely informational to the client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    #[default]
    Casual,
    Daily,
}

/// Difficulty requested from the word-pair generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Standard,
    Hard,
}

/// Which hint flavor to request from the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum HintType {
    #[default]
    Letter,
    Word,
}

impl HintType {
    /// The wire representation of this hint flavor
    #[must_use]
    pub const fn wire(self) -> HintKind {
        match self {
            Self::Letter => HintKind::Letter,
            Self::Word => HintKind::Word,
        }
    }
}

/// Read-only puzzle parameters for one session
#[derive(Debug, Clone)]
pub struct PlayerSettings {
    pub num_letters: usize,
    pub num_hops: usize,
    pub game_mode: GameMode,
    pub difficulty: Difficulty,
    pub hint_type: HintType,
    pub sound: bool,
    pub language: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            num_letters: 5,
            num_hops: 5,
            game_mode: GameMode::default(),
            difficulty: Difficulty::default(),
            hint_type: HintType::default(),
            sound: true,
            language: "en".to_string(),
        }
    }
}
