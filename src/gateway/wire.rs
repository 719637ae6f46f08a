//! Request and reply shapes for the puzzle service
//!
//! Field names follow the service's camelCase JSON. Semantic failure travels
//! inside the reply body (`valid: false` plus `error`); only transport-level
//! trouble becomes a Rust error.

use serde::{Deserialize, Serialize};

/// Which hint flavor the service should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    /// One letter for one cell
    Letter,
    /// The entire word at the hinted row
    Word,
}

/// Body for `getWordPair`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPairRequest {
    pub num_letters: usize,
    pub num_hops: usize,
}

/// Reply from `getWordPair`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPair {
    pub start_word: String,
    pub end_word: String,
}

/// Body for `testWord`
///
/// `puzzle_words` carries every row's current text with the row under test
/// blanked out; the candidate itself rides in `test_word`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestWordRequest {
    pub puzzle_words: Vec<String>,
    pub test_word: String,
    pub test_position: usize,
}

/// Reply from `testWord`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestWordReply {
    pub test_position: usize,
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `getHint`
///
/// `puzzle_words` carries every row's partial text with unset cells rendered
/// as spaces; `hint_position` is the row the cursor is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintRequest {
    pub puzzle_words: Vec<String>,
    pub hint_position: usize,
    pub hint_kind: HintKind,
}

/// Reply from `getHint`, covering both hint flavors
///
/// A letter hint fills `hint_letter` (plus the cell index in
/// `letter_position`); a whole-word hint fills `hint_text` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintReply {
    pub hint_word: usize,
    #[serde(default)]
    pub letter_position: Option<usize>,
    #[serde(default)]
    pub hint_letter: Option<char>,
    #[serde(default)]
    pub hint_text: Option<String>,
    pub valid: bool,
    #[serde(default)]
    pub error: Option<String>,
}
