//! Interface to the remote puzzle service
//!
//! Word-pair generation, word validation, and hint computation all live on
//! the server; this module is the narrow client-side doorway to them. The
//! error taxonomy is deliberately binary: [`GatewayError`] means the
//! transport failed and no interpretable reply exists, while a well-formed
//! reply reporting an invalid word arrives as `Ok` with `valid: false`.

mod http;
mod wire;

pub use http::{HttpGateway, REQUEST_TIMEOUT};
pub use wire::{
    HintKind, HintReply, HintRequest, TestWordReply, TestWordRequest, WordPair, WordPairRequest,
};

use std::fmt;

/// Transport-level failure talking to the puzzle service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection, timeout, or other I/O trouble
    Transport(String),
    /// The service answered with a non-success HTTP status
    Status(u16),
    /// The reply body could not be decoded
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(detail) => write!(f, "Transport failure: {detail}"),
            Self::Status(code) => write!(f, "Service returned HTTP {code}"),
            Self::Decode(detail) => write!(f, "Undecodable reply: {detail}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// The three operations the client consumes from the puzzle service
///
/// Calls block; the interactive layer runs them on worker threads and feeds
/// results back to the event loop over a channel.
pub trait Gateway: Send + Sync {
    /// Fetch a start/end word pair for a fresh puzzle
    ///
    /// # Errors
    /// `GatewayError` on any transport-level failure.
    fn word_pair(&self, num_letters: usize, num_hops: usize) -> Result<WordPair, GatewayError>;

    /// Validate one word against the current puzzle
    ///
    /// # Errors
    /// `GatewayError` on any transport-level failure; a rejected word is an
    /// `Ok` reply with `valid: false`.
    fn test_word(&self, request: &TestWordRequest) -> Result<TestWordReply, GatewayError>;

    /// Ask the service for a hint at the current cursor row
    ///
    /// # Errors
    /// `GatewayError` on any transport-level failure.
    fn hint(&self, request: &HintRequest) -> Result<HintReply, GatewayError>;
}
