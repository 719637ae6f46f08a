//! Blocking HTTP client for the puzzle service
//!
//! One POST route per operation, JSON bodies, and a fixed client-side
//! timeout after which a call counts as a transport failure. Retries are the
//! caller's business; nothing here retries.

use crate::gateway::{
    Gateway, GatewayError, HintReply, HintRequest, TestWordReply, TestWordRequest, WordPair,
    WordPairRequest,
};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};

/// Client-side timeout for every service round trip
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Gateway talking JSON-over-HTTP to the remote puzzle service
pub struct HttpGateway {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpGateway {
    /// Build a gateway for the service at `base_url`
    ///
    /// # Errors
    /// Returns `GatewayError::Transport` if the underlying client cannot be
    /// constructed.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn post<B, R>(&self, route: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}/{route}", self.base_url);
        let started = Instant::now();

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{route}: HTTP {status} after {:?}", started.elapsed());
            return Err(GatewayError::Status(status.as_u16()));
        }

        let reply = response
            .json()
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        debug!("{route}: ok after {:?}", started.elapsed());
        Ok(reply)
    }
}

impl Gateway for HttpGateway {
    fn word_pair(&self, num_letters: usize, num_hops: usize) -> Result<WordPair, GatewayError> {
        self.post(
            "getWordPair",
            &WordPairRequest {
                num_letters,
                num_hops,
            },
        )
    }

    fn test_word(&self, request: &TestWordRequest) -> Result<TestWordReply, GatewayError> {
        self.post("testWord", request)
    }

    fn hint(&self, request: &HintRequest) -> Result<HintReply, GatewayError> {
        self.post("getHint", request)
    }
}
