//! HTTP client for the external puzzle generator/solver service.
//!
//! The service speaks a tiny request/response protocol: `GET /random` returns
//! a fresh puzzle and `GET /sudoku?board=<81 chars>` returns its solution,
//! both as `{"board": "<81 digit characters, 0 = blank>"}`. This crate only
//! moves boards across the wire; retry policy and loading-state display
//! belong to the caller.

use log::debug;
use ninefold_core::{DigitGrid, ParseGridError};

/// Wire payload shared by both service endpoints.
#[derive(Debug, serde::Deserialize)]
struct BoardPayload {
    board: String,
}

/// Errors produced while talking to the puzzle service.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ClientError {
    /// The request could not be sent or the response body not read.
    #[display("puzzle service request failed: {_0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[display("puzzle service returned status {code}")]
    Status {
        /// HTTP status code of the response.
        code: u16,
    },
    /// The response body was not the expected JSON document.
    #[display("malformed puzzle service payload: {_0}")]
    Payload(#[from] serde_json::Error),
    /// The board string inside the payload did not parse.
    #[display("malformed board in puzzle service payload: {_0}")]
    Grid(#[from] ParseGridError),
}

/// Client for the puzzle generator/solver service.
///
/// Blocking by design: the app calls it from a background worker thread and
/// ships results back over a channel, so nothing here needs an async runtime.
#[derive(Debug, Clone)]
pub struct PuzzleClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl PuzzleClient {
    /// Creates a client for the service rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetches a fresh puzzle board.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request fails, the service answers
    /// with a non-success status, or the payload is malformed.
    pub fn fetch_random(&self) -> Result<DigitGrid, ClientError> {
        let url = format!("{}/random", self.base_url);
        debug!("fetching a fresh board from {url}");
        self.get_board(&url)
    }

    /// Fetches the solved form of `board`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request fails, the service answers
    /// with a non-success status, or the payload is malformed.
    pub fn fetch_solution(&self, board: &DigitGrid) -> Result<DigitGrid, ClientError> {
        let url = format!("{}/sudoku?board={board}", self.base_url);
        debug!("fetching the solved board from {url}");
        self.get_board(&url)
    }

    fn get_board(&self, url: &str) -> Result<DigitGrid, ClientError> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                code: status.as_u16(),
            });
        }
        let body = response.text()?;
        parse_payload(&body)
    }
}

/// Decodes a service response body into a grid.
fn parse_payload(body: &str) -> Result<DigitGrid, ClientError> {
    let payload: BoardPayload = serde_json::from_str(body)?;
    Ok(payload.board.parse()?)
}
