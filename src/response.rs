//! Response documents written to stdout.

use crate::error::SelectorError;
use crate::request::Cell;
use derive_more::From;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The chosen move, with a human-readable note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct BotResponse {
    /// Cell to play, or [`Cell::NONE`] when the board is full.
    #[serde(rename = "move")]
    pub chosen: Cell,
    /// Free-form annotation. Not machine-parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

/// Reported instead of a move when the input could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorResponse {
    /// One of the fixed wire messages.
    pub error: String,
}

impl From<&SelectorError> for ErrorResponse {
    fn from(err: &SelectorError) -> Self {
        Self::new(err.wire_message())
    }
}

/// Exactly one of these is written per process run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, From)]
#[serde(untagged)]
pub enum Response {
    /// A move (possibly the sentinel).
    Move(BotResponse),
    /// An input failure.
    Error(ErrorResponse),
}

impl Response {
    /// Error document for a failed decode.
    pub fn rejected(err: &SelectorError) -> Self {
        warn!(error = %err, "Rejecting input");
        Response::Error(ErrorResponse::from(err))
    }

    /// Serializes as compact single-line JSON, without the line terminator.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Returns the move, if this is a move response.
    pub fn chosen(&self) -> Option<Cell> {
        match self {
            Response::Move(resp) => Some(resp.chosen),
            Response::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectorErrorKind;

    #[test]
    fn move_line_is_exact() {
        let resp = Response::from(BotResponse::new(
            Cell::new(2, 3),
            Some("Random move for X".to_string()),
        ));
        assert_eq!(
            resp.to_line().unwrap(),
            r#"{"move":{"row":2,"col":3},"debug":"Random move for X"}"#
        );
    }

    #[test]
    fn debug_is_omitted_when_absent() {
        let resp = Response::from(BotResponse::new(Cell::NONE, None));
        assert_eq!(resp.to_line().unwrap(), r#"{"move":{"row":-1,"col":-1}}"#);
    }

    #[test]
    fn error_lines_are_exact() {
        let parse = SelectorError::new(SelectorErrorKind::Parse, "bad");
        let invalid = SelectorError::new(SelectorErrorKind::InvalidInput, "null");
        assert_eq!(
            Response::from(ErrorResponse::from(&parse)).to_line().unwrap(),
            r#"{"error":"JSON parse error"}"#
        );
        assert_eq!(
            Response::from(ErrorResponse::from(&invalid)).to_line().unwrap(),
            r#"{"error":"Invalid input data"}"#
        );
    }
}
