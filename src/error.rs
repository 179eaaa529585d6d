//! Selector error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kinds of recoverable failure reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SelectorErrorKind {
    /// Input bytes are not a JSON document shaped like a board request.
    #[display("JSON parse error")]
    Parse,
    /// Input decoded, but to an empty (`null`) document.
    #[display("Invalid input data")]
    InvalidInput,
}

/// Selector error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Selector error ({}): {} at {}:{}", kind, message, file, line)]
pub struct SelectorError {
    /// What went wrong, as reported on the wire.
    pub kind: SelectorErrorKind,
    /// Detail for logs. Never sent to the caller.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SelectorError {
    /// Creates a new selector error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: SelectorErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Message sent to the caller in the `error` field.
    pub fn wire_message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<serde_json::Error> for SelectorError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(SelectorErrorKind::Parse, format!("Decode error: {}", err))
    }
}

impl From<std::io::Error> for SelectorError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(SelectorErrorKind::Parse, format!("Read error: {}", err))
    }
}
