//! Board request decoding.
//!
//! The arena driver sends one JSON document per process. Decoding is
//! permissive: unknown fields are ignored and the optional fields fall back
//! to their documented defaults.

use crate::board::Board;
use crate::error::{SelectorError, SelectorErrorKind};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// A (row, column) coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Zero-based row index.
    pub row: i64,
    /// Zero-based column index.
    pub col: i64,
}

impl Cell {
    /// Sentinel meaning "no legal move available".
    pub const NONE: Cell = Cell { row: -1, col: -1 };

    /// Creates a new cell.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns true for the no-move sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One grid position as sent on the wire: a marker string, or `null`.
pub type Marker = Option<String>;

/// Board state sent by the arena for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(prefix = "with_", into)]
pub struct BoardRequest {
    /// Claimed board dimension. Informational only.
    #[serde(default)]
    board_size: i32,

    /// Row-major grid of markers.
    board: Vec<Vec<Marker>>,

    /// Marker this bot plays.
    #[serde(default = "default_my_symbol")]
    my_symbol: String,

    /// Marker the opponent plays.
    #[serde(default = "default_opponent_symbol")]
    opponent_symbol: String,

    /// The opponent's previous move, if any.
    #[serde(default)]
    last_move_opponent: Option<Cell>,

    /// Turn counter, starting at 1 in the arena.
    #[serde(default)]
    move_number: i32,
}

fn default_my_symbol() -> String {
    "X".to_string()
}

fn default_opponent_symbol() -> String {
    "O".to_string()
}

impl BoardRequest {
    /// Creates a request for the given grid with default symbols.
    pub fn new(board: Vec<Vec<Marker>>) -> Self {
        Self {
            board_size: i32::try_from(board.len()).unwrap_or(i32::MAX),
            board,
            my_symbol: default_my_symbol(),
            opponent_symbol: default_opponent_symbol(),
            last_move_opponent: None,
            move_number: 0,
        }
    }

    /// Borrowed grid view for scanning.
    pub fn grid(&self) -> Board<'_> {
        Board::new(&self.board)
    }
}

/// Decodes one request document from raw input bytes.
///
/// Not JSON, not UTF-8, or the wrong shape is a `Parse` error. A document
/// that is literally `null` decodes but carries nothing, and is
/// `InvalidInput`. Duplicate keys keep the last value.
#[instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_request(input: &[u8]) -> Result<BoardRequest, SelectorError> {
    // Through `Value` so repeated keys overwrite instead of failing the derive.
    let document: Value = serde_json::from_slice(input)?;
    let decoded: Option<BoardRequest> = serde_json::from_value(document)?;
    match decoded {
        Some(request) => {
            debug!(
                rows = request.board.len(),
                my_symbol = %request.my_symbol,
                move_number = request.move_number,
                "Request decoded"
            );
            Ok(request)
        }
        None => Err(SelectorError::new(
            SelectorErrorKind::InvalidInput,
            "Document decoded to null",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let request = parse_request(br#"{"board":[["X",""]]}"#).unwrap();
        assert_eq!(request.my_symbol(), "X");
        assert_eq!(request.opponent_symbol(), "O");
        assert_eq!(*request.board_size(), 0);
        assert_eq!(*request.move_number(), 0);
        assert!(request.last_move_opponent().is_none());
    }

    #[test]
    fn null_markers_decode_as_empty() {
        let request = parse_request(br#"{"board":[[null,"O"]]}"#).unwrap();
        assert_eq!(request.board()[0][0], None);
        assert_eq!(request.board()[0][1].as_deref(), Some("O"));
    }

    #[test]
    fn missing_board_is_parse_error() {
        let err = parse_request(br#"{"boardSize":3}"#).unwrap_err();
        assert_eq!(err.kind, SelectorErrorKind::Parse);
    }

    #[test]
    fn null_document_is_invalid_input() {
        let err = parse_request(b" null ").unwrap_err();
        assert_eq!(err.kind, SelectorErrorKind::InvalidInput);
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let request =
            parse_request(br#"{"board":[["X"]],"mySymbol":"O","mySymbol":"Z"}"#).unwrap();
        assert_eq!(request.my_symbol(), "Z");
    }

    #[test]
    fn counters_beyond_i32_are_parse_errors() {
        let err = parse_request(br#"{"board":[[""]],"moveNumber":3000000000}"#).unwrap_err();
        assert_eq!(err.kind, SelectorErrorKind::Parse);
        let err = parse_request(br#"{"board":[[""]],"boardSize":-2147483649}"#).unwrap_err();
        assert_eq!(err.kind, SelectorErrorKind::Parse);
        let request = parse_request(br#"{"board":[[""]],"moveNumber":2147483647}"#).unwrap();
        assert_eq!(*request.move_number(), i32::MAX);
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let err = parse_request(b"{\"board\":[[\"\xff\"]]}").unwrap_err();
        assert_eq!(err.kind, SelectorErrorKind::Parse);
    }
}
