//! Strictly Gridbot library - a minimal bot for grid game arenas
//!
//! The arena runs the bot once per turn, feeding a JSON board request on
//! stdin and reading a JSON move from stdout.
//!
//! # Architecture
//!
//! - **Request**: permissive decoding of the board document
//! - **Board**: row-major scan for empty cells
//! - **Selector**: uniform random choice among them
//! - **Response**: the move or error document
//!
//! # Example
//!
//! ```
//! use strictly_gridbot::MoveSelector;
//!
//! let mut selector = MoveSelector::seeded(3);
//! let response = selector.respond(br#"{"boardSize":1,"board":[["X"]]}"#);
//! assert_eq!(
//!     response.to_line().unwrap(),
//!     r#"{"move":{"row":-1,"col":-1},"debug":"Random move for X"}"#
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod request;
mod response;
mod selector;

// Crate-level exports - Errors
pub use error::{SelectorError, SelectorErrorKind};

// Crate-level exports - Wire types
pub use request::{BoardRequest, Cell, Marker, parse_request};
pub use response::{BotResponse, ErrorResponse, Response};

// Crate-level exports - Board scanning and move selection
pub use board::Board;
pub use selector::MoveSelector;
