//! Uniform random move selection.
//!
//! The whole turn is a pure function from one input document to one output
//! document. The only state is the random source, which is owned here so a
//! caller can inject a seed.

use crate::request::{BoardRequest, Cell, parse_request};
use crate::response::{BotResponse, Response};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// Picks a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct MoveSelector<R = StdRng> {
    rng: R,
}

impl MoveSelector<StdRng> {
    /// Creates a selector backed by an OS-seeded generator.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a reproducible selector.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for MoveSelector<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MoveSelector<R> {
    /// Creates a selector over any random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses an empty cell, or [`Cell::NONE`] if there is none.
    #[instrument(skip(self, request), fields(move_number = request.move_number()))]
    pub fn choose(&mut self, request: &BoardRequest) -> Cell {
        let board = request.grid();
        let empty = board.empty_cells();
        debug!(empty = empty.len(), board = %board.render(), "Scanned board");

        if empty.is_empty() {
            info!("No empty cells, returning sentinel");
            return Cell::NONE;
        }

        let chosen = empty[self.rng.gen_range(0..empty.len())];
        debug!(%chosen, "Picked cell");
        chosen
    }

    /// Chooses a move and annotates it with the bot's symbol.
    pub fn select(&mut self, request: &BoardRequest) -> BotResponse {
        let chosen = self.choose(request);
        BotResponse::new(
            chosen,
            Some(format!("Random move for {}", request.my_symbol())),
        )
    }

    /// Turns raw input bytes into the response document.
    ///
    /// Total: every input maps to exactly one response.
    #[instrument(skip(self, input), fields(input_len = input.len()))]
    pub fn respond(&mut self, input: &[u8]) -> Response {
        match parse_request(input) {
            Ok(request) => Response::Move(self.select(&request)),
            Err(err) => Response::rejected(&err),
        }
    }
}
