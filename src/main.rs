//! Strictly Gridbot - one turn per process
//!
//! Reads a board request from stdin, writes one JSON line to stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use cli::Cli;
use std::io::{Read, Write};
use strictly_gridbot::{MoveSelector, Response, SelectorError};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    initialize_tracing();

    let cli = Cli::parse_lenient(std::env::args_os());
    let mut selector = match cli.seed {
        Some(seed) => MoveSelector::seeded(seed),
        None => MoveSelector::new(),
    };

    let response = match read_input() {
        Ok(input) => selector.respond(&input),
        Err(err) => Response::rejected(&err),
    };

    write_response(&response)
}

/// Logs go to stderr; stdout carries only the response line.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reads stdin to end of stream.
#[instrument]
fn read_input() -> Result<Vec<u8>, SelectorError> {
    let mut input = Vec::new();
    std::io::stdin().lock().read_to_end(&mut input)?;
    debug!(bytes = input.len(), "Input received");
    Ok(input)
}

#[instrument(skip(response))]
fn write_response(response: &Response) -> Result<()> {
    let line = response.to_line()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line)?;
    stdout.flush()?;
    debug!(%line, "Response written");
    Ok(())
}
