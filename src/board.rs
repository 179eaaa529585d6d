//! Read-only view over a request grid.

use crate::request::{Cell, Marker};
use tracing::instrument;

/// Borrowed row-major grid.
///
/// Rows are trusted as sent: each row is scanned by its own length, so a
/// ragged grid is handled without padding or rejection.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    rows: &'a [Vec<Marker>],
}

impl<'a> Board<'a> {
    /// Wraps a grid of markers.
    pub fn new(rows: &'a [Vec<Marker>]) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Marker at the given cell, if the cell exists and is occupied.
    pub fn marker(&self, cell: Cell) -> Option<&'a str> {
        self.slot(cell)?.as_deref().filter(|m| !m.is_empty())
    }

    /// Checks if a cell is inside the grid and unoccupied.
    ///
    /// A marker of `null` or `""` counts as unoccupied.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.slot(cell), Some(slot) if is_vacant(slot))
    }

    /// Checks if `cell` is a playable move: inside the grid and empty.
    ///
    /// Uses the same emptiness rule as [`Board::empty_cells`], so a `null`
    /// marker is playable. The arena only ever sends `""` for free cells and
    /// checks for exactly that. The sentinel never qualifies.
    pub fn is_legal(&self, cell: Cell) -> bool {
        !cell.is_none() && self.is_empty(cell)
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|slot| !is_vacant(slot))
    }

    /// All empty cells in row-major order.
    #[instrument(skip(self), fields(rows = self.rows.len()))]
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, slot) in row.iter().enumerate() {
                if is_vacant(slot) {
                    cells.push(Cell::new(r as i64, c as i64));
                }
            }
        }
        cells
    }

    /// Formats the grid for logs: column header, row labels, `.` for empty.
    pub fn render(&self) -> String {
        let mut result = String::from("    ");
        for c in 0..self.width() {
            result.push_str(&format!("{:>3}", c));
        }
        result.push('\n');
        for (r, row) in self.rows.iter().enumerate() {
            result.push_str(&format!("{:>3} ", r));
            for slot in row {
                let symbol = match slot.as_deref() {
                    Some(m) if !m.is_empty() => m,
                    _ => ".",
                };
                result.push_str(&format!("{:>3}", symbol));
            }
            result.push('\n');
        }
        result
    }

    fn slot(&self, cell: Cell) -> Option<&'a Marker> {
        let r = usize::try_from(cell.row).ok()?;
        let c = usize::try_from(cell.col).ok()?;
        self.rows.get(r)?.get(c)
    }
}

fn is_vacant(slot: &Marker) -> bool {
    slot.as_deref().is_none_or(str::is_empty)
}
