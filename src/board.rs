//! Board state: a 10×10 grid where each cell either is empty or references
//! one segment of a placed ship.

use crate::config::{ShipClass, BOARD_SIZE};
use crate::error::PlacementError;
use serde::{Deserialize, Serialize};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Cell coordinate, `row` and `col` each in `0..10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Coord { row, col }
    }

    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }
}

/// One occupied cell: which ship, which of its segments, and how the ship
/// lies. Serializes as `{shipId, segmentIndex, orientation}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(rename = "shipId")]
    pub ship: ShipClass,
    pub segment_index: u8,
    pub orientation: Orientation,
}

type Grid = [[Option<Segment>; BOARD_SIZE]; BOARD_SIZE];

/// A side's ship layout. Serializes transparently as the 10×10 matrix of
/// `null | Segment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    grid: Grid,
}

impl Board {
    /// Empty board, no ships placed.
    pub fn new() -> Self {
        Board {
            grid: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Segment at (row, col), if any. Out-of-range coordinates read as empty.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Segment> {
        self.grid.get(row)?.get(col)?.as_ref()
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some()
    }

    /// Coordinates of every ship segment on the board.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.as_ref().map(|_| Coord::new(r as u8, c as u8))
            })
        })
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied_cells().count()
    }

    /// The cells `ship` would occupy from the given origin, or `None` if the
    /// placement runs off the board.
    fn span(
        ship: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Option<[(usize, usize); 5]> {
        let len = ship.length();
        match orientation {
            Orientation::Horizontal if col + len > BOARD_SIZE => return None,
            Orientation::Vertical if row + len > BOARD_SIZE => return None,
            _ => {}
        }
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        let mut cells = [(0usize, 0usize); 5];
        for (i, slot) in cells.iter_mut().enumerate().take(len) {
            *slot = match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            };
        }
        Some(cells)
    }

    /// Whether `ship` fits at the given origin without leaving the board or
    /// overlapping a placed ship.
    pub fn fits(&self, ship: ShipClass, orientation: Orientation, row: usize, col: usize) -> bool {
        match Self::span(ship, orientation, row, col) {
            Some(cells) => cells[..ship.length()]
                .iter()
                .all(|&(r, c)| !self.is_occupied(r, c)),
            None => false,
        }
    }

    /// Place `ship` with its first segment at (row, col). Validates bounds
    /// and overlap before writing, so a rejected placement leaves the board
    /// unchanged.
    pub fn place(
        &mut self,
        ship: ShipClass,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<(), PlacementError> {
        let cells = Self::span(ship, orientation, row, col).ok_or(PlacementError::OutOfBounds)?;
        let len = ship.length();
        if cells[..len].iter().any(|&(r, c)| self.is_occupied(r, c)) {
            return Err(PlacementError::Overlap);
        }
        for (i, &(r, c)) in cells[..len].iter().enumerate() {
            self.grid[r][c] = Some(Segment {
                ship,
                segment_index: i as u8,
                orientation,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
