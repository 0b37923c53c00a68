//! A side's outgoing shot history against its opponent.
//!
//! Shots are recorded on the shooter, not as damage on the opponent's board.
//! A side therefore only ever sees its own history, which is what keeps an
//! unfinished opponent board hidden.

use crate::board::Coord;
use crate::config::BOARD_SIZE;
use serde::{Deserialize, Serialize};

type Mask = [[bool; BOARD_SIZE]; BOARD_SIZE];

/// Parallel hit/miss grids. For any cell at most one flag is ever set, and a
/// set flag is never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    hits: Mask,
    misses: Mask,
}

impl ShotRecord {
    pub fn new() -> Self {
        ShotRecord {
            hits: [[false; BOARD_SIZE]; BOARD_SIZE],
            misses: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn is_hit(&self, row: usize, col: usize) -> bool {
        self.hits
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_miss(&self, row: usize, col: usize) -> bool {
        self.misses
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Whether the cell has been fired at, either way.
    pub fn is_targeted(&self, row: usize, col: usize) -> bool {
        self.is_hit(row, col) || self.is_miss(row, col)
    }

    /// Mark a hit. The cell must not already be targeted.
    pub fn record_hit(&mut self, row: usize, col: usize) {
        debug_assert!(!self.is_targeted(row, col));
        self.hits[row][col] = true;
    }

    /// Mark a miss. The cell must not already be targeted.
    pub fn record_miss(&mut self, row: usize, col: usize) {
        debug_assert!(!self.is_targeted(row, col));
        self.misses[row][col] = true;
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().flatten().filter(|&&b| b).count()
    }

    /// Coordinates of every recorded hit.
    pub fn hit_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        cells_where(&self.hits)
    }

    /// Coordinates not yet fired at.
    pub fn untargeted_cells(&self) -> Vec<Coord> {
        let mut out = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if !self.is_targeted(row, col) {
                    out.push(Coord::new(row as u8, col as u8));
                }
            }
        }
        out
    }

    pub fn hits(&self) -> &Mask {
        &self.hits
    }

    pub fn misses(&self) -> &Mask {
        &self.misses
    }
}

impl Default for ShotRecord {
    fn default() -> Self {
        ShotRecord::new()
    }
}

fn cells_where(mask: &Mask) -> impl Iterator<Item = Coord> + '_ {
    mask.iter().enumerate().flat_map(|(r, row)| {
        row.iter()
            .enumerate()
            .filter_map(move |(c, &set)| set.then(|| Coord::new(r as u8, c as u8)))
    })
}
