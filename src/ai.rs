//! Hunt/target heuristic for the AI side.
//!
//! Target mode probes the untargeted axis-neighbors of every recorded hit;
//! hunt mode falls back to a uniform pick over all untargeted cells. The
//! heuristic deliberately does not infer a ship's orientation from two
//! aligned hits; it keeps probing all four neighbors of each hit.

use crate::board::Coord;
use crate::config::BOARD_SIZE;
use crate::shots::ShotRecord;
use rand::Rng;

/// Choose the AI's next target. Never returns a cell already marked hit or
/// miss; returns `None` only when every cell has been fired at.
pub fn choose_target<R: Rng + ?Sized>(shots: &ShotRecord, rng: &mut R) -> Option<Coord> {
    let pool = adjacent_to_hits(shots);
    let pool = if pool.is_empty() {
        shots.untargeted_cells()
    } else {
        pool
    };
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}

/// Untargeted in-bounds axis-neighbors of every recorded hit.
fn adjacent_to_hits(shots: &ShotRecord) -> Vec<Coord> {
    let mut out = Vec::new();
    for hit in shots.hit_cells() {
        let (row, col) = (hit.row as i8, hit.col as i8);
        for (dr, dc) in [(-1i8, 0i8), (0, 1), (1, 0), (0, -1)] {
            let (r, c) = (row + dr, col + dc);
            if r < 0 || c < 0 || r as usize >= BOARD_SIZE || c as usize >= BOARD_SIZE {
                continue;
            }
            if !shots.is_targeted(r as usize, c as usize) {
                out.push(Coord::new(r as u8, c as u8));
            }
        }
    }
    out
}
