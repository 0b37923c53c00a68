//! Random fleet placement.
//!
//! Each ship is rejection-sampled: a uniform orientation and origin, retried
//! while the candidate runs off the board or overlaps. The retry budget is
//! bounded; once spent we enumerate every placement that is still valid and
//! pick one uniformly, so generation terminates even on a packed board.

use crate::board::{Board, Orientation};
use crate::config::{ShipClass, BOARD_SIZE, FLEET};
use crate::error::EngineError;
use rand::Rng;

const MAX_RANDOM_ATTEMPTS: usize = 200;

/// Generate a full fleet layout. The same RNG state always yields the same
/// board.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, EngineError> {
    let mut board = Board::new();
    for &ship in FLEET.iter() {
        place_ship(&mut board, ship, rng)?;
    }
    debug_assert_eq!(board.occupied_count(), crate::config::TOTAL_SHIP_CELLS);
    Ok(board)
}

fn place_ship<R: Rng + ?Sized>(
    board: &mut Board,
    ship: ShipClass,
    rng: &mut R,
) -> Result<(), EngineError> {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        if board.place(ship, orientation, row, col).is_ok() {
            return Ok(());
        }
    }

    // Budget spent: fall back to a uniform pick over the remaining valid
    // placements.
    let candidates = valid_placements(board, ship);
    if candidates.is_empty() {
        return Err(EngineError::PlacementExhausted);
    }
    let (orientation, row, col) = candidates[rng.random_range(0..candidates.len())];
    board
        .place(ship, orientation, row, col)
        .map_err(|_| EngineError::PlacementExhausted)
}

/// Every (orientation, row, col) where `ship` currently fits.
pub fn valid_placements(board: &Board, ship: ShipClass) -> Vec<(Orientation, usize, usize)> {
    let mut out = Vec::new();
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if board.fits(ship, orientation, row, col) {
                    out.push((orientation, row, col));
                }
            }
        }
    }
    out
}
