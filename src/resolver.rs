//! Applies a single shot against an opponent's board.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::error::EngineError;
use crate::shots::ShotRecord;
use serde::{Deserialize, Serialize};

/// What one shot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Result of resolving one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// Every occupied cell of the opponent's board is now hit.
    pub fleet_destroyed: bool,
}

/// Resolve a shot at (row, col). The shooter's record is updated in place;
/// the opponent's board is read-only. Rejects out-of-range and repeated
/// targets with [`EngineError::InvalidTarget`] and mutates nothing.
pub fn resolve(
    opponent_board: &Board,
    actor_shots: &mut ShotRecord,
    row: u8,
    col: u8,
) -> Result<ShotReport, EngineError> {
    let (r, c) = (row as usize, col as usize);
    if r >= BOARD_SIZE || c >= BOARD_SIZE || actor_shots.is_targeted(r, c) {
        return Err(EngineError::InvalidTarget);
    }

    let outcome = if opponent_board.is_occupied(r, c) {
        actor_shots.record_hit(r, c);
        ShotOutcome::Hit
    } else {
        actor_shots.record_miss(r, c);
        ShotOutcome::Miss
    };

    // fleet check is a full scan of the opponent's occupied cells
    let fleet_destroyed = opponent_board
        .occupied_cells()
        .all(|cell| actor_shots.is_hit(cell.row as usize, cell.col as usize));

    Ok(ShotReport {
        outcome,
        fleet_destroyed,
    })
}
