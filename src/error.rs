//! Engine error taxonomy. Every error is a pure return value; a failed
//! operation leaves the session untouched.

use thiserror::Error;

/// Errors surfaced at the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Unknown session id.
    #[error("session not found")]
    SessionNotFound,
    /// Attach attempted on a session that is already active or completed.
    #[error("session is not open for joining")]
    SessionNotOpen,
    /// The joining identity is the session's creator.
    #[error("cannot join your own session")]
    SelfJoin,
    /// Only the creator may attach the AI to their session.
    #[error("only the creator can challenge the AI")]
    NotYourCreation,
    /// Fire or AI turn attempted outside the active state.
    #[error("session is not active")]
    SessionNotActive,
    /// The actor is not the current turn owner.
    #[error("not your turn")]
    NotYourTurn,
    /// Target cell is out of range or was already shot. The turn is not
    /// consumed.
    #[error("cell is out of range or already targeted")]
    InvalidTarget,
    /// Board generation ran out of valid placements.
    #[error("fleet placement exhausted the board")]
    PlacementExhausted,
}

/// Errors from placing a single ship on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Ship extends past the board edge.
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    /// Ship overlaps a previously placed ship.
    #[error("ship placement overlaps another ship")]
    Overlap,
}
