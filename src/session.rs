//! The match state machine: two seats, turn order, and match status.
//!
//! A session is created Open with only seat A populated, becomes Active when
//! a second side attaches (human join or AI challenge), and Completed when a
//! shot leaves the opponent's whole fleet hit. Completed is terminal.
//!
//! The engine performs no internal locking; callers must serialize
//! mutations per session.

use crate::ai;
use crate::board::{Board, Coord};
use crate::error::EngineError;
use crate::generator;
use crate::resolver::{self, ShotOutcome};
use crate::shots::ShotRecord;
use log::{debug, info};
use rand::Rng;
use std::time::SystemTime;
use uuid::Uuid;

/// Stable external identity of a registered human.
pub type PlayerId = Uuid;

/// One participant: a registered human or the built-in AI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Side {
    Human { id: PlayerId, username: String },
    Ai,
}

impl Side {
    pub fn is_ai(&self) -> bool {
        matches!(self, Side::Ai)
    }

    /// Display name; the AI presents as "Computer".
    pub fn username(&self) -> &str {
        match self {
            Side::Human { username, .. } => username,
            Side::Ai => "Computer",
        }
    }

    fn is_actor(&self, actor: Actor) -> bool {
        match (self, actor) {
            (Side::Human { id, .. }, Actor::Human(actor_id)) => *id == actor_id,
            (Side::Ai, Actor::Ai) => true,
            _ => false,
        }
    }
}

/// Identity a command is issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Human(PlayerId),
    Ai,
}

/// Match lifecycle. `Open → Active → Completed`, no other transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Open,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeatId {
    A,
    B,
}

impl SeatId {
    fn opponent(self) -> SeatId {
        match self {
            SeatId::A => SeatId::B,
            SeatId::B => SeatId::A,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Seat {
    pub(crate) side: Side,
    pub(crate) board: Board,
    pub(crate) shots: ShotRecord,
}

/// Outcome of one resolved shot, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FireReport {
    pub target: Coord,
    pub outcome: ShotOutcome,
    /// Opponent's fleet is fully hit.
    pub fleet_destroyed: bool,
    /// The session transitioned to Completed on this shot.
    pub completed: bool,
    pub winner: Option<Side>,
}

/// A single match. Owns both seats' boards and shot records.
#[derive(Debug, Clone)]
pub struct GameSession {
    created_by: PlayerId,
    seat_a: Seat,
    seat_b: Option<Seat>,
    status: Status,
    turn: SeatId,
    winner: Option<SeatId>,
    started_at: SystemTime,
    ended_at: Option<SystemTime>,
}

impl GameSession {
    /// Open a new session: seat A gets a freshly generated board, seat B is
    /// left empty until someone attaches.
    pub fn create<R: Rng + ?Sized>(
        creator: PlayerId,
        username: impl Into<String>,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let board = generator::generate(rng)?;
        Ok(GameSession {
            created_by: creator,
            seat_a: Seat {
                side: Side::Human {
                    id: creator,
                    username: username.into(),
                },
                board,
                shots: ShotRecord::new(),
            },
            seat_b: None,
            status: Status::Open,
            turn: SeatId::A,
            winner: None,
            started_at: SystemTime::now(),
            ended_at: None,
        })
    }

    /// Attach a second human. Rejects non-open sessions and the creator
    /// joining their own game.
    pub fn attach_human<R: Rng + ?Sized>(
        &mut self,
        joiner: PlayerId,
        username: impl Into<String>,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if self.status != Status::Open {
            return Err(EngineError::SessionNotOpen);
        }
        if joiner == self.created_by {
            return Err(EngineError::SelfJoin);
        }
        self.attach(
            Side::Human {
                id: joiner,
                username: username.into(),
            },
            rng,
        )
    }

    /// Attach the AI as seat B. Only the creator may do this.
    pub fn attach_ai<R: Rng + ?Sized>(
        &mut self,
        requester: PlayerId,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if self.status != Status::Open {
            return Err(EngineError::SessionNotOpen);
        }
        if requester != self.created_by {
            return Err(EngineError::NotYourCreation);
        }
        self.attach(Side::Ai, rng)
    }

    fn attach<R: Rng + ?Sized>(&mut self, side: Side, rng: &mut R) -> Result<(), EngineError> {
        if self.status != Status::Open {
            return Err(EngineError::SessionNotOpen);
        }
        let board = generator::generate(rng)?;
        self.seat_b = Some(Seat {
            side,
            board,
            shots: ShotRecord::new(),
        });
        self.status = Status::Active;
        // creator always moves first
        self.turn = SeatId::A;
        info!(
            "session active: {} vs {}",
            self.seat_a.side.username(),
            self.side_b().map(Side::username).unwrap_or("?")
        );
        Ok(())
    }

    /// Fire at (row, col) as `actor`. On a fleet-destroying shot the session
    /// completes with `actor` as winner; otherwise the turn flips.
    pub fn fire(&mut self, actor: Actor, row: u8, col: u8) -> Result<FireReport, EngineError> {
        if self.status != Status::Active {
            return Err(EngineError::SessionNotActive);
        }
        let seat_id = self.seat_of(actor).ok_or(EngineError::NotYourTurn)?;
        if seat_id != self.turn {
            return Err(EngineError::NotYourTurn);
        }

        let (shooter, opponent) = self.split_seats(seat_id)?;
        let report = resolver::resolve(&opponent.board, &mut shooter.shots, row, col)?;
        debug!(
            "{} fires at ({}, {}): {:?}",
            shooter.side.username(),
            row,
            col,
            report.outcome
        );

        let winner = if report.fleet_destroyed {
            self.status = Status::Completed;
            self.winner = Some(seat_id);
            self.ended_at = Some(SystemTime::now());
            let side = self.seat(seat_id).side.clone();
            info!("session completed, winner: {}", side.username());
            Some(side)
        } else {
            self.turn = seat_id.opponent();
            None
        };

        Ok(FireReport {
            target: Coord::new(row, col),
            outcome: report.outcome,
            fleet_destroyed: report.fleet_destroyed,
            completed: report.fleet_destroyed,
            winner,
        })
    }

    /// Run the AI's turn. `Ok(None)` when the turn owner is not the AI, so a
    /// duplicate invocation for the same turn is a no-op.
    pub fn ai_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<FireReport>, EngineError> {
        if self.status != Status::Active {
            return Err(EngineError::SessionNotActive);
        }
        let seat = self.seat(self.turn);
        if !seat.side.is_ai() {
            return Ok(None);
        }
        // While the session is active some ship cell is unhit, and an unhit
        // ship cell is never marked miss, so an untargeted cell exists.
        let target =
            ai::choose_target(&seat.shots, rng).ok_or(EngineError::InvalidTarget)?;
        self.fire(Actor::Ai, target.row, target.col).map(Some)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn created_by(&self) -> PlayerId {
        self.created_by
    }

    /// Current turn owner; `None` unless the session is active.
    pub fn turn_owner(&self) -> Option<&Side> {
        if self.status != Status::Active {
            return None;
        }
        Some(&self.seat(self.turn).side)
    }

    pub fn winner(&self) -> Option<&Side> {
        self.winner.map(|id| &self.seat(id).side)
    }

    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    pub fn side_a(&self) -> &Side {
        &self.seat_a.side
    }

    pub fn side_b(&self) -> Option<&Side> {
        self.seat_b.as_ref().map(|seat| &seat.side)
    }

    /// A side's own shot history, by acting identity.
    pub fn shot_record(&self, actor: Actor) -> Option<&ShotRecord> {
        let seat_id = self.seat_of(actor)?;
        Some(&self.seat(seat_id).shots)
    }

    fn seat(&self, id: SeatId) -> &Seat {
        match id {
            SeatId::A => &self.seat_a,
            // seat B is only ever addressed after attach
            SeatId::B => self.seat_b.as_ref().unwrap_or(&self.seat_a),
        }
    }

    pub(crate) fn seat_a(&self) -> &Seat {
        &self.seat_a
    }

    pub(crate) fn seat_b_ref(&self) -> Option<&Seat> {
        self.seat_b.as_ref()
    }

    fn seat_of(&self, actor: Actor) -> Option<SeatId> {
        if self.seat_a.side.is_actor(actor) {
            return Some(SeatId::A);
        }
        match &self.seat_b {
            Some(seat) if seat.side.is_actor(actor) => Some(SeatId::B),
            _ => None,
        }
    }

    fn split_seats(&mut self, shooter: SeatId) -> Result<(&mut Seat, &Seat), EngineError> {
        match shooter {
            SeatId::A => {
                let opponent = self.seat_b.as_ref().ok_or(EngineError::SessionNotActive)?;
                Ok((&mut self.seat_a, opponent))
            }
            SeatId::B => {
                let shooter = self.seat_b.as_mut().ok_or(EngineError::SessionNotActive)?;
                Ok((shooter, &self.seat_a))
            }
        }
    }
}
