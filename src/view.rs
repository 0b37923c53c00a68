//! Sanitized projections of a session.
//!
//! Usernames, shot grids, status, turn, and timestamps are always visible.
//! A seat's ship layout is visible only to its owner while the match runs;
//! once completed, both layouts are visible to everyone.

use crate::board::Board;
use crate::config::BOARD_SIZE;
use crate::session::{GameSession, PlayerId, Side, Status};
use crate::store::SessionId;
use serde::{Serialize, Serializer};
use std::time::{SystemTime, UNIX_EPOCH};

/// Wire identity of a side: the human's uuid, or the string `"ai"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideRef {
    Human(PlayerId),
    Ai,
}

impl From<&Side> for SideRef {
    fn from(side: &Side) -> Self {
        match side {
            Side::Human { id, .. } => SideRef::Human(*id),
            Side::Ai => SideRef::Ai,
        }
    }
}

impl Serialize for SideRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SideRef::Human(id) => id.serialize(serializer),
            SideRef::Ai => serializer.serialize_str("ai"),
        }
    }
}

/// One side as a viewer is allowed to see it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideView {
    pub id: SideRef,
    pub username: String,
    pub hits: [[bool; BOARD_SIZE]; BOARD_SIZE],
    pub misses: [[bool; BOARD_SIZE]; BOARD_SIZE],
    /// Present only for the owner, or for everyone once completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
}

/// Full sanitized projection of one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub status: Status,
    /// Turn owner's identity; absent unless the session is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_turn: Option<SideRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<SideRef>,
    pub start_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    pub player1: SideView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2: Option<SideView>,
}

/// Listing entry: no boards, no shot grids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: SessionId,
    pub status: Status,
    pub start_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<SideRef>,
    pub player1: SeatSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player2: Option<SeatSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatSummary {
    pub id: SideRef,
    pub username: String,
}

impl From<&Side> for SeatSummary {
    fn from(side: &Side) -> Self {
        SeatSummary {
            id: side.into(),
            username: side.username().to_owned(),
        }
    }
}

impl GameSession {
    /// Project the session for `viewer`. `None` is a spectator.
    pub fn view(&self, viewer: Option<PlayerId>) -> SessionView {
        let completed = self.status() == Status::Completed;
        let reveal = |side: &Side| -> bool {
            if completed {
                return true;
            }
            match (side, viewer) {
                (Side::Human { id, .. }, Some(viewer_id)) => *id == viewer_id,
                _ => false,
            }
        };

        let seat_a = self.seat_a();
        let player1 = SideView {
            id: (&seat_a.side).into(),
            username: seat_a.side.username().to_owned(),
            hits: *seat_a.shots.hits(),
            misses: *seat_a.shots.misses(),
            board: reveal(&seat_a.side).then(|| seat_a.board.clone()),
        };
        let player2 = self.seat_b_ref().map(|seat| SideView {
            id: (&seat.side).into(),
            username: seat.side.username().to_owned(),
            hits: *seat.shots.hits(),
            misses: *seat.shots.misses(),
            board: reveal(&seat.side).then(|| seat.board.clone()),
        });

        SessionView {
            status: self.status(),
            current_turn: self.turn_owner().map(SideRef::from),
            winner: self.winner().map(SideRef::from),
            start_time: epoch_ms(self.started_at()),
            end_time: self.ended_at().map(epoch_ms),
            player1,
            player2,
        }
    }

    /// Listing entry for this session.
    pub fn summary(&self, id: SessionId) -> SessionSummary {
        SessionSummary {
            id,
            status: self.status(),
            start_time: epoch_ms(self.started_at()),
            end_time: self.ended_at().map(epoch_ms),
            winner: self.winner().map(SideRef::from),
            player1: self.side_a().into(),
            player2: self.side_b().map(SeatSummary::from),
        }
    }
}

/// Milliseconds since the Unix epoch; times before it clamp to zero.
pub(crate) fn epoch_ms(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
