//! In-memory session registry keyed by session id.
//!
//! The store is the engine's boundary surface: every verb validates the
//! session id and delegates to the session's state machine. It holds no
//! locks; the caller must provide single-writer semantics per session
//! before invoking a mutating verb.

use crate::error::EngineError;
use crate::session::{Actor, FireReport, GameSession, PlayerId};
use crate::view::{SessionSummary, SessionView};
use log::info;
use rand::Rng;
use std::collections::HashMap;
use uuid::Uuid;

/// Opaque session identifier.
pub type SessionId = Uuid;

/// All live sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, GameSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Open a new session for `creator` and return its id.
    pub fn create<R: Rng + ?Sized>(
        &mut self,
        creator: PlayerId,
        username: &str,
        rng: &mut R,
    ) -> Result<SessionId, EngineError> {
        let session = GameSession::create(creator, username, rng)?;
        let id = Uuid::new_v4();
        self.sessions.insert(id, session);
        info!("session {} created by {}", id, username);
        Ok(id)
    }

    /// Join an open session as a second human.
    pub fn attach<R: Rng + ?Sized>(
        &mut self,
        id: SessionId,
        joiner: PlayerId,
        username: &str,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.session_mut(id)?.attach_human(joiner, username, rng)
    }

    /// Attach the AI to the requester's own open session.
    pub fn challenge_ai<R: Rng + ?Sized>(
        &mut self,
        id: SessionId,
        requester: PlayerId,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        self.session_mut(id)?.attach_ai(requester, rng)
    }

    /// Fire at (row, col) as the given human.
    pub fn fire(
        &mut self,
        id: SessionId,
        actor: PlayerId,
        row: u8,
        col: u8,
    ) -> Result<FireReport, EngineError> {
        self.session_mut(id)?.fire(Actor::Human(actor), row, col)
    }

    /// Run the AI's turn if it owns the turn; `Ok(None)` otherwise.
    pub fn ai_turn<R: Rng + ?Sized>(
        &mut self,
        id: SessionId,
        rng: &mut R,
    ) -> Result<Option<FireReport>, EngineError> {
        self.session_mut(id)?.ai_turn(rng)
    }

    /// Sanitized projection of one session for `viewer`.
    pub fn view(&self, id: SessionId, viewer: Option<PlayerId>) -> Result<SessionView, EngineError> {
        Ok(self.session(id)?.view(viewer))
    }

    /// Summaries of all sessions, newest first.
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut out: Vec<SessionSummary> = self
            .sessions
            .iter()
            .map(|(&id, session)| session.summary(id))
            .collect();
        out.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        out
    }

    pub fn get(&self, id: SessionId) -> Option<&GameSession> {
        self.sessions.get(&id)
    }

    fn session(&self, id: SessionId) -> Result<&GameSession, EngineError> {
        self.sessions.get(&id).ok_or(EngineError::SessionNotFound)
    }

    fn session_mut(&mut self, id: SessionId) -> Result<&mut GameSession, EngineError> {
        self.sessions
            .get_mut(&id)
            .ok_or(EngineError::SessionNotFound)
    }
}
