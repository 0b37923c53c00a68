//! Battleship match engine.
//!
//! Pure game logic for a two-player 10×10 grid match: random fleet
//! placement, the turn-taking session state machine, shot resolution with
//! win detection, and a hunt/target AI opponent. Transport, persistence,
//! and UI are the caller's concern; the engine takes commands and returns
//! structured results or errors with no partial state change.

mod ai;
mod board;
mod config;
mod error;
mod generator;
mod logging;
mod resolver;
mod session;
mod shots;
mod store;
mod view;

pub use ai::choose_target;
pub use board::{Board, Coord, Orientation, Segment};
pub use config::{ShipClass, BOARD_SIZE, FLEET, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use error::{EngineError, PlacementError};
pub use generator::{generate, valid_placements};
pub use logging::init_logging;
pub use resolver::{resolve, ShotOutcome, ShotReport};
pub use session::{Actor, FireReport, GameSession, PlayerId, Side, Status};
pub use shots::ShotRecord;
pub use store::{SessionId, SessionStore};
pub use view::{SeatSummary, SessionSummary, SessionView, SideRef, SideView};
