//! Fixed fleet configuration shared by every board.

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 5;
/// 5 + 4 + 3 + 3 + 2.
pub const TOTAL_SHIP_CELLS: usize = 17;

/// The five fleet members every side places before play. Cruiser and
/// Submarine share a length but are distinct ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipClass {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }

    /// Wire identifier, matching the serialized form.
    pub const fn id(self) -> &'static str {
        match self {
            ShipClass::Carrier => "carrier",
            ShipClass::Battleship => "battleship",
            ShipClass::Cruiser => "cruiser",
            ShipClass::Submarine => "submarine",
            ShipClass::Destroyer => "destroyer",
        }
    }
}

/// Placement order: largest first so the tightest fits happen on the
/// emptiest board.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Submarine,
    ShipClass::Destroyer,
];
