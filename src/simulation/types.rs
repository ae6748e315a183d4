//! Core types for the elevator simulation

use std::fmt;

/// A floor number. Floors are 1-based; the ground floor is `GROUND_FLOOR`.
pub type Floor = u32;

/// The lowest floor of every building
pub const GROUND_FLOOR: Floor = 1;

/// Smallest building the simulation accepts
pub const MIN_FLOORS: Floor = 3;
/// Largest building the simulation accepts
pub const MAX_FLOORS: Floor = 12;

/// Fewest passengers per run
pub const MIN_PASSENGERS: usize = 1;
/// Most passengers per run
pub const MAX_PASSENGERS: usize = 12;

/// Default delay between rendered ticks, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1000;

/// A wrapper type for passenger IDs
///
/// Displayed as the passenger's sequence number, so the first passenger is "1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassengerId(pub usize);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction the elevator is travelling in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Upward sweep from the ground floor to the top
    Up,
    /// Downward sweep from the top back to the ground floor
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}
