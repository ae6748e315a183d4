//! Standalone elevator simulation module
//!
//! This module contains the elevator sweep, the passengers it carries and the
//! text rendering of the building. It has no terminal dependencies and can be
//! driven from tests directly.

mod building;
mod elevator;
mod passenger;
mod render;
mod stats;
mod types;
mod world;

// Re-export public types for external use
pub use building::Building;
pub use elevator::{Elevator, Movement};
pub use passenger::{generate_passengers, Passenger};
pub use render::{arrived_at, render, waiting_at, TABLE_WIDTH};
pub use stats::SimulationStats;
pub use types::{
    Direction, Floor, PassengerId, DEFAULT_TICK_MS, GROUND_FLOOR, MAX_FLOORS, MAX_PASSENGERS,
    MIN_FLOORS, MIN_PASSENGERS,
};
pub use world::{Frame, SimWorld, TickEvents};
