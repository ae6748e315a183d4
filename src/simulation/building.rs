//! Building configuration for the elevator simulation
//!
//! Static settings only. The mutable state of a run lives in `SimWorld`.

use anyhow::Result;

use super::types::{Floor, GROUND_FLOOR, MAX_FLOORS, MAX_PASSENGERS, MIN_FLOORS, MIN_PASSENGERS};

/// The building the elevator operates in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Building {
    pub floor_count: Floor,
    pub passenger_count: usize,
}

impl Building {
    /// Create a building, rejecting sizes outside the supported ranges
    pub fn new(floor_count: Floor, passenger_count: usize) -> Result<Self> {
        if !(MIN_FLOORS..=MAX_FLOORS).contains(&floor_count) {
            anyhow::bail!(
                "Floor count {} outside [{}, {}]",
                floor_count,
                MIN_FLOORS,
                MAX_FLOORS
            );
        }
        if !(MIN_PASSENGERS..=MAX_PASSENGERS).contains(&passenger_count) {
            anyhow::bail!(
                "Passenger count {} outside [{}, {}]",
                passenger_count,
                MIN_PASSENGERS,
                MAX_PASSENGERS
            );
        }

        Ok(Self {
            floor_count,
            passenger_count,
        })
    }

    pub fn top_floor(&self) -> Floor {
        self.floor_count
    }

    /// Check whether a floor number exists in this building
    pub fn contains_floor(&self, floor: Floor) -> bool {
        (GROUND_FLOOR..=self.top_floor()).contains(&floor)
    }

    /// Floors from the top down, the order they are rendered in
    pub fn floors_top_down(&self) -> impl Iterator<Item = Floor> {
        (GROUND_FLOOR..=self.top_floor()).rev()
    }
}
