//! Elevator movement for the simulation
//!
//! The elevator sweeps once from the ground floor to the top and then back
//! down. Transitions:
//!
//! | direction | floor          | next direction | next floor |
//! |-----------|----------------|----------------|------------|
//! | Up        | below top - 1  | Up             | floor + 1  |
//! | Up        | top - 1        | Down           | top        |
//! | Down      | above ground   | Down           | floor - 1  |
//! | Down      | ground         | cannot advance |            |
//!
//! The elevator turns around as it reaches the top floor, so the floor never
//! leaves the building.

use anyhow::Result;
use log::debug;

use super::building::Building;
use super::types::{Direction, Floor, GROUND_FLOOR};

/// Result of advancing the elevator one floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Moved one floor and kept the direction
    Moved,
    /// Moved one floor onto the top and now heads down
    Reversed,
}

/// The single elevator of the building
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elevator {
    pub current_floor: Floor,
    pub direction: Direction,
    top_floor: Floor,
}

impl Elevator {
    /// Elevator parked on the ground floor, about to start its upward sweep
    pub fn new(building: &Building) -> Self {
        Self::at(building, GROUND_FLOOR, Direction::Up)
    }

    /// Elevator at an arbitrary floor and direction
    pub fn at(building: &Building, current_floor: Floor, direction: Direction) -> Self {
        Self {
            current_floor,
            direction,
            top_floor: building.top_floor(),
        }
    }

    pub fn top_floor(&self) -> Floor {
        self.top_floor
    }

    /// Whether another `advance` is possible from the current state
    pub fn can_advance(&self) -> bool {
        match self.direction {
            Direction::Up => self.current_floor < self.top_floor,
            Direction::Down => self.current_floor > GROUND_FLOOR,
        }
    }

    /// Move one floor in the current direction
    pub fn advance(&mut self) -> Result<Movement> {
        if !self.can_advance() {
            anyhow::bail!(
                "Elevator cannot move {} from floor {}",
                self.direction,
                self.current_floor
            );
        }

        match self.direction {
            Direction::Up => {
                self.current_floor += 1;
                if self.current_floor == self.top_floor {
                    self.direction = Direction::Down;
                    debug!("Elevator reached top floor {}, reversing", self.top_floor);
                    return Ok(Movement::Reversed);
                }
            }
            Direction::Down => {
                self.current_floor -= 1;
            }
        }

        Ok(Movement::Moved)
    }
}
