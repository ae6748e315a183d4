//! Passengers and their random generation

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Floor, PassengerId, GROUND_FLOOR};

/// A passenger travelling from one floor to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub id: PassengerId,
    pub origin_floor: Floor,
    pub destination_floor: Floor,
    /// Inside the elevator
    pub boarded: bool,
    /// Left the elevator at the destination floor
    pub arrived: bool,
}

impl Passenger {
    pub fn new(id: PassengerId, origin_floor: Floor, destination_floor: Floor) -> Self {
        Self {
            id,
            origin_floor,
            destination_floor,
            boarded: false,
            arrived: false,
        }
    }

    /// Still standing at the origin floor
    pub fn is_waiting(&self) -> bool {
        !self.boarded && !self.arrived
    }

    /// Board the elevator if it stands at this passenger's origin floor.
    /// Returns true when the passenger got on during this call.
    pub fn try_board(&mut self, elevator_floor: Floor) -> bool {
        if self.is_waiting() && self.origin_floor == elevator_floor {
            self.boarded = true;
            true
        } else {
            false
        }
    }

    /// Leave the elevator if it stands at this passenger's destination.
    /// Returns true when the passenger got off during this call.
    pub fn try_alight(&mut self, elevator_floor: Floor) -> bool {
        if self.boarded && self.destination_floor == elevator_floor {
            self.boarded = false;
            self.arrived = true;
            true
        } else {
            false
        }
    }
}

/// Generate `count` passengers for a building with `floor_count` floors.
///
/// For every passenger the floors are shuffled; the first floor becomes the
/// origin and the last one the destination, so the two always differ.
pub fn generate_passengers<R: Rng + ?Sized>(
    count: usize,
    floor_count: Floor,
    rng: &mut R,
) -> Result<Vec<Passenger>> {
    if floor_count < 2 {
        anyhow::bail!(
            "Need at least two floors to pick distinct origin and destination, got {}",
            floor_count
        );
    }

    let mut floors: Vec<Floor> = (GROUND_FLOOR..GROUND_FLOOR + floor_count).collect();
    let passengers = (0..count)
        .map(|idx| {
            floors.shuffle(rng);
            let origin = floors[0];
            let destination = floors[floors.len() - 1];
            Passenger::new(PassengerId(idx + 1), origin, destination)
        })
        .collect();

    Ok(passengers)
}
