//! Main simulation world that ties everything together
//!
//! Owns the elevator and the passengers for the duration of a run and drives
//! the tick loop: board, alight, render, then advance until everyone arrived.

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::building::Building;
use super::elevator::{Elevator, Movement};
use super::passenger::{generate_passengers, Passenger};
use super::render::render;
use super::stats::SimulationStats;
use super::types::PassengerId;

/// Which frame of a run is being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// State after boarding and alighting on one tick
    Tick,
    /// State once every passenger has arrived
    Final,
}

/// Passengers that changed state during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub boarded: Vec<PassengerId>,
    pub alighted: Vec<PassengerId>,
}

/// The main simulation world
#[derive(Debug, Clone)]
pub struct SimWorld {
    pub building: Building,
    pub elevator: Elevator,
    pub passengers: Vec<Passenger>,

    /// Passengers that reached their destination
    arrived_count: usize,

    /// Ticks simulated so far
    pub tick: u64,

    stats: SimulationStats,
}

impl SimWorld {
    /// Create a world with passengers drawn from the thread-local RNG
    pub fn new(building: Building) -> Result<Self> {
        Self::new_with_rng(building, &mut rand::rng())
    }

    /// Create a world with a seeded RNG for reproducible simulations
    pub fn new_with_seed(building: Building, seed: u64) -> Result<Self> {
        Self::new_with_rng(building, &mut StdRng::seed_from_u64(seed))
    }

    /// Create a world drawing passengers from the given RNG
    pub fn new_with_rng<R: Rng + ?Sized>(building: Building, rng: &mut R) -> Result<Self> {
        let passengers =
            generate_passengers(building.passenger_count, building.floor_count, rng)
                .context("Failed to generate passengers")?;
        Self::with_passengers(building, passengers)
    }

    /// Create a world from an explicit passenger list
    pub fn with_passengers(building: Building, passengers: Vec<Passenger>) -> Result<Self> {
        if passengers.len() != building.passenger_count {
            anyhow::bail!(
                "Building expects {} passengers, got {}",
                building.passenger_count,
                passengers.len()
            );
        }

        for p in &passengers {
            if !building.contains_floor(p.origin_floor)
                || !building.contains_floor(p.destination_floor)
            {
                anyhow::bail!(
                    "Passenger {} travels {} -> {}, outside floors 1..={}",
                    p.id,
                    p.origin_floor,
                    p.destination_floor,
                    building.top_floor()
                );
            }
            if p.origin_floor == p.destination_floor {
                anyhow::bail!(
                    "Passenger {} has the same origin and destination floor {}",
                    p.id,
                    p.origin_floor
                );
            }
            if p.boarded && p.arrived {
                anyhow::bail!("Passenger {} is both riding and arrived", p.id);
            }
        }

        let arrived_count = passengers.iter().filter(|p| p.arrived).count();
        let stats = SimulationStats {
            passenger_count: passengers.len(),
            ..SimulationStats::default()
        };

        Ok(Self {
            elevator: Elevator::new(&building),
            building,
            passengers,
            arrived_count,
            tick: 0,
            stats,
        })
    }

    pub fn arrived_count(&self) -> usize {
        self.arrived_count
    }

    /// Whether every passenger reached their destination
    pub fn is_finished(&self) -> bool {
        self.arrived_count >= self.passengers.len()
    }

    /// Board and then alight passengers at the elevator's current floor
    pub fn step(&mut self) -> TickEvents {
        self.tick += 1;
        let floor = self.elevator.current_floor;
        let mut events = TickEvents::default();

        for p in self.passengers.iter_mut() {
            if p.try_board(floor) {
                debug!("Passenger {} boarded at floor {}", p.id, floor);
                events.boarded.push(p.id);
            }
        }

        for p in self.passengers.iter_mut() {
            if p.try_alight(floor) {
                debug!("Passenger {} arrived at floor {}", p.id, floor);
                events.alighted.push(p.id);
            }
        }

        self.arrived_count += events.alighted.len();
        events
    }

    /// Move the elevator one floor
    pub fn advance(&mut self) -> Result<()> {
        let travelling = self.passengers.len().saturating_sub(self.arrived_count);
        let movement = self.elevator.advance().with_context(|| {
            format!("{} passengers have not reached their floor", travelling)
        })?;

        self.stats.floors_travelled += 1;
        if movement == Movement::Reversed {
            self.stats.reversals += 1;
        }
        Ok(())
    }

    /// Render the current building state
    pub fn render(&self) -> String {
        render(&self.building, &self.elevator, &self.passengers)
    }

    /// Statistics of the run so far
    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            ticks: self.tick,
            passengers_delivered: self.arrived_count,
            final_floor: self.elevator.current_floor,
            ..self.stats.clone()
        }
    }

    /// Run until every passenger has arrived.
    ///
    /// `on_frame` is called once per tick and once more with the final state.
    pub fn run<F>(&mut self, mut on_frame: F) -> Result<SimulationStats>
    where
        F: FnMut(&SimWorld, Frame) -> Result<()>,
    {
        info!(
            "Starting simulation: {} floors, {} passengers",
            self.building.floor_count,
            self.passengers.len()
        );

        loop {
            self.step();
            on_frame(&*self, Frame::Tick)?;
            if self.is_finished() {
                break;
            }
            self.advance()?;
        }

        on_frame(&*self, Frame::Final)?;
        Ok(self.stats())
    }
}
