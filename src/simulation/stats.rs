//! Run statistics for the elevator simulation

use log::info;

use super::types::Floor;

/// Counters collected over a single run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Ticks simulated, one per floor visited
    pub ticks: u64,
    /// Floors the elevator moved
    pub floors_travelled: u64,
    /// Times the elevator turned around
    pub reversals: u32,
    pub passengers_delivered: usize,
    pub passenger_count: usize,
    /// Floor the elevator stopped at
    pub final_floor: Floor,
}

impl SimulationStats {
    pub fn all_delivered(&self) -> bool {
        self.passengers_delivered == self.passenger_count
    }

    /// Log the end-of-run summary
    pub fn log_summary(&self) {
        info!("=== SIMULATION COMPLETE ===");
        info!("Ticks: {}", self.ticks);
        info!("Floors travelled: {}", self.floors_travelled);
        info!("Reversals: {}", self.reversals);
        info!(
            "Passengers delivered: {}/{}",
            self.passengers_delivered, self.passenger_count
        );
        info!("Final floor: {}", self.final_floor);
    }
}
