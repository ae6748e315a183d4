//! Elevator Simulation Library
//!
//! A single elevator sweeping a building up and then down, carrying randomly
//! generated passengers. Runs headless in the console.

pub mod console;
pub mod input;
pub mod simulation;
