//! Text rendering of the building state
//!
//! Pure projection of the simulation state; nothing here mutates.

use super::building::Building;
use super::elevator::Elevator;
use super::passenger::Passenger;
use super::types::Floor;

/// Width of the table and its horizontal rules
pub const TABLE_WIDTH: usize = 55;

const ELEVATOR_MARKER: &str = "X";

fn table_row(floor: &str, boarding: &str, alighting: &str, elevator: &str) -> String {
    format!("{:^8}|{:^16}|{:^16}|{:^12}", floor, boarding, alighting, elevator)
}

fn join_ids<'a>(passengers: impl Iterator<Item = &'a Passenger>) -> String {
    passengers
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Passengers still waiting at `floor`
pub fn waiting_at(passengers: &[Passenger], floor: Floor) -> impl Iterator<Item = &Passenger> {
    passengers
        .iter()
        .filter(move |p| p.is_waiting() && p.origin_floor == floor)
}

/// Passengers that have arrived at `floor`
pub fn arrived_at(passengers: &[Passenger], floor: Floor) -> impl Iterator<Item = &Passenger> {
    passengers
        .iter()
        .filter(move |p| p.arrived && p.destination_floor == floor)
}

/// Render the building as a table, top floor first
pub fn render(building: &Building, elevator: &Elevator, passengers: &[Passenger]) -> String {
    let rule = "-".repeat(TABLE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        table_row("PISO", "SUBEN", "BAJAN", "ELEVADOR"),
        rule.clone(),
    ];

    for floor in building.floors_top_down() {
        let boarding = join_ids(waiting_at(passengers, floor));
        let alighting = join_ids(arrived_at(passengers, floor));
        let marker = if elevator.current_floor == floor {
            ELEVATOR_MARKER
        } else {
            ""
        };
        lines.push(table_row(&floor.to_string(), &boarding, &alighting, marker));
        lines.push(rule.clone());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
