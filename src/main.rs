use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use elevator_sim::console::ConsolePresenter;
use elevator_sim::input::{prompt_floor_count, prompt_passenger_count};
use elevator_sim::simulation::{
    Building, SimWorld, DEFAULT_TICK_MS, MAX_FLOORS, MAX_PASSENGERS, MIN_FLOORS, MIN_PASSENGERS,
};

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Single elevator sweeping a building up and down")]
struct Cli {
    /// Number of floors; asked interactively when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range((MIN_FLOORS as i64)..=(MAX_FLOORS as i64)))]
    floors: Option<u32>,

    /// Number of passengers; asked interactively when omitted
    #[arg(long, value_parser = clap::value_parser!(u32).range((MIN_PASSENGERS as i64)..=(MAX_PASSENGERS as i64)))]
    passengers: Option<u32>,

    /// Seed for reproducible passenger generation
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between ticks in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Keep previous frames on screen instead of clearing
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,elevator_sim=info"),
    )
    .init();

    let cli = Cli::parse();
    run_headless(&cli)
}

/// Run the simulation in the console
fn run_headless(cli: &Cli) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompt_out = io::stdout();

    let floors = match cli.floors {
        Some(floors) => floors,
        None => prompt_floor_count(&mut input, &mut prompt_out)?,
    };
    let passengers = match cli.passengers {
        Some(passengers) => passengers as usize,
        None => prompt_passenger_count(&mut input, &mut prompt_out)?,
    };

    let building = Building::new(floors, passengers)?;
    let mut world = match cli.seed {
        Some(seed) => SimWorld::new_with_seed(building, seed),
        None => SimWorld::new(building),
    }
    .context("Failed to set up the simulation")?;

    let mut presenter = ConsolePresenter::new(
        io::stdout(),
        !cli.no_clear,
        Duration::from_millis(cli.tick_ms),
    );
    let stats = world.run(|w, frame| presenter.show(w, frame))?;

    stats.log_summary();
    Ok(())
}
