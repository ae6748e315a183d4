//! Elevator sweep validation tests
//!
//! Drives whole runs through the library API and checks the sweep order,
//! boarding rules and end state.

use elevator_sim::simulation::{
    Building, Direction, Floor, Frame, Passenger, PassengerId, SimWorld, MAX_FLOORS,
    MAX_PASSENGERS, MIN_FLOORS,
};

/// Floor, direction and passenger flags as seen by one tick frame
#[derive(Debug, Clone)]
struct Snapshot {
    floor: Floor,
    direction: Direction,
    boarded: Vec<bool>,
    arrived: Vec<bool>,
}

fn world_with_trips(floors: Floor, trips: &[(Floor, Floor)]) -> SimWorld {
    let building = Building::new(floors, trips.len()).unwrap();
    let passengers = trips
        .iter()
        .enumerate()
        .map(|(i, (from, to))| Passenger::new(PassengerId(i + 1), *from, *to))
        .collect();
    SimWorld::with_passengers(building, passengers).unwrap()
}

fn record_run(world: &mut SimWorld) -> Vec<Snapshot> {
    let mut snapshots = Vec::new();
    world
        .run(|w, frame| {
            if frame == Frame::Tick {
                snapshots.push(Snapshot {
                    floor: w.elevator.current_floor,
                    direction: w.elevator.direction,
                    boarded: w.passengers.iter().map(|p| p.boarded).collect(),
                    arrived: w.passengers.iter().map(|p| p.arrived).collect(),
                });
            }
            Ok(())
        })
        .unwrap();
    snapshots
}

#[test]
fn test_single_passenger_up_to_the_top() {
    let mut world = world_with_trips(3, &[(1, 3)]);
    assert_eq!(world.elevator.current_floor, 1);
    assert_eq!(world.elevator.direction, Direction::Up);

    let snapshots = record_run(&mut world);

    // Boards on the very first tick
    assert_eq!(snapshots[0].floor, 1);
    assert!(snapshots[0].boarded[0]);

    // Rides through floor 2 and leaves at floor 3
    assert!(snapshots[1].boarded[0] && !snapshots[1].arrived[0]);
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[2].floor, 3);
    assert!(snapshots[2].arrived[0] && !snapshots[2].boarded[0]);

    assert!(world.is_finished());
    assert_eq!(world.elevator.current_floor, 3);
}

#[test]
fn test_downward_passenger_boards_after_reversal() {
    let mut world = world_with_trips(3, &[(1, 2), (3, 1)]);
    let snapshots = record_run(&mut world);

    let floors: Vec<Floor> = snapshots.iter().map(|s| s.floor).collect();
    assert_eq!(floors, vec![1, 2, 3, 2, 1]);

    // Upward sweep reaches the top before any downward movement
    let top_index = floors.iter().position(|f| *f == 3).unwrap();
    assert!(floors[..top_index].windows(2).all(|w| w[1] == w[0] + 1));

    // The 3 -> 1 passenger waits until the elevator stands on 3 heading down
    let first_boarded = snapshots.iter().position(|s| s.boarded[1]).unwrap();
    assert_eq!(snapshots[first_boarded].floor, 3);
    assert_eq!(snapshots[first_boarded].direction, Direction::Down);

    let last = snapshots.last().unwrap();
    assert!(last.arrived.iter().all(|a| *a));
    assert_eq!(world.elevator.current_floor, 1);
}

#[test]
fn test_stops_where_last_passenger_leaves() {
    // Last arrival on the way down at floor 3 of 5
    let mut world = world_with_trips(5, &[(1, 2), (4, 3)]);
    let stats = world.run(|_, _| Ok(())).unwrap();

    assert_eq!(stats.final_floor, 3);
    assert_eq!(world.elevator.current_floor, 3);
    assert_eq!(stats.floors_travelled, 6);
    assert_eq!(stats.ticks, 7);
    assert_eq!(stats.reversals, 1);
}

#[test]
fn test_random_runs_deliver_everyone() {
    for seed in 0..200u64 {
        let floors = MIN_FLOORS + (seed % u64::from(MAX_FLOORS - MIN_FLOORS + 1)) as Floor;
        let passengers = 1 + (seed as usize % MAX_PASSENGERS);
        let building = Building::new(floors, passengers).unwrap();
        let mut world = SimWorld::new_with_seed(building, seed).unwrap();

        for p in &world.passengers {
            assert!((1..=floors).contains(&p.origin_floor));
            assert!((1..=floors).contains(&p.destination_floor));
            assert_ne!(p.origin_floor, p.destination_floor);
        }

        let mut lowest = Floor::MAX;
        let mut highest = 0;
        let stats = world
            .run(|w, _| {
                let floor = w.elevator.current_floor;
                lowest = lowest.min(floor);
                highest = highest.max(floor);
                for p in &w.passengers {
                    assert!(!(p.boarded && p.arrived), "passenger {} in two states", p.id);
                }
                Ok(())
            })
            .unwrap();

        assert!(lowest >= 1, "seed {} went below the ground floor", seed);
        assert!(highest <= floors, "seed {} went above the top floor", seed);
        assert!(stats.all_delivered());
        for p in &world.passengers {
            assert!(p.arrived && !p.boarded, "seed {}: passenger {} stranded", seed, p.id);
        }
    }
}

#[test]
fn test_seeded_worlds_are_reproducible() {
    let building = Building::new(8, 6).unwrap();
    let mut a = SimWorld::new_with_seed(building, 99).unwrap();
    let mut b = SimWorld::new_with_seed(building, 99).unwrap();
    assert_eq!(a.passengers, b.passengers);

    let stats_a = a.run(|_, _| Ok(())).unwrap();
    let stats_b = b.run(|_, _| Ok(())).unwrap();
    assert_eq!(stats_a, stats_b);
    assert_eq!(a.render(), b.render());
}

#[test]
fn test_final_render_lists_arrivals() {
    let mut world = world_with_trips(4, &[(2, 4), (3, 1)]);
    world.run(|_, _| Ok(())).unwrap();

    let table = world.render();
    let row = |floor: &str| -> Vec<String> {
        table
            .lines()
            .find(|l| l.split('|').next().map(str::trim) == Some(floor))
            .unwrap()
            .split('|')
            .map(|c| c.trim().to_string())
            .collect()
    };

    assert_eq!(row("4"), vec!["4", "", "1", ""]);
    assert_eq!(row("1"), vec!["1", "", "2", "X"]);
    assert_eq!(world.render(), table);
}
