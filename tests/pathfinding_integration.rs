//! Pathfinder behavior on whole levels

use gloomhold::core::types::{ActorId, GridPos, SimRng};
use gloomhold::grid::{DungeonGrid, GridOracle, Tile};
use gloomhold::navigation::{best_step, greedy_step, next_step, Occupancy};
use proptest::prelude::*;
use rand::SeedableRng;

const BUDGET: usize = 800;

#[test]
fn test_open_floor_scenario_steps_closer() {
    let grid = DungeonGrid::open(20, 10);
    let start = GridPos::new(1, 1);
    let goal = GridPos::new(10, 1);

    let step = best_step(&grid, &Occupancy::new(), ActorId(1), start, goal, BUDGET)
        .expect("open floor is always reachable");
    assert_eq!(step.chebyshev(&start), 1);
    assert!(step.manhattan(&goal) < start.manhattan(&goal));
}

#[test]
fn test_shared_cell_scenario_has_no_step() {
    let grid = DungeonGrid::open(20, 10);
    let here = GridPos::new(3, 3);
    let mut rng = SimRng::seed_from_u64(0);

    assert_eq!(best_step(&grid, &Occupancy::new(), ActorId(1), here, here, BUDGET), None);
    assert_eq!(greedy_step(&grid, &Occupancy::new(), ActorId(1), here, here, &mut rng), None);
    assert_eq!(
        next_step(&grid, &Occupancy::new(), ActorId(1), here, here, BUDGET, &mut rng),
        None
    );
}

#[test]
fn test_walled_off_goal_is_unreachable() {
    let mut grid = DungeonGrid::open(20, 10);
    let goal = GridPos::new(15, 5);
    for pos in goal.neighbors() {
        grid.set_tile(pos, Tile::Wall);
    }

    assert_eq!(
        best_step(&grid, &Occupancy::new(), ActorId(1), GridPos::new(1, 1), goal, BUDGET),
        None
    );
}

#[test]
fn test_closed_door_blocks_and_open_door_passes() {
    let map = "\
#######
#..+..#
#######";
    let mut grid = DungeonGrid::from_ascii(map).expect("valid map");
    let start = GridPos::new(1, 1);
    let goal = GridPos::new(5, 1);

    assert_eq!(best_step(&grid, &Occupancy::new(), ActorId(1), start, goal, BUDGET), None);

    grid.set_tile(GridPos::new(3, 1), Tile::DoorOpen);
    assert_eq!(
        best_step(&grid, &Occupancy::new(), ActorId(1), start, goal, BUDGET),
        Some(GridPos::new(2, 1))
    );
}

#[test]
fn test_detours_around_a_monster_in_a_room() {
    let grid = DungeonGrid::open(10, 5);
    let mut occupancy = Occupancy::new();
    occupancy.insert(GridPos::new(2, 2), ActorId(2));

    let step = best_step(
        &grid,
        &occupancy,
        ActorId(1),
        GridPos::new(1, 2),
        GridPos::new(8, 2),
        BUDGET,
    )
    .expect("room is wide enough to go around");
    assert_ne!(step, GridPos::new(2, 2));
    assert_eq!(step.x, 2);
}

#[test]
fn test_corridor_blocked_by_monster_falls_back_to_nothing() {
    let map = "\
########
#......#
########";
    let grid = DungeonGrid::from_ascii(map).expect("valid map");
    let mut occupancy = Occupancy::new();
    occupancy.insert(GridPos::new(2, 1), ActorId(2));
    let mut rng = SimRng::seed_from_u64(4);

    let start = GridPos::new(1, 1);
    let goal = GridPos::new(6, 1);
    assert_eq!(best_step(&grid, &occupancy, ActorId(1), start, goal, BUDGET), None);
    assert_eq!(
        next_step(&grid, &occupancy, ActorId(1), start, goal, BUDGET, &mut rng),
        None
    );
}

#[test]
fn test_shipped_arena_is_navigable() {
    let text = std::fs::read_to_string("data/maps/arena.txt").expect("arena map ships with crate");
    let grid = DungeonGrid::from_ascii(&text).expect("arena parses");
    let mut pos = GridPos::new(2, 2);
    let goal = GridPos::new(36, 11);

    // Walk the whole route one best step at a time
    for _ in 0..200 {
        if pos == goal {
            break;
        }
        let step = best_step(&grid, &Occupancy::new(), ActorId(1), pos, goal, BUDGET)
            .expect("every room in the arena is connected");
        assert!(grid.is_walkable(step));
        assert_eq!(step.chebyshev(&pos), 1);
        pos = step;
    }
    assert_eq!(pos, goal);
}

proptest! {
    #[test]
    fn best_step_on_open_floor_is_adjacent(
        sx in 0..20i32, sy in 0..10i32, tx in 0..20i32, ty in 0..10i32,
    ) {
        let start = GridPos::new(sx, sy);
        let goal = GridPos::new(tx, ty);
        prop_assume!(start != goal);

        let grid = DungeonGrid::open(20, 10);
        let step = best_step(&grid, &Occupancy::new(), ActorId(1), start, goal, BUDGET);
        prop_assert!(step.is_some());
        let step = step.unwrap();
        prop_assert_eq!(step.chebyshev(&start), 1);
        prop_assert!(grid.in_bounds(step));
    }

    #[test]
    fn any_step_is_adjacent_and_walkable(
        walls in prop::collection::vec((0..20i32, 0..10i32), 0..60),
        sx in 0..20i32, sy in 0..10i32, tx in 0..20i32, ty in 0..10i32,
        seed in any::<u64>(),
    ) {
        let start = GridPos::new(sx, sy);
        let goal = GridPos::new(tx, ty);
        let mut grid = DungeonGrid::open(20, 10);
        for (x, y) in walls {
            let pos = GridPos::new(x, y);
            if pos != start && pos != goal {
                grid.set_tile(pos, Tile::Wall);
            }
        }

        let mut rng = SimRng::seed_from_u64(seed);
        let step = next_step(&grid, &Occupancy::new(), ActorId(1), start, goal, BUDGET, &mut rng);
        if start == goal {
            prop_assert_eq!(step, None);
        } else if let Some(step) = step {
            prop_assert_eq!(step.chebyshev(&start), 1);
            prop_assert!(grid.is_walkable(step));
        }
    }
}
