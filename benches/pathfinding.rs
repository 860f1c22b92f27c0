use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gloomhold::core::types::{ActorId, GridPos};
use gloomhold::grid::{DungeonGrid, Tile};
use gloomhold::navigation::{best_step, Occupancy};

/// 80x40 level with a serpentine of walls forcing long detours
fn serpentine() -> DungeonGrid {
    let mut grid = DungeonGrid::open(80, 40);
    for (i, x) in (8..80).step_by(8).enumerate() {
        for y in 0..40 {
            let gap = if i % 2 == 0 { 38 } else { 1 };
            if y != gap {
                grid.set_tile(GridPos::new(x, y), Tile::Wall);
            }
        }
    }
    grid
}

fn bench_best_step(c: &mut Criterion) {
    let open = DungeonGrid::open(80, 40);
    let maze = serpentine();
    let occupancy = Occupancy::new();
    let mover = ActorId(1);

    c.bench_function("best_step_open_floor", |b| {
        b.iter(|| {
            best_step(
                black_box(&open),
                &occupancy,
                mover,
                black_box(GridPos::new(1, 1)),
                black_box(GridPos::new(70, 35)),
                800,
            )
        })
    });

    c.bench_function("best_step_serpentine", |b| {
        b.iter(|| {
            best_step(
                black_box(&maze),
                &occupancy,
                mover,
                black_box(GridPos::new(1, 20)),
                black_box(GridPos::new(78, 20)),
                800,
            )
        })
    });

    c.bench_function("best_step_unreachable", |b| {
        let mut sealed = DungeonGrid::open(80, 40);
        for pos in GridPos::new(60, 20).neighbors() {
            sealed.set_tile(pos, Tile::Wall);
        }
        b.iter(|| {
            best_step(
                black_box(&sealed),
                &occupancy,
                mover,
                black_box(GridPos::new(1, 1)),
                black_box(GridPos::new(60, 20)),
                800,
            )
        })
    });
}

criterion_group!(benches, bench_best_step);
criterion_main!(benches);
