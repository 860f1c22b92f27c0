//! Headless skirmish runner
//!
//! Loads a level, spawns monsters and lets them hunt a stationary player
//! who only fights back when something is adjacent. Prints a summary.

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use gloomhold::combat::{PlayerTarget, SimplePlayer};
use gloomhold::core::config::MonsterConfig;
use gloomhold::core::error::{GloomError, Result};
use gloomhold::core::types::{GridPos, Tick};
use gloomhold::grid::{compute_visibility, DungeonGrid, GridOracle, Room};
use gloomhold::simulation::{MonsterDirector, WorldView};

/// Ticks the player spends waiting when nothing is in reach
const WAIT_COST: Tick = 100;
/// Player sight radius in cells
const SIGHT_RADIUS: i32 = 10;

/// Headless skirmish runner - monsters versus a stationary player
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Run the monster core against a stationary player and report the outcome")]
struct Args {
    /// ASCII map file
    #[arg(long, default_value = "data/maps/arena.txt")]
    map: String,

    /// Monster tuning TOML (built-in defaults when omitted)
    #[arg(long)]
    config: Option<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Dungeon level, selects which species spawn
    #[arg(long, default_value_t = 1)]
    level: u32,

    /// Maximum player turns before calling it a draw
    #[arg(long, default_value_t = 200)]
    turns: u32,

    /// Starting player health
    #[arg(long, default_value_t = 40)]
    player_health: i32,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every encounter event to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Serialize)]
struct SkirmishResult {
    outcome: String,
    ticks: Tick,
    player_turns: u32,
    monsters_spawned: usize,
    monsters_remaining: usize,
    player_health: i32,
    player_level: u32,
    events: usize,
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gloomhold=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let config = match &args.config {
        Some(path) => MonsterConfig::load(path)?,
        None => MonsterConfig::default(),
    };

    let text = std::fs::read_to_string(&args.map)?;
    let grid = DungeonGrid::from_ascii(&text)?;
    let rooms = grid.find_rooms();
    let start_room = rooms
        .first()
        .copied()
        .ok_or_else(|| GloomError::InvalidMap(format!("{} has no rooms", args.map)))?;
    let start = start_position(&grid, start_room)
        .ok_or_else(|| GloomError::InvalidMap("start room has no floor".into()))?;

    let mut player = SimplePlayer::new(start, seed.wrapping_add(1))
        .with_health(args.player_health)
        .with_armor(2, 0);
    let mut director = MonsterDirector::with_config(config, seed)?;
    let spawned = director.spawn_monsters(&grid, &rooms, args.level, &grid.stairs());

    tracing::info!(
        "Skirmish on {} ({} rooms), player at {}, seed {}",
        args.map,
        rooms.len(),
        start,
        seed
    );

    let mut turns = 0;
    let mut events = 0;
    while turns < args.turns && !director.is_game_over() && !director.roster().is_empty() {
        turns += 1;
        let visibility = compute_visibility(&grid, player.position(), SIGHT_RADIUS);
        let view = WorldView::new(&grid, &visibility);

        let adjacent = director
            .roster()
            .living()
            .find(|a| a.position.chebyshev(&player.position()) == 1)
            .map(|a| a.id);
        let cost = match adjacent {
            Some(id) => director.attack_monster(id, &mut player)?.time_cost,
            None => WAIT_COST,
        };
        director.consume_turn(cost, &view, &mut player);

        for event in director.drain_events() {
            events += 1;
            if args.verbose {
                eprintln!("  [{}] {:?}: {}", event.tick, event.kind, event.description);
            }
        }
    }

    let outcome = if director.is_game_over() {
        "player_died"
    } else if director.roster().is_empty() {
        "cleared"
    } else {
        "timeout"
    };

    let result = SkirmishResult {
        outcome: outcome.to_string(),
        ticks: director.tick(),
        player_turns: turns,
        monsters_spawned: spawned,
        monsters_remaining: director.roster().len(),
        player_health: player.health,
        player_level: player.level,
        events,
        seed,
    };

    match args.format.as_str() {
        "text" => {
            println!("Skirmish Result");
            println!("===============");
            println!("Outcome: {}", result.outcome);
            println!("Ticks: {}", result.ticks);
            println!("Player turns: {}", result.player_turns);
            println!(
                "Monsters: {} spawned, {} remaining",
                result.monsters_spawned, result.monsters_remaining
            );
            println!(
                "Player: {} hp, level {}",
                result.player_health, result.player_level
            );
            println!("Events: {}", result.events);
            println!("Seed: {}", result.seed);
        }
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        other => {
            tracing::warn!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Room center, or the first walkable cell of the room if the center is blocked
fn start_position(grid: &DungeonGrid, room: Room) -> Option<GridPos> {
    let center = room.center();
    if grid.is_walkable(center) {
        return Some(center);
    }
    (room.y..room.y + room.height)
        .flat_map(|y| (room.x..room.x + room.width).map(move |x| GridPos::new(x, y)))
        .find(|&pos| grid.is_walkable(pos))
}
