//! End-to-end encounters: director, behaviors, combat and field of view together

use gloomhold::actor::{Actor, Species, SpeciesState};
use gloomhold::combat::{AttackProfile, PlayerTarget, SimplePlayer};
use gloomhold::core::config::MonsterConfig;
use gloomhold::core::types::{ActorId, GridPos};
use gloomhold::grid::{compute_visibility, DungeonGrid, GridOracle, VisibilityMap};
use gloomhold::simulation::{EncounterEventKind, MonsterDirector, WorldView};

fn arena() -> DungeonGrid {
    let text = std::fs::read_to_string("data/maps/arena.txt").expect("arena map ships with crate");
    DungeonGrid::from_ascii(&text).expect("arena parses")
}

#[test]
fn test_troll_regenerates_on_interval() {
    let grid = DungeonGrid::open(30, 30);
    let dark = VisibilityMap::new(30, 30);
    let view = WorldView::new(&grid, &dark);
    let mut player = SimplePlayer::new(GridPos::new(29, 29), 1);

    let config = MonsterConfig {
        wander_chance: 0.0,
        ..MonsterConfig::default()
    };
    let mut director = MonsterDirector::with_config(config, 1).expect("valid config");
    let mut troll = Actor::new(ActorId(1), Species::Troll, GridPos::new(2, 2));
    troll.health = 10;
    let id = director.add_actor(troll);

    director.consume_turn(500, &view, &mut player);
    assert_eq!(director.actor(id).map(|a| a.health), Some(10));

    // Tick 500 is the first heal
    director.process_time_increment(&view, &mut player);
    let troll = director.actor(id).expect("troll alive");
    assert_eq!(troll.health, 12);
    assert_eq!(
        troll.state,
        SpeciesState::Regenerator {
            last_regen_tick: 500
        }
    );

    director.consume_turn(500, &view, &mut player);
    assert_eq!(director.actor(id).map(|a| a.health), Some(14));
}

#[test]
fn test_goblin_hunts_player_down() {
    let grid = DungeonGrid::open(20, 10);
    let player_at = GridPos::new(15, 5);
    let vis = compute_visibility(&grid, player_at, 10);
    let view = WorldView::new(&grid, &vis);
    let mut player = SimplePlayer::new(player_at, 1)
        .with_health(10_000)
        .with_evasion(0.0);

    let mut director = MonsterDirector::with_seed(2);
    let goblin = director.spawn_actor(Species::Goblin, GridPos::new(6, 5));

    // Nine cells at one step per 75 ticks
    director.consume_turn(1_000, &view, &mut player);

    let pos = director.actor(goblin).map(|a| a.position).expect("goblin alive");
    assert!(pos.distance(&player_at) < 1.5, "goblin stopped at {}", pos);
    assert!(player.health < 10_000);
    assert!(director
        .log()
        .count_where(|k| matches!(k, EncounterEventKind::PlayerHit { .. }))
        > 0);
}

#[test]
fn test_player_death_ends_the_encounter() {
    let grid = DungeonGrid::open(10, 10);
    let vis = VisibilityMap::all_visible(10, 10);
    let view = WorldView::new(&grid, &vis);
    let mut player = SimplePlayer::new(GridPos::new(5, 5), 1)
        .with_health(3)
        .with_evasion(0.0);

    let mut director = MonsterDirector::with_seed(3);
    for pos in [GridPos::new(4, 5), GridPos::new(6, 5), GridPos::new(5, 4)] {
        director.spawn_actor(Species::Orc, pos);
    }

    director.consume_turn(500, &view, &mut player);
    assert!(player.is_dead());
    assert!(director.is_game_over());
    assert!(director.tick() < 500);
    assert_eq!(
        director
            .log()
            .count_where(|k| *k == EncounterEventKind::PlayerDied),
        1
    );
    assert_eq!(
        director.log().messages().last(),
        Some("You die. Game over.")
    );
}

#[test]
fn test_player_clears_a_monster() {
    let mut director = MonsterDirector::with_seed(4);
    let mut player = SimplePlayer::new(GridPos::new(0, 0), 1).with_attack(AttackProfile {
        base_damage: 10,
        bonus: 10,
        strength_bonus: 0,
        accuracy_bonus: 50,
        weapon_speed: 30,
    });
    let goblin = director.spawn_actor(Species::Goblin, GridPos::new(1, 0));

    let mut swings = 0;
    while director.actor(goblin).is_some() && swings < 50 {
        director
            .attack_monster(goblin, &mut player)
            .expect("goblin present while alive");
        swings += 1;
    }
    assert!(director.actor(goblin).is_none());
    assert_eq!(player.experience, Species::Goblin.profile().experience);
    assert!(director.attack_monster(goblin, &mut player).is_err());
}

#[test]
fn test_spawned_arena_keeps_invariants() {
    let grid = arena();
    let rooms = grid.find_rooms();
    let player_at = rooms[0].center();
    let mut player = SimplePlayer::new(player_at, 5)
        .with_health(100_000)
        .with_evasion(0.0);

    let mut director = MonsterDirector::with_seed(5);
    let placed = director.spawn_monsters(&grid, &rooms, 1, &grid.stairs());
    assert!(placed >= 1);

    for _ in 0..30 {
        let vis = compute_visibility(&grid, player.position(), 10);
        let view = WorldView::new(&grid, &vis);
        director.consume_turn(100, &view, &mut player);

        let mut cells = std::collections::HashSet::new();
        for actor in director.roster().living() {
            assert!(grid.is_walkable(actor.position), "{} inside a wall", actor.id);
            assert_ne!(actor.position, player.position(), "{} on the player", actor.id);
            assert!(cells.insert(actor.position), "two actors on {}", actor.position);
        }
    }
}

#[test]
fn test_same_seed_same_encounter() {
    fn run(seed: u64) -> (Vec<GridPos>, i32, usize) {
        let grid = arena();
        let rooms = grid.find_rooms();
        let mut player = SimplePlayer::new(rooms[0].center(), 9).with_health(100_000);
        let mut director = MonsterDirector::with_seed(seed);
        director.spawn_monsters(&grid, &rooms, 2, &grid.stairs());

        for _ in 0..20 {
            let vis = compute_visibility(&grid, player.position(), 10);
            let view = WorldView::new(&grid, &vis);
            director.consume_turn(100, &view, &mut player);
        }
        let positions = director.roster().iter().map(|a| a.position).collect();
        (positions, player.health, director.log().len())
    }

    assert_eq!(run(77), run(77));
}
