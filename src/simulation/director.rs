//! Monster director - drives the roster one logical tick at a time
//!
//! The driving loop owns the grid, field of view and player; the director
//! owns the monsters, the tick counter, the RNG and the event queue. One
//! call to `process_time_increment` is one atomic logical step: nothing in
//! here sleeps or waits on a renderer.

use rand::{Rng, SeedableRng};

use crate::actor::{choose_species, Actor, Roster, Species};
use crate::behavior::{behavior_for, BehaviorContext, PassiveContext};
use crate::combat::{player_attacks_monster, PlayerAttackReport, PlayerTarget};
use crate::core::config::MonsterConfig;
use crate::core::error::{GloomError, Result};
use crate::core::types::{ActorId, GridPos, SimRng, Tick};
use crate::grid::{GridOracle, Room, VisibilityMap};
use crate::navigation::Occupancy;
use crate::simulation::events::{EncounterEvent, EncounterLog};
use crate::simulation::scheduler::{eligible_actors, schedule_after};

/// Read-only level state for one step
#[derive(Clone, Copy)]
pub struct WorldView<'a> {
    pub grid: &'a dyn GridOracle,
    /// Cells the player can currently see; doubles as "can see the player"
    pub visibility: &'a VisibilityMap,
}

impl<'a> WorldView<'a> {
    pub fn new(grid: &'a dyn GridOracle, visibility: &'a VisibilityMap) -> Self {
        Self { grid, visibility }
    }
}

pub struct MonsterDirector {
    roster: Roster,
    tick: Tick,
    rng: SimRng,
    config: MonsterConfig,
    log: EncounterLog,
    game_over: bool,
    next_id: u32,
}

impl MonsterDirector {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(MonsterConfig::default(), seed)
    }

    /// Director with custom tuning; rejects configs that fail `validate`
    pub fn with_config(config: MonsterConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: MonsterConfig, seed: u64) -> Self {
        Self {
            roster: Roster::new(),
            tick: 0,
            rng: SimRng::seed_from_u64(seed),
            config,
            log: EncounterLog::new(),
            game_over: false,
            next_id: 1,
        }
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn config(&self) -> &MonsterConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.roster.get(id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.roster.get_mut(id)
    }

    pub fn log(&self) -> &EncounterLog {
        &self.log
    }

    /// Hand queued events to the presentation layer
    pub fn drain_events(&mut self) -> Vec<EncounterEvent> {
        self.log.drain()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn allocate_id(&mut self) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a pre-built actor; later allocated ids never collide with it
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        self.roster.push(actor);
        id
    }

    /// Add a species-default actor at `pos`
    pub fn spawn_actor(&mut self, species: Species, pos: GridPos) -> ActorId {
        let id = self.allocate_id();
        self.roster.push(Actor::new(id, species, pos));
        id
    }

    /// Terrain allows standing at `pos` and no live actor is there
    pub fn is_walkable_for_actor(&self, grid: &dyn GridOracle, pos: GridPos) -> bool {
        grid.is_walkable(pos) && self.roster.occupant_at(pos).is_none()
    }

    /// Advance the world by one tick
    ///
    /// Returns true if any actor was eligible to act.
    pub fn process_time_increment(
        &mut self,
        view: &WorldView<'_>,
        player: &mut dyn PlayerTarget,
    ) -> bool {
        if self.game_over {
            return false;
        }

        self.run_passives(view);

        let eligible = eligible_actors(&self.roster, self.tick);
        let acted = !eligible.is_empty();
        for id in eligible {
            if self.game_over {
                break;
            }
            self.take_turn(id, view, player);
        }

        let removed = self.roster.flush_removals();
        if !removed.is_empty() {
            tracing::debug!("tick {}: removed {} actors", self.tick, removed.len());
        }

        self.tick += 1;
        acted
    }

    /// Let `cost` ticks pass, e.g. while the player swings or walks
    ///
    /// Stops early once the player dies. Returns true if any actor acted.
    pub fn consume_turn(
        &mut self,
        cost: Tick,
        view: &WorldView<'_>,
        player: &mut dyn PlayerTarget,
    ) -> bool {
        let mut acted = false;
        for _ in 0..cost {
            if self.game_over {
                break;
            }
            acted |= self.process_time_increment(view, &mut *player);
        }
        acted
    }

    fn run_passives(&mut self, view: &WorldView<'_>) {
        let mut ctx = PassiveContext {
            tick: self.tick,
            visibility: view.visibility,
            log: &mut self.log,
            config: &self.config,
        };
        for actor in self.roster.iter_mut().filter(|a| a.is_alive()) {
            behavior_for(actor.species).passive(actor, &mut ctx);
        }
    }

    fn take_turn(&mut self, id: ActorId, view: &WorldView<'_>, player: &mut dyn PlayerTarget) {
        let occupancy = Occupancy::from_roster(&self.roster);
        let tick = self.tick;

        let Some(actor) = self.roster.get_mut(id) else {
            return;
        };
        debug_assert!(actor.is_alive(), "dead actor {} reached its turn", id);
        if !actor.is_alive() {
            return;
        }

        let behavior = behavior_for(actor.species);
        let kind = {
            let mut ctx = BehaviorContext {
                tick,
                grid: view.grid,
                visibility: view.visibility,
                occupancy: &occupancy,
                player: &mut *player,
                rng: &mut self.rng,
                log: &mut self.log,
                config: &self.config,
            };
            behavior.act(actor, &mut ctx)
        };
        schedule_after(actor, tick, kind);
        tracing::trace!(
            "{} {} {:?}, next at {}",
            actor.name(),
            id,
            kind,
            actor.next_action_time
        );

        if player.is_dead() {
            self.game_over = true;
            tracing::info!("Player killed at tick {}", tick);
        }
    }

    /// Resolve a player-initiated attack on the actor with `id`
    ///
    /// A killed actor leaves the roster immediately; this is never called
    /// while a tick is being resolved.
    pub fn attack_monster(
        &mut self,
        id: ActorId,
        player: &mut dyn PlayerTarget,
    ) -> Result<PlayerAttackReport> {
        let actor = self
            .roster
            .get_mut(id)
            .filter(|a| a.is_alive())
            .ok_or(GloomError::ActorNotFound(id))?;

        let report = player_attacks_monster(actor, player, &mut self.rng, &mut self.log, self.tick);
        if report.killed {
            self.roster.mark_for_removal(id);
            self.roster.flush_removals();
            tracing::debug!("{} slain by the player", id);
        }
        Ok(report)
    }

    /// Populate a fresh level
    ///
    /// `rooms[0]` is the player's start room and is never used. Returns the
    /// number of monsters placed, which may fall short of the target when
    /// free cells are scarce.
    pub fn spawn_monsters(
        &mut self,
        grid: &dyn GridOracle,
        rooms: &[Room],
        level: u32,
        reserved: &[GridPos],
    ) -> usize {
        if rooms.len() < 2 {
            tracing::warn!("No rooms besides the start room; nothing spawned");
            return 0;
        }

        let target = ((rooms.len() as f32 * self.config.spawn_density).floor() as usize).max(1);
        let mut placed = 0;
        let mut attempts = 0;

        while placed < target && attempts < self.config.spawn_attempts {
            attempts += 1;

            let room = rooms[self.rng.gen_range(1..rooms.len())];
            if room.width <= 0 || room.height <= 0 {
                continue;
            }
            let pos = GridPos::new(
                room.x + self.rng.gen_range(0..room.width),
                room.y + self.rng.gen_range(0..room.height),
            );
            if reserved.contains(&pos) || !self.is_walkable_for_actor(grid, pos) {
                continue;
            }

            let species = choose_species(level, &mut self.rng);
            let id = self.allocate_id();
            let actor = Actor::rolled(id, species, pos, &mut self.rng);
            tracing::debug!("Spawned {} {} at {}", actor.name(), id, pos);
            self.roster.push(actor);
            placed += 1;
        }

        tracing::info!(
            "Spawned {}/{} monsters on level {} in {} attempts",
            placed,
            target,
            level,
            attempts
        );
        placed
    }
}

impl Default for MonsterDirector {
    fn default() -> Self {
        Self::new()
    }
}
