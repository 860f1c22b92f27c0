//! Turn scheduling, the encounter event queue and the monster director

pub mod director;
pub mod events;
pub mod scheduler;

pub use director::{MonsterDirector, WorldView};
pub use events::{EncounterEvent, EncounterEventKind, EncounterLog};
pub use scheduler::{delay_for, eligible_actors, schedule_after, schedule_next, ActionKind};
