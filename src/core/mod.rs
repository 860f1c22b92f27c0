pub mod config;
pub mod error;
pub mod types;

pub use config::MonsterConfig;
pub use error::{GloomError, Result};
pub use types::{ActorId, GridPos, SimRng, Tick};
