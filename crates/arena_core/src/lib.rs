//! Turn-based creature combat: stat rolls, attacks, limited heals and the
//! console battle loop.

pub mod config;
pub mod creature;
pub mod error;
pub mod factory;
pub mod report;
pub mod rng;
pub mod session;
pub mod stats;

pub use config::{CombatRules, SessionParams};
pub use creature::{Creature, CreatureStats, Hit};
pub use error::{ActionError, StatError};
pub use factory::Variant;
pub use report::{BattleReport, CreatureSummary};
pub use rng::SimulationRng;
pub use session::{Command, Session, SessionState, TurnEvent, TurnRecord, HELP_TEXT};
