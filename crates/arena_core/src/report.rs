use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::creature::Creature;
use crate::session::{SessionState, TurnRecord};

/// Snapshot of a finished (or abandoned) battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleReport {
    pub seed: u64,
    pub timestamp: String,
    pub player: CreatureSummary,
    pub monster: CreatureSummary,
    pub turns: Vec<TurnRecord>,
    pub outcome: SessionState,
}

impl BattleReport {
    pub fn new(
        seed: u64,
        player: CreatureSummary,
        monster: CreatureSummary,
        turns: Vec<TurnRecord>,
        outcome: SessionState,
    ) -> Self {
        Self {
            seed,
            timestamp: Utc::now().to_rfc3339(),
            player,
            monster,
            turns,
            outcome,
        }
    }
}

/// Stats as shown to the user once a creature has been created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
    pub min_damage: u32,
    pub max_damage: u32,
    pub heals: u32,
}

impl From<&Creature> for CreatureSummary {
    fn from(creature: &Creature) -> Self {
        Self {
            attack: creature.attack_rating(),
            defense: creature.defense(),
            max_health: creature.max_health(),
            min_damage: creature.min_damage(),
            max_damage: creature.max_damage(),
            heals: creature.heals_remaining(),
        }
    }
}

impl fmt::Display for CreatureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Attack: {}", self.attack)?;
        writeln!(f, "  Defense: {}", self.defense)?;
        writeln!(f, "  Max health: {}", self.max_health)?;
        write!(f, "  Damage: {}-{}", self.min_damage, self.max_damage)
    }
}
