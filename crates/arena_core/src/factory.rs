use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CombatRules;
use crate::creature::{Creature, CreatureStats};
use crate::error::StatError;
use crate::rng::SimulationRng;
use crate::stats::roll_stats;

/// Which side a creature fights for. Variants only differ in heal allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Player,
    Monster,
}

impl Variant {
    pub fn heal_allowance(self, rules: &CombatRules) -> u32 {
        match self {
            Variant::Player => rules.player_heals,
            Variant::Monster => rules.monster_heals,
        }
    }

    /// Builds this variant from already chosen stats. Validation errors are
    /// returned as-is.
    pub fn build(
        self,
        stats: CreatureStats,
        rules: &CombatRules,
    ) -> Result<Creature, StatError> {
        Creature::new(stats, self.heal_allowance(rules), rules)
    }

    /// Rolls fresh stats and builds this variant from them.
    pub fn spawn(
        self,
        rules: &CombatRules,
        rng: &mut SimulationRng,
    ) -> Result<Creature, StatError> {
        let stats = roll_stats(rules, rng);
        let creature = self.build(stats, rules)?;
        info!(
            target: "arena_core.factory",
            variant = %self,
            max_health = creature.max_health(),
            heals = creature.heals_remaining(),
            "creature spawned"
        );
        Ok(creature)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Player => f.write_str("Player"),
            Variant::Monster => f.write_str("Monster"),
        }
    }
}
