use tracing::debug;

use crate::config::CombatRules;
use crate::creature::CreatureStats;
use crate::rng::SimulationRng;

/// Draws one set of stats, each uniform over its inclusive range.
///
/// `max_damage` is drawn from `min_damage..=max`, so the pair is ordered
/// without a second pass.
pub fn roll_stats(rules: &CombatRules, rng: &mut SimulationRng) -> CreatureStats {
    let attack = rng.gen_range(1..=rules.max_attack);
    let defense = rng.gen_range(1..=rules.max_defense);
    let max_health = rng.gen_range(1..=rules.health_cap());
    let min_damage = rng.gen_range(1..=rules.damage_cap());
    let max_damage = rng.gen_range(min_damage..=rules.damage_cap());
    debug!(
        target: "arena_core.stats",
        attack, defense, max_health, min_damage, max_damage, "rolled stats"
    );
    CreatureStats {
        attack,
        defense,
        max_health,
        min_damage,
        max_damage,
    }
}
