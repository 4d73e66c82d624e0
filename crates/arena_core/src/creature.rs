//! The combatant: validated stats, current health and a limited heal pool.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::CombatRules;
use crate::error::{ActionError, StatError};
use crate::rng::SimulationRng;

/// Raw numbers a creature is built from, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureStats {
    pub attack: u32,
    pub defense: u32,
    pub max_health: u32,
    pub min_damage: u32,
    pub max_damage: u32,
}

impl CreatureStats {
    /// Checks each field against `rules`, reporting the first one out of range.
    pub fn validate(&self, rules: &CombatRules) -> Result<(), StatError> {
        let health_cap = rules.health_cap();
        let damage_cap = rules.damage_cap();
        if !(1..=rules.max_attack).contains(&self.attack) {
            return Err(StatError::Attack {
                value: self.attack,
                max: rules.max_attack,
            });
        }
        if !(1..=rules.max_defense).contains(&self.defense) {
            return Err(StatError::Defense {
                value: self.defense,
                max: rules.max_defense,
            });
        }
        if !(1..=health_cap).contains(&self.max_health) {
            return Err(StatError::MaxHealth {
                value: self.max_health,
                max: health_cap,
            });
        }
        if !(1..=damage_cap).contains(&self.min_damage) {
            return Err(StatError::MinDamage {
                value: self.min_damage,
                max: damage_cap,
            });
        }
        if !(self.min_damage..=damage_cap).contains(&self.max_damage) {
            return Err(StatError::MaxDamage {
                value: self.max_damage,
                min: self.min_damage,
                max: damage_cap,
            });
        }
        Ok(())
    }
}

/// Result of a landed attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    /// Damage rolled by the attacker before the target's defense.
    pub roll: u32,
    /// Health actually removed from the target.
    pub damage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    stats: CreatureStats,
    current_health: u32,
    heals_remaining: u32,
}

impl Creature {
    pub fn new(
        stats: CreatureStats,
        heal_allowance: u32,
        rules: &CombatRules,
    ) -> Result<Self, StatError> {
        stats.validate(rules)?;
        Ok(Self {
            stats,
            current_health: stats.max_health,
            heals_remaining: heal_allowance,
        })
    }

    pub fn stats(&self) -> &CreatureStats {
        &self.stats
    }

    pub fn attack_rating(&self) -> u32 {
        self.stats.attack
    }

    pub fn defense(&self) -> u32 {
        self.stats.defense
    }

    pub fn max_health(&self) -> u32 {
        self.stats.max_health
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn min_damage(&self) -> u32 {
        self.stats.min_damage
    }

    pub fn max_damage(&self) -> u32 {
        self.stats.max_damage
    }

    pub fn heals_remaining(&self) -> u32 {
        self.heals_remaining
    }

    pub fn is_dead(&self) -> bool {
        self.current_health == 0
    }

    /// Rolls damage in this creature's range and applies it to `target`,
    /// less the target's defense. Only `target`'s health changes.
    pub fn attack(
        &self,
        target: &mut Creature,
        rng: &mut SimulationRng,
    ) -> Result<Hit, ActionError> {
        if target.is_dead() {
            return Err(ActionError::TargetDead);
        }
        let roll = rng.gen_range(self.stats.min_damage..=self.stats.max_damage);
        let damage = roll.saturating_sub(target.stats.defense);
        target.current_health = target.current_health.saturating_sub(damage);
        debug!(
            target: "arena_core.creature",
            roll,
            damage,
            current = target.current_health,
            max = target.stats.max_health,
            "attack landed"
        );
        Ok(Hit { roll, damage })
    }

    /// Restores between 1 and half of max health, never past the maximum,
    /// and spends one heal. Returns the amount restored.
    ///
    /// Refusals are checked in order: `HealsExhausted`, then `Dead`, then
    /// `FullHealth`, so a creature with no heals left (a monster, say) reports
    /// exhaustion even at full health.
    pub fn heal(&mut self, rng: &mut SimulationRng) -> Result<u32, ActionError> {
        if self.heals_remaining == 0 {
            return Err(ActionError::HealsExhausted);
        }
        if self.is_dead() {
            return Err(ActionError::Dead);
        }
        if self.current_health == self.stats.max_health {
            return Err(ActionError::FullHealth);
        }

        let deficit = self.stats.max_health - self.current_health;
        let ceiling = (self.stats.max_health / 2).max(1);
        let amount = rng.gen_range(1..=ceiling).min(deficit);
        self.current_health += amount;
        self.heals_remaining -= 1;
        info!(
            target: "arena_core.creature",
            amount,
            current = self.current_health,
            heals_remaining = self.heals_remaining,
            "healed"
        );
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(defense: u32, max_health: u32, min_damage: u32, max_damage: u32) -> CreatureStats {
        CreatureStats {
            attack: 5,
            defense,
            max_health,
            min_damage,
            max_damage,
        }
    }

    fn creature(defense: u32, max_health: u32, damage: (u32, u32), heals: u32) -> Creature {
        Creature::new(
            stats(defense, max_health, damage.0, damage.1),
            heals,
            &CombatRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn every_valid_stat_combination_builds_at_full_health() {
        let rules = CombatRules::default();
        for attack in [1, rules.max_attack] {
            for defense in [1, rules.max_defense] {
                for max_health in [1, 50, rules.max_health] {
                    for min_damage in 1..=rules.max_damage {
                        for max_damage in min_damage..=rules.max_damage {
                            let stats = CreatureStats {
                                attack,
                                defense,
                                max_health,
                                min_damage,
                                max_damage,
                            };
                            let creature = Creature::new(stats, 2, &rules).unwrap();
                            assert_eq!(max_health, creature.current_health());
                            assert_eq!(2, creature.heals_remaining());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn out_of_range_stats_name_the_field() {
        let rules = CombatRules::default();
        let base = stats(3, 40, 4, 8);
        let cases = [
            (
                CreatureStats { attack: 0, ..base },
                StatError::Attack { value: 0, max: rules.max_attack },
            ),
            (
                CreatureStats { attack: rules.max_attack + 1, ..base },
                StatError::Attack { value: rules.max_attack + 1, max: rules.max_attack },
            ),
            (
                CreatureStats { defense: 0, ..base },
                StatError::Defense { value: 0, max: rules.max_defense },
            ),
            (
                CreatureStats { max_health: 101, ..base },
                StatError::MaxHealth { value: 101, max: 100 },
            ),
            (
                CreatureStats { min_damage: 0, ..base },
                StatError::MinDamage { value: 0, max: 20 },
            ),
            (
                CreatureStats { max_damage: 3, ..base },
                StatError::MaxDamage { value: 3, min: 4, max: 20 },
            ),
            (
                CreatureStats { max_damage: 21, ..base },
                StatError::MaxDamage { value: 21, min: 4, max: 20 },
            ),
        ];
        for (stats, expected) in cases {
            assert_eq!(Err(expected), Creature::new(stats, 0, &rules));
        }
    }

    #[test]
    fn raised_rule_caps_do_not_lift_fixed_ceilings() {
        let rules = CombatRules {
            max_health: 5000,
            max_damage: 300,
            ..Default::default()
        };
        let oversized = CreatureStats {
            max_health: 4000,
            min_damage: 250,
            max_damage: 300,
            ..stats(3, 40, 4, 8)
        };
        assert_eq!(
            Err(StatError::MaxHealth { value: 4000, max: 100 }),
            Creature::new(oversized, 0, &rules)
        );
        let hard_hitter = CreatureStats {
            max_damage: 21,
            ..stats(3, 40, 4, 8)
        };
        assert_eq!(
            Err(StatError::MaxDamage { value: 21, min: 4, max: 20 }),
            Creature::new(hard_hitter, 0, &rules)
        );
    }

    #[test]
    fn full_health_monster_reports_exhaustion_first() {
        let mut monster = creature(2, 30, (1, 4), 0);
        assert_eq!(
            Err(ActionError::HealsExhausted),
            monster.heal(&mut SimulationRng::new(1))
        );
        assert_eq!(30, monster.current_health());
    }

    #[test]
    fn fixed_damage_hit_through_zero_defense() {
        let attacker = creature(1, 30, (10, 10), 0);
        // Zero defense is below the generated range, so build the target directly.
        let mut target = Creature {
            stats: stats(0, 50, 10, 10),
            current_health: 50,
            heals_remaining: 0,
        };
        let mut rng = SimulationRng::new(1);
        let hit = attacker.attack(&mut target, &mut rng).unwrap();
        assert_eq!(Hit { roll: 10, damage: 10 }, hit);
        assert_eq!(40, target.current_health());
    }

    #[test]
    fn damage_is_roll_minus_defense_and_clamps_to_zero() {
        let attacker = creature(1, 30, (2, 9), 0);
        let mut rng = SimulationRng::new(42);
        for _ in 0..200 {
            let mut target = creature(4, 100, (1, 1), 0);
            let hit = attacker.attack(&mut target, &mut rng).unwrap();
            assert!((2..=9).contains(&hit.roll));
            assert_eq!(hit.roll.saturating_sub(4), hit.damage);
            assert_eq!(100 - hit.damage, target.current_health());
        }
    }

    #[test]
    fn defense_above_roll_deals_nothing() {
        let attacker = creature(1, 30, (3, 3), 0);
        let mut target = creature(10, 20, (1, 1), 0);
        let hit = attacker.attack(&mut target, &mut SimulationRng::new(3)).unwrap();
        assert_eq!(0, hit.damage);
        assert_eq!(20, target.current_health());
    }

    #[test]
    fn last_hit_point_kills_and_corpse_cannot_be_attacked() {
        let attacker = creature(1, 30, (20, 20), 0);
        let mut target = creature(1, 100, (1, 1), 0);
        target.current_health = 1;
        let mut rng = SimulationRng::new(5);

        attacker.attack(&mut target, &mut rng).unwrap();
        assert_eq!(0, target.current_health());
        assert!(target.is_dead());

        let before = target.clone();
        assert_eq!(Err(ActionError::TargetDead), attacker.attack(&mut target, &mut rng));
        assert_eq!(before, target);
    }

    #[test]
    fn heal_at_full_health_changes_nothing() {
        let mut creature = creature(2, 30, (1, 4), 3);
        let before = creature.clone();
        assert_eq!(
            Err(ActionError::FullHealth),
            creature.heal(&mut SimulationRng::new(9))
        );
        assert_eq!(before, creature);
    }

    #[test]
    fn heal_never_overfills_and_spends_allowance() {
        let mut rng = SimulationRng::new(11);
        for _ in 0..100 {
            let mut creature = creature(2, 60, (1, 4), 3);
            creature.current_health = 55;
            let amount = creature.heal(&mut rng).unwrap();
            assert!((1..=5).contains(&amount));
            assert_eq!(55 + amount, creature.current_health());
            assert!(creature.current_health() <= creature.max_health());
            assert_eq!(2, creature.heals_remaining());
        }
    }

    #[test]
    fn exhausted_pool_fails_whatever_the_health() {
        let mut rng = SimulationRng::new(13);
        let mut creature = creature(2, 80, (1, 4), 2);
        for _ in 0..2 {
            creature.current_health = 1;
            creature.heal(&mut rng).unwrap();
        }
        assert_eq!(0, creature.heals_remaining());

        creature.current_health = 1;
        assert_eq!(Err(ActionError::HealsExhausted), creature.heal(&mut rng));
        assert_eq!(1, creature.current_health());

        creature.current_health = creature.max_health();
        assert_eq!(Err(ActionError::HealsExhausted), creature.heal(&mut rng));
    }

    #[test]
    fn zero_allowance_never_heals() {
        let mut monster = creature(2, 30, (1, 4), 0);
        monster.current_health = 10;
        assert_eq!(
            Err(ActionError::HealsExhausted),
            monster.heal(&mut SimulationRng::new(1))
        );
    }

    #[test]
    fn dead_creature_cannot_heal() {
        let mut creature = creature(2, 30, (1, 4), 1);
        creature.current_health = 0;
        assert_eq!(Err(ActionError::Dead), creature.heal(&mut SimulationRng::new(1)));
        assert_eq!(1, creature.heals_remaining());
    }
}
