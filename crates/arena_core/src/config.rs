use std::fs;
use std::path::Path;

use anyhow::{self, Context, Result};
use serde::{Deserialize, Serialize};

use crate::rng::fresh_seed;

pub const MAX_ATTACK: u32 = 20;
pub const MAX_DEFENSE: u32 = 10;
pub const MAX_HEALTH: u32 = 100;
pub const MAX_DAMAGE: u32 = 20;
pub const PLAYER_HEALS: u32 = 3;
pub const MONSTER_HEALS: u32 = 0;

const SEED_ENV: &str = "ARENA_SEED";

/// Upper bounds for generated stats plus the heal allowance of each variant.
///
/// Every bound is inclusive and every stat starts at 1. Health and damage
/// caps may be lowered but never raised past [`MAX_HEALTH`] and
/// [`MAX_DAMAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    pub max_attack: u32,
    pub max_defense: u32,
    pub max_health: u32,
    pub max_damage: u32,
    pub player_heals: u32,
    pub monster_heals: u32,
}

impl CombatRules {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read rules from {}", path.display()))?;
        let rules: CombatRules = toml::from_str(&data)
            .with_context(|| format!("failed to parse rules in {}", path.display()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        for (label, cap) in [
            ("max_attack", self.max_attack),
            ("max_defense", self.max_defense),
            ("max_health", self.max_health),
            ("max_damage", self.max_damage),
        ] {
            if cap == 0 {
                anyhow::bail!("rule {label} must be at least 1");
            }
        }
        for (label, cap, ceiling) in [
            ("max_health", self.max_health, MAX_HEALTH),
            ("max_damage", self.max_damage, MAX_DAMAGE),
        ] {
            if cap > ceiling {
                anyhow::bail!("rule {label} = {cap} exceeds the fixed ceiling {ceiling}");
            }
        }
        Ok(())
    }

    pub fn health_cap(&self) -> u32 {
        self.max_health.min(MAX_HEALTH)
    }

    pub fn damage_cap(&self) -> u32 {
        self.max_damage.min(MAX_DAMAGE)
    }
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            max_attack: MAX_ATTACK,
            max_defense: MAX_DEFENSE,
            max_health: MAX_HEALTH,
            max_damage: MAX_DAMAGE,
            player_heals: PLAYER_HEALS,
            monster_heals: MONSTER_HEALS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionParams {
    pub seed: u64,
}

impl SessionParams {
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV)
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or_else(fresh_seed);
        Self { seed }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}
