//! Helpers for deterministic regression tests.

use arena_core::{
    CombatRules, Command, Creature, CreatureStats, Session, SessionParams, SessionState,
    SimulationRng, Variant,
};
use serde_json::json;

pub const DEFAULT_SEED: u64 = 42;

/// Stats and outcome of a seeded battle where the player only attacks.
pub fn seeded_brawl(seed: u64, max_turns: usize) -> serde_json::Value {
    let mut session = Session::spawn(&CombatRules::default(), &SessionParams::from_seed(seed))
        .expect("default rules always produce valid stats");
    for _ in 0..max_turns {
        if session.state().is_over() {
            break;
        }
        session.apply(Command::Attack);
    }
    json!({
        "seed": seed,
        "player_health": session.player().current_health(),
        "monster_health": session.monster().current_health(),
        "turns": session.turns().len(),
        "outcome": session.state(),
    })
}

/// A creature with a single fixed damage value, so battles need no luck.
pub fn fixed_fighter(variant: Variant, defense: u32, max_health: u32, damage: u32) -> Creature {
    let stats = CreatureStats {
        attack: 1,
        defense,
        max_health,
        min_damage: damage,
        max_damage: damage,
    };
    variant
        .build(stats, &CombatRules::default())
        .expect("fixture stats are in range")
}

/// Runs `script` through the console loop and returns what it printed.
pub fn transcript(player: Creature, monster: Creature, script: &str) -> (SessionState, String) {
    let mut session = Session::new(player, monster, SimulationRng::new(DEFAULT_SEED));
    let mut out = Vec::new();
    let state = session
        .run(script.as_bytes(), &mut out)
        .expect("writing to memory cannot fail");
    (state, String::from_utf8(out).expect("transcript is utf-8"))
}
