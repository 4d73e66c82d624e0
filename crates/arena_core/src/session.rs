//! One battle between the player and the monster, driven by text commands.
//!
//! [`Session::apply`] is the state transition and never touches I/O.
//! [`Session::run`] wraps it in the read/apply/report console loop.

use std::fmt;
use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::{CombatRules, SessionParams};
use crate::creature::Creature;
use crate::error::{ActionError, StatError};
use crate::factory::Variant;
use crate::report::{BattleReport, CreatureSummary};
use crate::rng::SimulationRng;

pub const HELP_TEXT: &str = "Available commands:
  attack - player and monster exchange blows, monster hits first
  heal - monster hits first, then player heals";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Attack,
    Heal,
    Help,
    Unknown(String),
}

impl Command {
    pub fn parse(token: &str) -> Self {
        match token {
            "attack" => Command::Attack,
            "heal" => Command::Heal,
            "help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Whether the monster gets its strike in for this command.
    pub fn is_exchange(&self) -> bool {
        matches!(self, Command::Attack | Command::Heal)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Attack => f.write_str("attack"),
            Command::Heal => f.write_str("heal"),
            Command::Help => f.write_str("help"),
            Command::Unknown(token) => f.write_str(token),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Ongoing,
    PlayerWon,
    MonsterWon,
}

impl SessionState {
    pub fn is_over(self) -> bool {
        self != SessionState::Ongoing
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Ongoing => f.write_str("BATTLE ONGOING"),
            SessionState::PlayerWon => f.write_str("PLAYER WON"),
            SessionState::MonsterWon => f.write_str("MONSTER WON"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnEvent {
    MonsterHit { roll: u32, damage: u32 },
    PlayerHit { roll: u32, damage: u32 },
    Healed { amount: u32 },
    HealFailed { reason: String },
    Help,
    Unrecognized { token: String },
}

/// What one command did, with both health values once it resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: u32,
    pub command: Command,
    pub events: Vec<TurnEvent>,
    pub player_health: u32,
    pub monster_health: u32,
}

#[derive(Debug)]
pub struct Session {
    player: Creature,
    monster: Creature,
    rng: SimulationRng,
    turns: Vec<TurnRecord>,
}

impl Session {
    pub fn new(player: Creature, monster: Creature, rng: SimulationRng) -> Self {
        Self {
            player,
            monster,
            rng,
            turns: Vec::new(),
        }
    }

    /// Seeds the random source and spawns the player, then the monster.
    pub fn spawn(rules: &CombatRules, params: &SessionParams) -> Result<Self, StatError> {
        let mut rng = SimulationRng::new(params.seed);
        let player = Variant::Player.spawn(rules, &mut rng)?;
        let monster = Variant::Monster.spawn(rules, &mut rng)?;
        Ok(Self::new(player, monster, rng))
    }

    pub fn player(&self) -> &Creature {
        &self.player
    }

    pub fn monster(&self) -> &Creature {
        &self.monster
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// A dead monster wins it for the player even if the player fell the
    /// same turn.
    pub fn state(&self) -> SessionState {
        if self.monster.is_dead() {
            SessionState::PlayerWon
        } else if self.player.is_dead() {
            SessionState::MonsterWon
        } else {
            SessionState::Ongoing
        }
    }

    /// Resolves one command. Once the battle is over nothing moves: the
    /// returned record has no events and is not added to the turn log.
    pub fn apply(&mut self, command: Command) -> TurnRecord {
        if self.state().is_over() {
            debug!(target: "arena_core.session", %command, "battle already decided");
            return TurnRecord {
                turn: self.turns.len() as u32,
                command,
                events: Vec::new(),
                player_health: self.player.current_health(),
                monster_health: self.monster.current_health(),
            };
        }

        let mut events = Vec::new();
        match &command {
            Command::Help => events.push(TurnEvent::Help),
            Command::Unknown(token) => {
                debug!(target: "arena_core.session", %token, "unrecognized command");
                events.push(TurnEvent::Unrecognized {
                    token: token.clone(),
                });
            }
            Command::Attack => {
                self.monster_strikes(&mut events);
                self.player_strikes(&mut events);
            }
            Command::Heal => {
                self.monster_strikes(&mut events);
                if !self.player.is_dead() {
                    match self.player.heal(&mut self.rng) {
                        Ok(amount) => events.push(TurnEvent::Healed { amount }),
                        Err(err) => {
                            debug!(target: "arena_core.session", error = %err, "heal refused");
                            events.push(TurnEvent::HealFailed {
                                reason: err.to_string(),
                            });
                        }
                    }
                }
            }
        }

        let record = TurnRecord {
            turn: self.turns.len() as u32 + 1,
            command,
            events,
            player_health: self.player.current_health(),
            monster_health: self.monster.current_health(),
        };
        self.turns.push(record.clone());
        record
    }

    fn monster_strikes(&mut self, events: &mut Vec<TurnEvent>) {
        match self.monster.attack(&mut self.player, &mut self.rng) {
            Ok(hit) => events.push(TurnEvent::MonsterHit {
                roll: hit.roll,
                damage: hit.damage,
            }),
            Err(err) => warn!(target: "arena_core.session", error = %err, "monster strike refused"),
        }
    }

    // The player swings even if the monster just killed them.
    fn player_strikes(&mut self, events: &mut Vec<TurnEvent>) {
        match self.player.attack(&mut self.monster, &mut self.rng) {
            Ok(hit) => events.push(TurnEvent::PlayerHit {
                roll: hit.roll,
                damage: hit.damage,
            }),
            Err(ActionError::TargetDead) if self.player.is_dead() => {}
            Err(err) => warn!(target: "arena_core.session", error = %err, "player strike refused"),
        }
    }

    /// Reads whitespace separated commands until one side dies or `input`
    /// runs dry. `input` is dropped on every return path.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
    ) -> io::Result<SessionState> {
        let state = self.state();
        if state.is_over() {
            writeln!(out, "{state}")?;
            return Ok(state);
        }

        for line in input.lines() {
            let line = line?;
            for token in line.split_whitespace() {
                let record = self.apply(Command::parse(token));
                render_turn(&record, out)?;
                let state = self.state();
                if state.is_over() {
                    writeln!(out, "{state}")?;
                    out.flush()?;
                    info!(
                        target: "arena_core.session",
                        outcome = ?state,
                        turns = self.turns.len(),
                        "battle finished"
                    );
                    return Ok(state);
                }
            }
            out.flush()?;
        }

        info!(
            target: "arena_core.session",
            turns = self.turns.len(),
            "input closed before the battle ended"
        );
        Ok(self.state())
    }

    pub fn report(&self) -> BattleReport {
        BattleReport::new(
            self.seed(),
            CreatureSummary::from(&self.player),
            CreatureSummary::from(&self.monster),
            self.turns.clone(),
            self.state(),
        )
    }
}

fn render_turn<W: Write>(record: &TurnRecord, out: &mut W) -> io::Result<()> {
    for event in &record.events {
        match event {
            TurnEvent::Help => writeln!(out, "{HELP_TEXT}")?,
            TurnEvent::Unrecognized { token } => {
                writeln!(out, "error: unrecognized command `{token}`")?;
                writeln!(out, "{HELP_TEXT}")?;
            }
            TurnEvent::HealFailed { reason } => writeln!(out, "error: {reason}")?,
            TurnEvent::Healed { amount } => writeln!(out, "Player healed for {amount}")?,
            TurnEvent::MonsterHit { .. } | TurnEvent::PlayerHit { .. } => {}
        }
    }
    if record.command.is_exchange() {
        writeln!(out, "Player health: {}", record.player_health)?;
        writeln!(out, "Monster health: {}", record.monster_health)?;
    }
    Ok(())
}
