use thiserror::Error;

/// A generated stat fell outside the range the rules allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("attack {value} outside 1..={max}")]
    Attack { value: u32, max: u32 },
    #[error("defense {value} outside 1..={max}")]
    Defense { value: u32, max: u32 },
    #[error("max health {value} outside 1..={max}")]
    MaxHealth { value: u32, max: u32 },
    #[error("min damage {value} outside 1..={max}")]
    MinDamage { value: u32, max: u32 },
    #[error("max damage {value} outside {min}..={max}")]
    MaxDamage { value: u32, min: u32, max: u32 },
}

/// Why an attack or heal was refused. A refused action changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("cannot attack a dead creature")]
    TargetDead,
    #[error("already at full health")]
    FullHealth,
    #[error("all heals are used up")]
    HealsExhausted,
    #[error("dead creatures cannot heal")]
    Dead,
}
