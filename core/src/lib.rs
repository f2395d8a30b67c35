#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use clock::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use types::*;

mod clock;
mod difficulty;
mod engine;
mod error;
mod grid;
mod types;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WhackOutcome {
    /// Cell was empty, or the round is not running.
    Miss,
    Hit,
}

impl WhackOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Hit)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CountdownOutcome {
    Idle,
    Decremented(Seconds),
    Expired,
}

impl CountdownOutcome {
    pub const fn has_update(self) -> bool {
        use CountdownOutcome::*;
        match self {
            Idle => false,
            Decremented(_) => true,
            Expired => true,
        }
    }
}

/// Result of moving a [`GameClock`] forward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClockOutcome {
    NoChange,
    Changed,
    RoundOver,
}

impl ClockOutcome {
    pub const fn has_update(self) -> bool {
        use ClockOutcome::*;
        match self {
            NoChange => false,
            Changed => true,
            RoundOver => true,
        }
    }

    pub const fn is_round_over(self) -> bool {
        matches!(self, Self::RoundOver)
    }
}

impl BitOr for ClockOutcome {
    type Output = ClockOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use ClockOutcome::*;
        match (self, rhs) {
            (RoundOver, _) => RoundOver,
            (_, RoundOver) => RoundOver,
            (Changed, _) => Changed,
            (_, Changed) => Changed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

impl From<MarkOutcome> for ClockOutcome {
    fn from(outcome: MarkOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}

impl From<CountdownOutcome> for ClockOutcome {
    fn from(outcome: CountdownOutcome) -> Self {
        use CountdownOutcome::*;
        match outcome {
            Idle => Self::NoChange,
            Decremented(_) => Self::Changed,
            Expired => Self::RoundOver,
        }
    }
}

/// Snapshot of a finished (or abandoned) round.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score: u32,
    pub difficulty: Difficulty,
    pub time_left: Seconds,
}
