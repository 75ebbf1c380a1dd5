//! Game session state and guess evaluation.
//!
//! # Responsibility
//! - Hold the secret target and solved state of one game.
//! - Turn raw player input into a classified `Outcome`.
//!
//! # Invariants
//! - The secret target always lies in `TARGET_MIN..=TARGET_MAX`.
//! - Solved state belongs to one session and is never shared.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

pub mod outcome;
mod session;

pub use outcome::{classify, Outcome};
pub use session::{GameSession, TARGET_MAX, TARGET_MIN};

pub type GameResult<T> = Result<T, GameError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested secret target lies outside `TARGET_MIN..=TARGET_MAX`.
    TargetOutOfRange {
        target: i64,
    },
    /// Player input did not parse as an integer.
    InvalidInput {
        input: String,
        source: ParseIntError,
    },
}

impl Display for GameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetOutOfRange { target } => write!(
                f,
                "target {target} is outside the allowed range {TARGET_MIN}..={TARGET_MAX}"
            ),
            Self::InvalidInput { input, source } => {
                write!(f, "invalid guess `{input}`: {source}")
            }
        }
    }
}

impl Error for GameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TargetOutOfRange { .. } => None,
            Self::InvalidInput { source, .. } => Some(source),
        }
    }
}
