use crate::game::outcome::{classify, Outcome};
use crate::game::{GameError, GameResult};
use log::{debug, info, warn};
use rand::Rng;

/// Smallest secret target a session can hold.
pub const TARGET_MIN: i64 = 1;
/// Largest secret target a session can hold.
pub const TARGET_MAX: i64 = 100;

/// One number-guessing game.
///
/// Owns its solved flag, so independent sessions never observe each other's
/// progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    target: i64,
    solved: bool,
    attempts: u32,
}

impl GameSession {
    /// Creates an unsolved session for a caller-provided target.
    ///
    /// # Errors
    /// - Returns `GameError::TargetOutOfRange` when `target` is outside
    ///   `TARGET_MIN..=TARGET_MAX`.
    pub fn new(target: i64) -> GameResult<Self> {
        if !(TARGET_MIN..=TARGET_MAX).contains(&target) {
            return Err(GameError::TargetOutOfRange { target });
        }
        debug!("event=session_created module=game status=ok target={target}");
        Ok(Self {
            target,
            solved: false,
            attempts: 0,
        })
    }

    /// Creates a session with a target drawn uniformly from the injected
    /// random source.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let target = rng.random_range(TARGET_MIN..=TARGET_MAX);
        debug!("event=session_created module=game status=ok target={target}");
        Self {
            target,
            solved: false,
            attempts: 0,
        }
    }

    /// Parses one line of player input and evaluates it.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// - Returns `GameError::InvalidInput` when the trimmed input is not an
    ///   integer. Session state is left untouched.
    pub fn guess(&mut self, input: &str) -> GameResult<Outcome> {
        let value = parse_guess(input).inspect_err(|err| {
            warn!("event=guess_rejected module=game status=error reason={err}");
        })?;
        Ok(self.guess_value(value))
    }

    /// Evaluates an already-parsed guess.
    ///
    /// A correct guess marks the session solved; nothing clears it afterwards.
    pub fn guess_value(&mut self, value: i64) -> Outcome {
        let outcome = classify(self.target, value);
        self.attempts = self.attempts.saturating_add(1);
        if outcome.is_correct() && !self.solved {
            self.solved = true;
            info!(
                "event=game_won module=game status=ok attempts={}",
                self.attempts
            );
        }
        debug!(
            "event=guess_evaluated module=game status=ok attempt={} outcome={outcome}",
            self.attempts
        );
        outcome
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Number of parsed guesses evaluated so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

fn parse_guess(input: &str) -> GameResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|source| GameError::InvalidInput {
            input: trimmed.to_string(),
            source,
        })
}
