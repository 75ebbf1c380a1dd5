//! Guess classification.
//!
//! # Responsibility
//! - Classify one guess against the secret target without side effects.
//!
//! # Invariants
//! - `classify` is total: every `(target, guess)` pair maps to exactly one
//!   outcome.
//! - `Display` and `as_str` yield the same words (`low|high|correct`).

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Classification of a guess relative to the secret target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess is smaller than the target.
    Low,
    /// Guess is larger than the target.
    High,
    /// Guess equals the target.
    Correct,
}

impl Outcome {
    /// Stable lowercase word printed to the player.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
            Self::Correct => "correct",
        }
    }

    pub fn is_correct(self) -> bool {
        self == Self::Correct
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compares `guess` to `target`.
pub fn classify(target: i64, guess: i64) -> Outcome {
    match guess.cmp(&target) {
        Ordering::Less => Outcome::Low,
        Ordering::Greater => Outcome::High,
        Ordering::Equal => Outcome::Correct,
    }
}

#[cfg(test)]
mod tests {
    use super::{classify, Outcome};

    #[test]
    fn classify_covers_all_orderings() {
        assert_eq!(classify(50, 20), Outcome::Low);
        assert_eq!(classify(50, 80), Outcome::High);
        assert_eq!(classify(50, 50), Outcome::Correct);
    }

    #[test]
    fn classify_handles_values_outside_target_range() {
        assert_eq!(classify(1, i64::MIN), Outcome::Low);
        assert_eq!(classify(100, i64::MAX), Outcome::High);
        assert_eq!(classify(1, 0), Outcome::Low);
        assert_eq!(classify(100, 101), Outcome::High);
    }

    #[test]
    fn display_matches_player_facing_words() {
        assert_eq!(Outcome::Low.to_string(), "low");
        assert_eq!(Outcome::High.to_string(), "high");
        assert_eq!(Outcome::Correct.to_string(), "correct");
        assert!(Outcome::Correct.is_correct());
        assert!(!Outcome::Low.is_correct());
    }
}
