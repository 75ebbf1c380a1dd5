//! Core logic for the number-guessing game.
//! Holds session state, guess classification and the interactive loop;
//! binaries only wire real stdin/stdout and randomness into it.

pub mod game;
pub mod logging;
pub mod play;

pub use game::{classify, GameError, GameResult, GameSession, Outcome, TARGET_MAX, TARGET_MIN};
pub use logging::{
    default_log_dir, default_log_level, flush_logging, init_logging, logging_status,
};
pub use play::{play, run_game, PlayError, PlayResult, Round};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
