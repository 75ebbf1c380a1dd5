//! Terminal entry point for the guessing game.
//!
//! # Responsibility
//! - Wire thread-local randomness, stdin and stdout into `guessing_core`.
//! - Turn loop failures into a stderr line and a non-zero exit status.

use log::{error, info};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is optional; the game must still run without a writable temp dir.
    let log_dir = guessing_core::default_log_dir();
    if let Err(err) = guessing_core::init_logging(
        guessing_core::default_log_level(),
        &log_dir.to_string_lossy(),
    ) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        guessing_core::core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let status = match guessing_core::run_game(&mut rand::rng(), stdin.lock(), stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=play_failed module=cli status=error reason={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    };
    guessing_core::flush_logging();
    status
}
