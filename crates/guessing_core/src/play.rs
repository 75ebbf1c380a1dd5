//! Interactive read-evaluate-print loop for one game.
//!
//! # Responsibility
//! - Prompt for guesses, feed them to a `GameSession` and print feedback.
//! - Keep all player-facing text in one place.
//!
//! # Invariants
//! - The loop owns every byte written to the output channel.
//! - Feedback for the previous round is printed before each prompt except the
//!   first.
//! - Invalid input ends the loop with an error; session state is unchanged.

use crate::game::{GameError, GameSession, Outcome};
use log::info;
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter your guess: ";

pub type PlayResult<T> = Result<T, PlayError>;

/// Failure that ends an interactive game before the target is found.
#[derive(Debug)]
pub enum PlayError {
    /// Reading a guess or writing feedback failed.
    Io(io::Error),
    /// Input reached end-of-file before a correct guess.
    InputClosed,
    /// The session rejected a guess.
    Game(GameError),
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o failure: {err}"),
            Self::InputClosed => write!(f, "input closed before the number was guessed"),
            Self::Game(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed => None,
            Self::Game(err) => Some(err),
        }
    }
}

impl From<io::Error> for PlayError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<GameError> for PlayError {
    fn from(value: GameError) -> Self {
        Self::Game(value)
    }
}

/// One evaluated guess as the player typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Raw input line without its line terminator.
    pub guess: String,
    pub outcome: Outcome,
}

/// Runs the guessing loop until a correct guess is read.
///
/// Returns the winning round after printing `<guess> was correct!`.
///
/// # Errors
/// - `PlayError::Game` when a line does not parse as an integer.
/// - `PlayError::InputClosed` when input ends first.
/// - `PlayError::Io` when reading or writing fails.
pub fn play<R, W>(session: &mut GameSession, mut input: R, mut output: W) -> PlayResult<Round>
where
    R: BufRead,
    W: Write,
{
    let mut last_round: Option<Round> = None;
    let winner = loop {
        if let Some(round) = &last_round {
            writeln!(
                output,
                "Oops! Your last guess ({}) was {}.",
                round.guess, round.outcome
            )?;
            writeln!(output)?;
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;

        let guess = read_guess_line(&mut input)?;
        let outcome = session.guess(&guess)?;
        writeln!(output, "{outcome}")?;

        let round = Round { guess, outcome };
        if outcome.is_correct() {
            break round;
        }
        last_round = Some(round);
    };

    writeln!(output, "{} was correct!", winner.guess)?;
    output.flush()?;
    info!(
        "event=play_finished module=play status=ok attempts={}",
        session.attempts()
    );
    Ok(winner)
}

/// Starts a fresh game whose target is drawn from `rng`, then plays it.
pub fn run_game<G, R, W>(rng: &mut G, input: R, output: W) -> PlayResult<Round>
where
    G: Rng,
    R: BufRead,
    W: Write,
{
    let mut session = GameSession::random(rng);
    play(&mut session, input, output)
}

fn read_guess_line<R: BufRead>(input: &mut R) -> PlayResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlayError::InputClosed);
    }
    Ok(strip_line_terminator(&line).to_string())
}

fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::{read_guess_line, strip_line_terminator, PlayError};
    use std::io::Cursor;

    #[test]
    fn strip_line_terminator_handles_unix_and_windows_endings() {
        assert_eq!(strip_line_terminator("42\n"), "42");
        assert_eq!(strip_line_terminator("42\r\n"), "42");
        assert_eq!(strip_line_terminator("42"), "42");
        assert_eq!(strip_line_terminator(" 42 \n"), " 42 ");
    }

    #[test]
    fn read_guess_line_reports_end_of_input() {
        let mut input = Cursor::new("7\n");
        assert_eq!(read_guess_line(&mut input).unwrap(), "7");
        let err = read_guess_line(&mut input).unwrap_err();
        assert!(matches!(err, PlayError::InputClosed));
    }

    #[test]
    fn read_guess_line_keeps_blank_lines() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_guess_line(&mut input).unwrap(), "");
    }
}
