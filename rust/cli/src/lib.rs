//! # holdem CLI Library
//!
//! Command-line host for the Texas Hold'em engine: deal and inspect rounds,
//! evaluate hands, play at the table against AI seats and run simulations.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single round for inspection
//! - `eval`: Evaluate 5 to 7 cards
//! - `play`: Play rounds from stdin against AI seats, or watch AI-only rounds
//! - `sim`: Run AI-only rounds and write a JSONL round history
//! - `cfg`: Display current configuration settings

use std::io::{BufRead, Write};

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command, handle_sim_command,
};

pub use cli::Vs;
pub use error::CliError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 2;

/// Main entry point for the CLI application.
///
/// Interactive input for `play --vs human` is read from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["holdem", "deal", "--seed", "42"];
/// let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Like [`run`], reading interactive input from `input`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("fold\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let args = ["holdem", "play", "--seats", "3", "--rounds", "1", "--seed", "7"];
/// let code = holdem_cli::run_with_input(args, &mut input, &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Rounds played: 1"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Deal { seats, seed } => handle_deal_command(seats, seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Play {
            vs,
            seats,
            rounds,
            seed,
            ai,
        } => handle_play_command(
            PlayOptions {
                vs,
                seats,
                rounds,
                seed,
                ai,
            },
            out,
            err,
            input,
        ),
        Commands::Sim {
            rounds,
            seats,
            seed,
            output,
            ai,
        } => handle_sim_command(
            SimOptions {
                rounds,
                seats,
                seed,
                output,
                ai,
            },
            out,
            err,
        ),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            EXIT_ERROR
        }
    }
}

fn report_parse_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => EXIT_SUCCESS,
            Err(_) => EXIT_ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "Usage: holdem <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in Commands::NAMES {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: holdem --help");
    EXIT_ERROR
}
