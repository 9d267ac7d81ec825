//! Simulation command handler.
//!
//! Plays AI-only rounds back to back. Chip totals are checked after every round
//! and each finished round can be appended to a JSONL history. When a table is
//! down to a single solvent seat a fresh table is seated with the next seed.
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::run;
//! use std::io;
//!
//! // 500 rounds with seed 42, logged to data/sim.jsonl
//! let args = ["holdem", "sim", "--rounds", "500", "--seed", "42", "--output", "data/sim.jsonl"];
//! run(args, &mut io::stdout(), &mut io::stderr());
//! ```

use std::io::Write;

use holdem_ai::AIOpponent;
use holdem_engine::game::{Game, GameConfig};
use holdem_engine::logger::RoundLogger;

use super::ai_by_name;
use crate::config;
use crate::error::CliError;
use crate::ui;

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u32,
    pub seats: Option<usize>,
    /// Base seed; table `t` uses `seed + t`
    pub seed: Option<u64>,
    pub output: Option<String>,
    pub ai: Option<String>,
}

#[derive(Debug, Default)]
struct SimTotals {
    rounds: u32,
    tables: u32,
    uncontested: u32,
    largest_pot: u64,
}

/// Handle the sim command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero rounds or an unknown AI,
/// `CliError::Conservation` if a round creates or destroys chips and
/// `CliError::Io` when the history file cannot be written.
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let cfg = config::load()?;
    let ai_kind = opts.ai.clone().unwrap_or_else(|| cfg.ai.clone());
    let ai = ai_by_name(&ai_kind)?;

    let mut table = cfg.game_config(opts.seats, opts.seed);
    let base_seed = table.seed.unwrap_or_else(rand::random);
    table.seed = Some(base_seed);
    if table.seats < 2 {
        ui::display_warning(err, "a single seat wins every round uncontested")?;
    }

    let mut logger = match &opts.output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    tracing::info!(
        rounds = opts.rounds,
        seats = table.seats,
        seed = base_seed,
        ai = ai.name(),
        "simulation started"
    );

    let mut totals = SimTotals::default();
    let mut game = seat_table(&table, base_seed, &mut totals)?;
    loop {
        play_out_round(&mut game, ai.as_ref())?;
        check_conservation(&game, &table)?;

        let Some(record) = game.round_record() else {
            return Err(CliError::InvalidInput("round did not finish".to_string()));
        };
        totals.rounds += 1;
        totals.largest_pot = totals.largest_pot.max(record.pot);
        if record.players.iter().filter(|p| !p.folded).count() == 1 {
            totals.uncontested += 1;
        }
        if let Some(logger) = logger.as_mut() {
            logger.write(&record)?;
        }

        if totals.rounds >= opts.rounds {
            break;
        }
        if game.is_game_over() {
            let seed = base_seed.wrapping_add(u64::from(totals.tables));
            game = seat_table(&table, seed, &mut totals)?;
        } else {
            game.new_round()?;
        }
    }

    writeln!(out, "Simulated: {} rounds", totals.rounds)?;
    writeln!(out, "Tables: {}", totals.tables)?;
    writeln!(out, "Uncontested: {}", totals.uncontested)?;
    writeln!(out, "Largest pot: {}", totals.largest_pot)?;
    writeln!(out, "Seed: {}", base_seed)?;
    if let Some(path) = &opts.output {
        writeln!(out, "Output: {}", path)?;
    }
    Ok(())
}

fn seat_table(base: &GameConfig, seed: u64, totals: &mut SimTotals) -> Result<Game, CliError> {
    totals.tables += 1;
    let config = GameConfig {
        seed: Some(seed),
        ..base.clone()
    };
    tracing::debug!(table = totals.tables, seed, "table seated");
    Ok(Game::new(config)?)
}

fn play_out_round(game: &mut Game, ai: &dyn AIOpponent) -> Result<(), CliError> {
    while let Some(seat) = game.current_seat() {
        let action = ai.get_action(game, seat);
        game.act(action)?;
    }
    Ok(())
}

fn check_conservation(game: &Game, table: &GameConfig) -> Result<(), CliError> {
    let Some(expected) = table.starting_balance.checked_mul(table.seats as u64) else {
        return Err(CliError::Conservation(format!(
            "{} seats of {} chips overflow the chip counter",
            table.seats, table.starting_balance
        )));
    };
    let actual: u64 = game.players().iter().map(|p| p.balance()).sum();
    if actual != expected {
        tracing::error!(round = game.round(), expected, actual, "chip total changed");
        return Err(CliError::Conservation(format!(
            "round {}: expected {} chips, found {}",
            game.round(),
            expected,
            actual
        )));
    }
    Ok(())
}
