//! # Play Command
//!
//! Rounds at a full table. With `--vs human` seat 0 is read from stdin and every
//! other seat is automated; with `--vs ai` all seats are automated and the
//! command just narrates.
//!
//! Stage changes are picked up from the engine's observer and printed as they
//! happen, followed by the showdown of every finished round. The session stops
//! on quit (`q` or EOF), after the requested number of rounds, or when fewer than
//! two seats have chips left.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use holdem_engine::game::{Game, Stage, StateChange};
use holdem_engine::player::PlayerAction;

use super::ai_by_name;
use crate::cli::Vs;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_seat_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};

const HUMAN_SEAT: usize = 0;

type EventLog = Rc<RefCell<Vec<StateChange>>>;

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub vs: Vs,
    pub seats: Option<usize>,
    /// Defaults to one round
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub ai: Option<String>,
}

/// Handle the play command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero rounds or an unknown AI, `CliError::Config`
/// for an invalid table and `CliError::Io` when the streams fail. Illegal actions
/// typed by the human are reported on `err` and re-prompted.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let rounds = opts.rounds.unwrap_or(1);
    if rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let ai_kind = opts
        .ai
        .clone()
        .unwrap_or_else(|| cfg.ai.clone())
        .to_ascii_lowercase();
    let ai = ai_by_name(&ai_kind)?;

    let mut table = cfg.game_config(opts.seats, opts.seed);
    let seed = table.seed.unwrap_or_else(rand::random);
    table.seed = Some(seed);
    let seats = table.seats;

    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    let mut game = Game::with_observer(
        table,
        Box::new(move |change: &StateChange| sink.borrow_mut().push(*change)),
    )?;

    writeln!(
        out,
        "play: vs={} seats={} rounds={} seed={} ai={}",
        opts.vs.as_str(),
        seats,
        rounds,
        seed,
        ai_kind
    )?;
    tracing::info!(
        seed,
        seats,
        rounds,
        vs = opts.vs.as_str(),
        ai = ai.name(),
        "play session started"
    );

    let mut played = 0u32;
    let mut quit_requested = false;

    for round in 1..=rounds {
        if round > 1 {
            if game.is_game_over() {
                writeln!(out, "Game over: fewer than two seats have chips.")?;
                break;
            }
            game.new_round()?;
        }
        print_events(&events, &game, out)?;

        while let Some(seat) = game.current_seat() {
            let human_turn = opts.vs == Vs::Human && seat == HUMAN_SEAT;
            let action = if human_turn {
                match prompt_human(&game, out, err, stdin)? {
                    Some(action) => action,
                    None => {
                        quit_requested = true;
                        break;
                    }
                }
            } else {
                ai.get_action(&game, seat)
            };

            match game.act(action) {
                Ok(validated) => writeln!(out, "Seat {}: {}", seat, format_action(&validated))?,
                Err(e) if human_turn && e.is_recoverable() => {
                    ui::write_error(err, &format!("Invalid action: {}", e))?;
                }
                Err(e) => return Err(e.into()),
            }
            print_events(&events, &game, out)?;
        }

        if quit_requested {
            break;
        }
        print_showdown(&game, out)?;
        played += 1;
    }

    if quit_requested {
        writeln!(out, "Quit requested.")?;
    }
    writeln!(out, "Rounds played: {}", played)?;
    let stacks: Vec<String> = game
        .players()
        .iter()
        .map(|p| format!("seat {}={}", p.seat(), p.balance()))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    Ok(())
}

/// Asks seat 0 for an action until the input parses. `None` on quit or EOF.
fn prompt_human(
    game: &Game,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<PlayerAction>, CliError> {
    let Some(player) = game.current_player() else {
        return Ok(None);
    };
    let hole = player
        .hole_cards()
        .map(|h| format_board(&h))
        .unwrap_or_default();
    loop {
        write!(
            out,
            "Seat {} {} board {} | balance {} pot {} to call {} min raise {} (fold/check/call/raise N/allin/q): ",
            player.seat(),
            hole,
            format_board(game.visible_community()),
            player.balance(),
            game.round_total_bet(),
            game.call_value().unwrap_or(0),
            game.min_raise().unwrap_or(0),
        )?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_player_action(&line) {
            ParseResult::Action(action) => return Ok(Some(action)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

/// Prints and clears the state changes collected since the last call.
fn print_events(events: &EventLog, game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let pending: Vec<StateChange> = events.borrow_mut().drain(..).collect();
    for change in pending {
        match change {
            StateChange::RoundStarted { round } => {
                writeln!(out, "Round {}", round)?;
                writeln!(
                    out,
                    "Dealer: seat {}  SB: seat {}  BB: seat {}  Blinds: {}/{}",
                    game.dealer_seat(),
                    game.small_blind_seat(),
                    game.big_blind_seat(),
                    game.small_blind(),
                    game.big_blind()
                )?;
            }
            StateChange::StageAdvanced { stage: Stage::Showdown } => {}
            StateChange::StageAdvanced { stage } => {
                let board = &game.community()[..stage.visible_cards()];
                writeln!(out, "{}: {}", stage.title(), format_board(board))?;
            }
            StateChange::TurnAdvanced { .. } | StateChange::RoundEnded { .. } => {}
        }
    }
    Ok(())
}

fn print_showdown(game: &Game, out: &mut dyn Write) -> Result<(), CliError> {
    let Some(record) = game.round_record() else {
        return Ok(());
    };
    writeln!(out, "Showdown: {}", format_board(&record.community))?;
    for result in &record.players {
        writeln!(out, "{}", format_seat_result(result))?;
    }
    writeln!(out, "Pot: {}", record.pot)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(vs: Vs, rounds: u32) -> PlayOptions {
        PlayOptions {
            vs,
            seats: Some(3),
            rounds: Some(rounds),
            seed: Some(42),
            ai: None,
        }
    }

    #[test]
    fn ai_mode_plays_every_round() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        handle_play_command(opts(Vs::Ai, 3), &mut out, &mut err, &mut input).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("vs=ai"));
        assert!(output.contains("ai=baseline"), "{output}");
        assert!(output.contains("Round 1"));
        assert!(output.contains("Pot: "));
        assert!(
            output.contains("Rounds played: 3") || output.contains("Game over"),
            "{output}"
        );
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result = handle_play_command(opts(Vs::Ai, 0), &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn human_quit_stops_before_showdown() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"q\n");

        handle_play_command(opts(Vs::Human, 2), &mut out, &mut err, &mut input).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Quit requested."));
        assert!(output.contains("Rounds played: 0"));
        assert!(!output.contains("Showdown"));
    }

    #[test]
    fn illegal_human_action_is_reprompted() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        // seat 0 is first to act facing the 20 big blind
        let mut input = Cursor::new(b"check\nraise 30\nfold\n");

        handle_play_command(opts(Vs::Human, 1), &mut out, &mut err, &mut input).unwrap();
        let errors = String::from_utf8(err).unwrap();
        assert_eq!(errors.matches("Invalid action").count(), 2, "{errors}");
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Seat 0: fold"));
        assert!(output.contains("Rounds played: 1"));
    }

    #[test]
    fn header_names_the_strategy_kind() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let options = PlayOptions {
            ai: Some("Passive".into()),
            ..opts(Vs::Ai, 1)
        };
        handle_play_command(options, &mut out, &mut err, &mut input).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("play: vs=ai seats=3 rounds=1 seed=42 ai=passive\n"), "{output}");
    }

    #[test]
    fn unknown_ai_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let options = PlayOptions {
            ai: Some("shark".into()),
            ..opts(Vs::Ai, 1)
        };
        assert!(matches!(
            handle_play_command(options, &mut out, &mut err, &mut input),
            Err(CliError::InvalidInput(_))
        ));
    }
}
