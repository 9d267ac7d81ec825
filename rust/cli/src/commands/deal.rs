//! Deal command handler for single round dealing and display.
//!
//! Seats a fresh table, posts the blinds and prints every seat's hole cards
//! plus the complete five-card board. The same seed always deals the same cards.

use std::io::Write;

use holdem_engine::game::Game;

use crate::config;
use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_deal_command(
    seats: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let mut table = cfg.game_config(seats, seed);
    let seed = table.seed.unwrap_or_else(rand::random);
    table.seed = Some(seed);
    let game = Game::new(table)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Dealer: seat {}  SB: seat {}  BB: seat {}",
        game.dealer_seat(),
        game.small_blind_seat(),
        game.big_blind_seat()
    )?;
    for p in game.players() {
        let hole = p.hole_cards().map(|h| format_board(&h)).unwrap_or_default();
        writeln!(out, "Seat {}: {}", p.seat(), hole)?;
    }
    writeln!(out, "Board: {}", format_board(game.community()))?;
    Ok(())
}
