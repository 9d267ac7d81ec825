//! Card, board, and action formatters for terminal display.
//!
//! Cards use Unicode suit symbols (`A♠`), with an ASCII fallback (`As`) on
//! Windows consoles that cannot render them.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::logger::SeatResult;
use holdem_engine::rules::ValidatedAction;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn ascii_suit(suit: Suit) -> char {
    match suit {
        Suit::Clubs => 'c',
        Suit::Diamonds => 'd',
        Suit::Hearts => 'h',
        Suit::Spades => 's',
    }
}

pub fn format_card(card: &Card) -> String {
    if supports_unicode() {
        card.to_string()
    } else {
        format!("{}{}", card.rank.label(), ascii_suit(card.suit))
    }
}

/// Format a list of cards in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a validated action as a human-readable string.
///
/// ```rust
/// use holdem_engine::rules::ValidatedAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&ValidatedAction::Fold), "fold");
/// assert_eq!(format_action(&ValidatedAction::Raise(60)), "raise 60");
/// assert_eq!(format_action(&ValidatedAction::AllIn(250)), "all-in 250");
/// ```
pub fn format_action(action: &ValidatedAction) -> String {
    match action {
        ValidatedAction::Fold => "fold".to_string(),
        ValidatedAction::Check => "check".to_string(),
        ValidatedAction::Call(amount) => format!("call {}", amount),
        ValidatedAction::Raise(amount) => format!("raise {}", amount),
        ValidatedAction::AllIn(amount) => format!("all-in {}", amount),
    }
}

/// One showdown line: hole cards, best hand and the chip result.
pub fn format_seat_result(result: &SeatResult) -> String {
    let hole = result
        .hole
        .map(|h| format_board(&h))
        .unwrap_or_else(|| "[]".to_string());
    let hand = match (result.folded, result.category, result.best) {
        (true, _, _) => "folded".to_string(),
        (false, Some(category), Some(best)) => format!("{} {}", category, format_board(&best)),
        _ => "-".to_string(),
    };
    format!(
        "Seat {}: {} {} reward={} net={:+}",
        result.seat, hole, hand, result.reward, result.net
    )
}
