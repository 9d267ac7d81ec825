//! Hand evaluation command.
//!
//! Classifies 5 to 7 cards given as short codes (`As`, `Td`, `10h`, `2c`) and
//! prints the category, the best five cards and the comparable score.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::format_board;

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = parse_cards(&cards.join(" "))
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let hand = evaluate(&parsed).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    writeln!(out, "Cards: {}", format_board(&parsed))?;
    writeln!(out, "Category: {}", hand.category)?;
    writeln!(out, "Best: {}", format_board(&hand.cards))?;
    writeln!(out, "Score: {}", hand.score)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn eval_prints_category_and_score() {
        let mut out = Vec::new();
        handle_eval_command(&codes("7c 7d 7h 7s 2c 3d 4h"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Category: Quads"), "{output}");
        assert!(output.contains("Score: "));
    }

    #[test]
    fn eval_accepts_comma_separated_codes() {
        let mut out = Vec::new();
        handle_eval_command(&codes("As,Ks,Qs,Js,Ts"), &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
    }

    #[test]
    fn eval_rejects_bad_input() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_eval_command(&codes("As Ks Xx Js Ts"), &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(matches!(
            handle_eval_command(&codes("As Ks"), &mut out),
            Err(CliError::InvalidInput(_))
        ));
        assert!(out.is_empty());
    }
}
