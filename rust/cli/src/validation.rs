//! Input parsing for interactive commands.

use holdem_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "check" → Check
/// - "call" → Call
/// - "raise X" or "bet X" → wager X chips
/// - "allin" or "all-in" → All-in
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 60"),
///     ParseResult::Action(PlayerAction::Raise(60))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "c" => ParseResult::Action(PlayerAction::Check),
        "call" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" => ParseResult::Action(PlayerAction::AllIn),
        "raise" | "bet" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(format!(
                    "{} requires an amount (e.g., '{} 40')",
                    verb, verb
                ));
            };
            match amount.parse::<u64>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid(format!("Invalid amount '{}'", amount)),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            verb
        )),
    }
}
