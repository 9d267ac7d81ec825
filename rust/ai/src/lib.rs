//! # holdem-ai: Automated Seats
//!
//! Strategies that pick an action for a seat from the public table state plus
//! that seat's own hole cards. Every strategy only returns actions the engine
//! accepts for the seat whose turn it is.
//!
//! ## Core Components
//!
//! - [`AIOpponent`] - Trait defining the interface for AI decision-making
//! - [`baseline`] - Hand-strength driven strategy
//! - [`passive`] - Checks when free, calls otherwise
//! - [`create_ai`] - Factory function for creating AI opponents
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::game::{Game, GameConfig};
//!
//! let ai = create_ai("baseline").expect("known strategy");
//! let mut game = Game::new(GameConfig { seed: Some(42), ..GameConfig::new(3, 1_000) }).unwrap();
//!
//! while let Some(seat) = game.current_seat() {
//!     let action = ai.get_action(&game, seat);
//!     game.act(action).unwrap();
//! }
//! assert!(game.is_round_over());
//! ```

use holdem_engine::game::Game;
use holdem_engine::player::PlayerAction;

pub mod baseline;
pub mod passive;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: [&str; 2] = ["baseline", "passive"];

/// Trait defining the interface for AI opponents.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::AIOpponent;
/// use holdem_engine::game::Game;
/// use holdem_engine::player::PlayerAction;
///
/// struct Folder;
///
/// impl AIOpponent for Folder {
///     fn get_action(&self, _game: &Game, _seat: usize) -> PlayerAction {
///         PlayerAction::Fold
///     }
///
///     fn name(&self) -> &str {
///         "Folder"
///     }
/// }
/// ```
pub trait AIOpponent: Send + Sync {
    /// Chooses the next action for `seat`.
    ///
    /// Called for the seat whose turn it is. For any other seat, or once the round is
    /// over, implementations return [`PlayerAction::Fold`].
    fn get_action(&self, game: &Game, seat: usize) -> PlayerAction;

    fn name(&self) -> &str;
}

/// Creates an AI opponent by kind, `None` for an unknown kind.
///
/// ```rust
/// use holdem_ai::create_ai;
///
/// assert_eq!(create_ai("baseline").unwrap().name(), "BaselineAI");
/// assert_eq!(create_ai("passive").unwrap().name(), "PassiveAI");
/// assert!(create_ai("shark").is_none());
/// ```
pub fn create_ai(kind: &str) -> Option<Box<dyn AIOpponent>> {
    match kind.to_ascii_lowercase().as_str() {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "passive" => Some(Box::new(passive::PassiveAI)),
        _ => None,
    }
}

/// Everything a strategy needs to know about the seat to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Spot {
    pub call: u64,
    pub min_raise: u64,
    pub balance: u64,
    pub big_blind: u64,
}

impl Spot {
    /// `None` when `seat` is not the one to act.
    pub(crate) fn of(game: &Game, seat: usize) -> Option<Self> {
        let player = game.current_player().filter(|p| p.seat() == seat)?;
        Some(Self {
            call: player.call_value(game.max_stage_bet()),
            min_raise: player.min_raise(game.max_stage_bet(), game.big_blind()),
            balance: player.balance(),
            big_blind: game.big_blind(),
        })
    }

    pub(crate) fn check_or_call(&self) -> PlayerAction {
        if self.call == 0 {
            PlayerAction::Check
        } else {
            PlayerAction::Call
        }
    }

    /// Minimum raise when the stack allows a real one, otherwise a call.
    pub(crate) fn min_raise_or_call(&self) -> PlayerAction {
        if self.min_raise > self.call && self.min_raise < self.balance {
            PlayerAction::Raise(self.min_raise)
        } else {
            self.check_or_call()
        }
    }
}
