use holdem_engine::game::Game;
use holdem_engine::player::PlayerAction;

use crate::{AIOpponent, Spot};

/// Never bets on its own and never folds: checks when free, calls otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassiveAI;

impl AIOpponent for PassiveAI {
    fn get_action(&self, game: &Game, seat: usize) -> PlayerAction {
        Spot::of(game, seat).map_or(PlayerAction::Fold, |spot| spot.check_or_call())
    }

    fn name(&self) -> &str {
        "PassiveAI"
    }
}
