//! Baseline AI.
//!
//! A deterministic rule-based seat: it rates its holding on a 0-10 scale, raises
//! the minimum with strong holdings, calls with medium ones and only pays small
//! prices with everything else.

use holdem_engine::cards::{Card, Rank};
use holdem_engine::game::{Game, Stage};
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::player::PlayerAction;

use crate::{AIOpponent, Spot};

const RAISE_STRENGTH: u8 = 7;
const CALL_STRENGTH: u8 = 4;

/// Simple baseline AI used by `play --vs ai` and `sim`.
///
/// # Strategy
///
/// **Preflop:** high pairs and big aces raise, small pairs and good connectors call.
///
/// **Postflop:** the hole cards plus the visible board are evaluated; Two Pairs or
/// better raises, a pair calls.
///
/// Anything weaker checks when free, calls when the price is at most the larger of
/// one big blind and a tenth of the balance, and folds otherwise.
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineAI;
/// use holdem_ai::AIOpponent;
/// use holdem_engine::game::{Game, GameConfig};
///
/// let ai = BaselineAI::new();
/// let game = Game::new(GameConfig { seed: Some(42), ..GameConfig::new(2, 1_000) }).unwrap();
/// let seat = game.current_seat().unwrap();
/// let action = ai.get_action(&game, seat);
/// println!("{} plays {:?}", ai.name(), action);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Rates two hole cards on a 0-10 scale.
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let (high, low) = if hole[0].rank >= hole[1].rank {
            (hole[0].rank, hole[1].rank)
        } else {
            (hole[1].rank, hole[0].rank)
        };
        let suited = hole[0].suit == hole[1].suit;
        let bonus = u8::from(suited);

        if high == low {
            return match high {
                Rank::Ace | Rank::King => 10,
                Rank::Queen | Rank::Jack => 9,
                Rank::Ten => 8,
                Rank::Nine => 7,
                Rank::Eight => 6,
                Rank::Seven => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (Rank::Ace, Rank::King) => 8 + 2 * bonus,
            (Rank::Ace, Rank::Queen) => 7 + bonus,
            (Rank::Ace, Rank::Jack) => 6 + bonus,
            (Rank::Ace, Rank::Ten) => 5 + bonus,
            (Rank::Ace, _) => 4 + bonus,
            (Rank::King, Rank::Queen) => 6 + bonus,
            (Rank::King, Rank::Jack) | (Rank::Queen, Rank::Jack) => 5 + bonus,
            (Rank::King, Rank::Ten) | (Rank::Queen, Rank::Ten) => 4 + bonus,
            _ => {
                let gap = high.value() - low.value();
                if suited && gap <= 2 {
                    if high >= Rank::Nine { 5 } else { 4 }
                } else if high >= Rank::Jack && low >= Rank::Nine {
                    4
                } else {
                    2
                }
            }
        }
    }

    /// Rates the best hand made from the hole cards and the visible board.
    /// `None` before the flop.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let hand = evaluate(&cards).ok()?;

        let strength = match hand.category {
            Category::GreaterCard => 1,
            Category::Pair => 4,
            Category::TwoPairs | Category::Set => 7,
            Category::Straight | Category::Flush => 8,
            Category::FullHouse => 9,
            Category::Quads | Category::StraightFlush | Category::FlushRoyal => 10,
        };
        Some(strength)
    }

    /// Largest price a weak holding still pays.
    fn cheap_call_limit(spot: &Spot) -> u64 {
        spot.big_blind.max(spot.balance / 10)
    }

    fn decide(strength: u8, spot: &Spot) -> PlayerAction {
        if strength >= RAISE_STRENGTH {
            spot.min_raise_or_call()
        } else if strength >= CALL_STRENGTH || spot.call <= Self::cheap_call_limit(spot) {
            spot.check_or_call()
        } else {
            PlayerAction::Fold
        }
    }
}

impl AIOpponent for BaselineAI {
    fn get_action(&self, game: &Game, seat: usize) -> PlayerAction {
        let Some(spot) = Spot::of(game, seat) else {
            return PlayerAction::Fold;
        };
        let Some(hole) = game.player(seat).and_then(|p| p.hole_cards()) else {
            return spot.check_or_call();
        };

        let strength = match game.stage() {
            Stage::Preflop => Self::preflop_strength(hole),
            _ => Self::postflop_strength(hole, game.visible_community())
                .unwrap_or_else(|| Self::preflop_strength(hole)),
        };
        let action = Self::decide(strength, &spot);
        tracing::trace!(seat, strength, ?action, "baseline decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}
