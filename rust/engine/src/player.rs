use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::EvaluatedHand;
use crate::rules::{validate_bet, BetContext};
use serde::{Deserialize, Serialize};

/// Represents a player action during a betting round.
/// Every non-fold action resolves to a single wager of some amount.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Wager nothing (only valid if there is nothing to call)
    Check,
    /// Match the table's maximum stage bet
    Call,
    /// Wager the given total amount for this action
    Raise(u64),
    /// Wager the whole balance
    AllIn,
}

/// Message a successful wager sends to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetReceipt {
    pub seat: usize,
    /// Chips moved from the balance into the pot
    pub amount: u64,
    /// The player's stage bet after the wager
    pub stage_bet: u64,
}

/// Per-seat state. A player lives for the whole game; hand and bets reset every round
/// while the balance carries over.
#[derive(Debug, Clone)]
pub struct Player {
    /// Stable seat id assigned at game start
    seat: usize,
    balance: u64,
    hole: Option<[Card; 2]>,
    stage_bet: u64,
    round_bet: u64,
    folded: bool,
    finished_stage_action: bool,
    /// Best hand, filled in at settlement for non-folded players
    showdown: Option<EvaluatedHand>,
    round_reward: u64,
}

impl Player {
    pub fn new(seat: usize, balance: u64) -> Self {
        Self {
            seat,
            balance,
            hole: None,
            stage_bet: 0,
            round_bet: 0,
            folded: false,
            finished_stage_action: false,
            showdown: None,
            round_reward: 0,
        }
    }

    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn balance(&self) -> u64 {
        self.balance
    }
    pub fn hole_cards(&self) -> Option<[Card; 2]> {
        self.hole
    }
    pub fn stage_bet(&self) -> u64 {
        self.stage_bet
    }
    pub fn round_bet(&self) -> u64 {
        self.round_bet
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn finished_stage_action(&self) -> bool {
        self.finished_stage_action
    }
    pub fn showdown(&self) -> Option<&EvaluatedHand> {
        self.showdown.as_ref()
    }
    pub fn round_reward(&self) -> u64 {
        self.round_reward
    }

    pub fn is_all_in(&self) -> bool {
        self.balance == 0
    }

    /// Still able to take a turn this stage.
    pub fn is_actionable(&self) -> bool {
        !self.folded && !self.is_all_in()
    }

    pub fn bet_context(&self, max_stage_bet: u64, big_blind: u64) -> BetContext {
        BetContext {
            balance: self.balance,
            stage_bet: self.stage_bet,
            max_stage_bet,
            big_blind,
        }
    }

    pub fn call_value(&self, max_stage_bet: u64) -> u64 {
        crate::rules::call_value(self.balance, self.stage_bet, max_stage_bet)
    }

    pub fn min_raise(&self, max_stage_bet: u64, big_blind: u64) -> u64 {
        crate::rules::min_raise(self.balance, max_stage_bet, big_blind)
    }

    /// Takes the hole cards for a new round and clears all per-round state.
    pub fn start_round(&mut self, hole: [Card; 2]) {
        self.hole = Some(hole);
        self.stage_bet = 0;
        self.round_bet = 0;
        self.folded = false;
        self.finished_stage_action = false;
        self.showdown = None;
        self.round_reward = 0;
    }

    pub fn start_stage(&mut self) {
        self.stage_bet = 0;
        self.finished_stage_action = false;
    }

    pub fn fold(&mut self) {
        self.folded = true;
        self.finished_stage_action = true;
    }

    /// Wagers `amount` chips after validating it against the table.
    /// On error nothing is modified.
    pub fn bet(
        &mut self,
        amount: u64,
        max_stage_bet: u64,
        big_blind: u64,
    ) -> Result<BetReceipt, GameError> {
        validate_bet(&self.bet_context(max_stage_bet, big_blind), amount)?;
        self.finished_stage_action = true;
        Ok(self.commit(amount))
    }

    /// Forced wager. The amount is capped at the balance, which may leave the player all-in.
    pub fn blind_bet(&mut self, amount: u64) -> BetReceipt {
        let posted = amount.min(self.balance);
        self.commit(posted)
    }

    fn commit(&mut self, amount: u64) -> BetReceipt {
        self.balance -= amount;
        self.stage_bet += amount;
        self.round_bet += amount;
        BetReceipt {
            seat: self.seat,
            amount,
            stage_bet: self.stage_bet,
        }
    }

    pub(crate) fn set_showdown(&mut self, hand: Option<EvaluatedHand>) {
        self.showdown = hand;
    }

    pub(crate) fn collect_reward(&mut self, reward: u64) {
        self.round_reward = reward;
        self.balance = self.balance.saturating_add(reward);
    }
}
