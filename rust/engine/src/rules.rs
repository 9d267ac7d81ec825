use crate::errors::GameError;
use crate::player::PlayerAction as A;

/// The table values a single wager is validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    pub balance: u64,
    pub stage_bet: u64,
    pub max_stage_bet: u64,
    pub big_blind: u64,
}

impl BetContext {
    pub fn call_value(&self) -> u64 {
        call_value(self.balance, self.stage_bet, self.max_stage_bet)
    }

    pub fn min_raise(&self) -> u64 {
        min_raise(self.balance, self.max_stage_bet, self.big_blind)
    }
}

/// Chips needed to match the table's maximum stage bet, capped at the balance.
pub fn call_value(balance: u64, stage_bet: u64, max_stage_bet: u64) -> u64 {
    balance.min(max_stage_bet.saturating_sub(stage_bet))
}

/// Smallest wager above the call value that counts as a raise, capped at the balance.
pub fn min_raise(balance: u64, max_stage_bet: u64, big_blind: u64) -> u64 {
    balance.min(max_stage_bet.saturating_add(big_blind))
}

/// Checks a wager of `amount` chips against the balance, call value and minimum raise.
///
/// Staking the whole balance is always accepted once the call value is covered.
///
/// # Errors
///
/// - [`GameError::InsufficientBalance`] - `amount` exceeds the balance
/// - [`GameError::BetBelowCall`] - `amount` does not cover the call value
/// - [`GameError::RaiseBelowMinimum`] - a raise smaller than the minimum raise
///
/// # Examples
///
/// ```
/// use holdem_engine::errors::GameError;
/// use holdem_engine::rules::{validate_bet, BetContext};
///
/// let ctx = BetContext { balance: 100, stage_bet: 0, max_stage_bet: 20, big_blind: 20 };
/// assert!(matches!(validate_bet(&ctx, 10), Err(GameError::BetBelowCall { .. })));
/// assert!(validate_bet(&ctx, 20).is_ok());
/// assert!(matches!(validate_bet(&ctx, 30), Err(GameError::RaiseBelowMinimum { .. })));
/// assert!(validate_bet(&ctx, 100).is_ok());
/// ```
pub fn validate_bet(ctx: &BetContext, amount: u64) -> Result<(), GameError> {
    let call = ctx.call_value();
    let minimum = ctx.min_raise();
    if amount > ctx.balance {
        return Err(GameError::InsufficientBalance {
            amount,
            balance: ctx.balance,
        });
    }
    if amount < call {
        return Err(GameError::BetBelowCall { amount, call });
    }
    if amount > call && amount < minimum && amount != ctx.balance {
        return Err(GameError::RaiseBelowMinimum { amount, minimum });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    Call(u64),
    Raise(u64),
    AllIn(u64),
}

impl ValidatedAction {
    /// Chips this action puts into the pot.
    pub fn amount(&self) -> u64 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(a) | ValidatedAction::Raise(a) | ValidatedAction::AllIn(a) => *a,
        }
    }
}

/// Maps a host action onto a single validated wager.
///
/// `Check` wagers nothing, `Call` wagers the call value, `Raise(n)` wagers `n` chips
/// in total for this action and `AllIn` wagers the whole balance.
pub fn validate_action(ctx: &BetContext, action: A) -> Result<ValidatedAction, GameError> {
    let amount = match action {
        A::Fold => return Ok(ValidatedAction::Fold),
        A::Check => 0,
        A::Call => ctx.call_value(),
        A::Raise(amount) => amount,
        A::AllIn => ctx.balance,
    };
    validate_bet(ctx, amount)?;
    Ok(classify(ctx, amount))
}

fn classify(ctx: &BetContext, amount: u64) -> ValidatedAction {
    if amount == 0 {
        ValidatedAction::Check
    } else if amount == ctx.balance {
        ValidatedAction::AllIn(amount)
    } else if amount <= ctx.call_value() {
        ValidatedAction::Call(amount)
    } else {
        ValidatedAction::Raise(amount)
    }
}
