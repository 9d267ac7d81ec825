use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid card set: {0}")]
    InvalidInput(String),
    #[error("Unrecognized card code: {0:?}")]
    InvalidCard(String),
    #[error("Insufficient balance: bet {amount}, balance {balance}")]
    InsufficientBalance { amount: u64, balance: u64 },
    #[error("Bet too low: {amount}, call value: {call}")]
    BetBelowCall { amount: u64, call: u64 },
    #[error("Minimum raise is {minimum} (got {amount})")]
    RaiseBelowMinimum { amount: u64, minimum: u64 },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    Exhausted { requested: usize, remaining: usize },
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotPlayersTurn { expected: usize, actual: usize },
    #[error("Round already over")]
    RoundOver,
    #[error("Round still in progress")]
    RoundInProgress,
    #[error("Not enough solvent players to start a round")]
    NotEnoughPlayers,
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    /// Validation errors leave the table untouched and may be retried with a new amount.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::InsufficientBalance { .. }
                | GameError::BetBelowCall { .. }
                | GameError::RaiseBelowMinimum { .. }
                | GameError::NotPlayersTurn { .. }
        )
    }
}
