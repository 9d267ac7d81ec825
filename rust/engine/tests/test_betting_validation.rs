use holdem_engine::errors::GameError;
use holdem_engine::game::{Game, GameConfig};
use holdem_engine::player::{Player, PlayerAction as A};
use holdem_engine::rules::{validate_action, validate_bet, BetContext, ValidatedAction};

const BIG_BLIND: u64 = 20;

#[test]
fn call_value_and_min_raise_for_fresh_stack() {
    let p = Player::new(0, 100);
    assert_eq!(p.call_value(20), 20);
    assert_eq!(p.min_raise(20, BIG_BLIND), 20 + BIG_BLIND);
}

#[test]
fn bet_below_call_is_rejected() {
    let mut p = Player::new(0, 100);
    let err = p.bet(10, 20, BIG_BLIND).unwrap_err();
    assert_eq!(err, GameError::BetBelowCall { amount: 10, call: 20 });
    assert!(err.is_recoverable());
    assert_eq!(p.balance(), 100);
}

#[test]
fn all_in_ignores_min_raise() {
    let mut p = Player::new(0, 100);
    let receipt = p.bet(100, 20, BIG_BLIND).expect("all-in must be accepted");
    assert_eq!(receipt.amount, 100);
    assert!(p.is_all_in());
}

#[test]
fn raise_between_call_and_minimum_is_rejected() {
    let ctx = BetContext {
        balance: 100,
        stage_bet: 0,
        max_stage_bet: 20,
        big_blind: BIG_BLIND,
    };
    assert_eq!(
        validate_bet(&ctx, 39),
        Err(GameError::RaiseBelowMinimum {
            amount: 39,
            minimum: 40
        })
    );
    assert!(validate_bet(&ctx, 40).is_ok());
}

#[test]
fn short_stack_can_only_go_all_in() {
    // balance 30 is below the 40 minimum raise
    let ctx = BetContext {
        balance: 30,
        stage_bet: 0,
        max_stage_bet: 20,
        big_blind: BIG_BLIND,
    };
    assert_eq!(ctx.min_raise(), 30);
    assert!(validate_bet(&ctx, 25).is_err());
    assert_eq!(validate_action(&ctx, A::Raise(30)), Ok(ValidatedAction::AllIn(30)));
}

#[test]
fn rejected_action_leaves_table_unchanged() {
    let mut game = Game::new(GameConfig {
        seed: Some(9),
        ..GameConfig::new(3, 100)
    })
    .unwrap();
    let balances: Vec<u64> = game.players().iter().map(|p| p.balance()).collect();
    let pot = game.round_total_bet();

    assert!(matches!(game.act(A::Raise(10)), Err(GameError::BetBelowCall { .. })));
    assert!(matches!(game.act(A::Raise(30)), Err(GameError::RaiseBelowMinimum { .. })));
    assert!(matches!(game.act(A::Check), Err(GameError::BetBelowCall { .. })));
    assert!(matches!(game.act(A::Raise(500)), Err(GameError::InsufficientBalance { .. })));

    let after: Vec<u64> = game.players().iter().map(|p| p.balance()).collect();
    assert_eq!(balances, after);
    assert_eq!(game.round_total_bet(), pot);
    assert_eq!(game.current_seat(), Some(0));
    assert!(game.actions().iter().all(|a| a.seat != 0));

    assert_eq!(game.act(A::AllIn), Ok(ValidatedAction::AllIn(100)));
    assert_eq!(game.max_stage_bet(), 100);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut game = Game::new(GameConfig {
        seed: Some(9),
        ..GameConfig::new(3, 100)
    })
    .unwrap();
    assert_eq!(
        game.act_as(1, A::Call),
        Err(GameError::NotPlayersTurn {
            expected: 0,
            actual: 1
        })
    );
    assert!(game.act_as(0, A::Call).is_ok());
    assert_eq!(game.current_seat(), Some(1));
}
