use std::collections::HashSet;

use holdem_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use holdem_engine::deck::Deck;
use holdem_engine::errors::GameError;
use holdem_engine::hand::{compare_hands, evaluate, Category, EvaluatedHand};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn eval(codes: &str) -> EvaluatedHand {
    evaluate(&parse_cards(codes).unwrap()).unwrap()
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Spades, R::Ace),
        c(S::Spades, R::King),
        c(S::Spades, R::Queen),
        c(S::Spades, R::Jack),
        c(S::Spades, R::Ten),
        c(S::Clubs, R::Two),
        c(S::Clubs, R::Three),
    ];
    let hand = evaluate(&cards).unwrap();
    assert_eq!(hand.category, Category::FlushRoyal);
    assert_eq!(hand.cards.to_vec(), cards[..5].to_vec());
}

#[test]
fn every_suit_makes_a_royal_flush() {
    for suit in holdem_engine::cards::all_suits() {
        let cards = [
            c(suit, R::Ten),
            c(suit, R::Jack),
            c(suit, R::Queen),
            c(suit, R::King),
            c(suit, R::Ace),
        ];
        assert_eq!(evaluate(&cards).unwrap().category, Category::FlushRoyal);
    }
}

#[test]
fn royal_flush_inside_a_seven_card_flush() {
    let hand = eval("9h Th Jh Qh Kh Ah 2h");
    assert_eq!(hand.category, Category::FlushRoyal);
    assert!(hand.cards.iter().all(|c| c.rank >= R::Ten));
}

#[test]
fn quads_take_highest_kicker() {
    let hand = eval("7c 7d 7h 7s 2c 3d 4h");
    assert_eq!(hand.category, Category::Quads);
    assert!(hand.cards[..4].iter().all(|c| c.rank == R::Seven));
    assert_eq!(hand.cards[4], c(S::Hearts, R::Four));
}

#[test]
fn straight_flush_below_royal() {
    let hand = eval("5d 6d 7d 8d 9d Kc Ks");
    assert_eq!(hand.category, Category::StraightFlush);
    assert_eq!(hand.cards[0].rank, R::Nine);
}

#[test]
fn steel_wheel_is_straight_flush() {
    let hand = eval("Ac 2c 3c 4c 5c Kd Qh");
    assert_eq!(hand.category, Category::StraightFlush);
    assert_eq!(hand.cards[0].rank, R::Five);
}

#[test]
fn flush_and_straight_without_straight_flush() {
    // straight 5..9 across suits, flush in hearts without a run
    let hand = eval("5h 6c 7h 8d 9h Kh 2h");
    assert_eq!(hand.category, Category::Flush);
    let ranks: Vec<R> = hand.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![R::King, R::Nine, R::Seven, R::Five, R::Two]);
}

#[test]
fn two_pairs_use_the_two_highest_pairs() {
    let hand = eval("2c 2d 9h 9s Kc Kd 5h");
    assert_eq!(hand.category, Category::TwoPairs);
    let ranks: Vec<R> = hand.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![R::King, R::King, R::Nine, R::Nine, R::Five]);
}

#[test]
fn third_pair_can_be_the_kicker() {
    let hand = eval("2c 2d 9h 9s Kc Kd 5h");
    let other = eval("4c 4d 9h 9s Kc Kd 3h");
    assert_eq!(hand.category, Category::TwoPairs);
    // kicker 5 vs kicker 4
    assert!(compare_hands(&hand, &other).is_gt());
}

#[test]
fn set_pair_and_high_card_complete_to_five() {
    let set = eval("Qc Qd Qh 2s 7c 9d Jh");
    assert_eq!(set.category, Category::Set);
    assert_eq!(set.cards[3].rank, R::Jack);
    assert_eq!(set.cards[4].rank, R::Nine);

    let pair = eval("Qc Qd 3h 2s 7c 9d Jh");
    assert_eq!(pair.category, Category::Pair);
    let ranks: Vec<R> = pair.cards.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![R::Queen, R::Queen, R::Jack, R::Nine, R::Seven]);

    let high = eval("Ac 3d 5h 8s Tc Qd 2h");
    assert_eq!(high.category, Category::GreaterCard);
    assert_eq!(high.cards[0].rank, R::Ace);
    assert_eq!(high.cards[4].rank, R::Five);
}

#[test]
fn category_dominates_card_ranks() {
    let straight_flush = eval("2h 3h 4h 5h 6h 8c 9d");
    let quad_aces = eval("Ac Ad Ah As Kc Qd Jh");
    assert!(straight_flush.score > quad_aces.score);

    let low_flush = eval("2d 4d 6d 8d 9d 3c 5s");
    let ace_straight = eval("Ac Kd Qh Js Tc 2d 3s");
    assert!(low_flush.score > ace_straight.score);

    let low_set = eval("2c 2d 2h 4s 6c 8d 9h");
    assert!(ace_straight.score > low_set.score);
}

#[test]
fn kickers_break_ties_within_a_category() {
    let a = eval("Ac Ad Kh 9s 5c 3d 2h");
    let b = eval("As Ah Qh 9d 5s 3c 2d");
    assert_eq!(a.category, Category::Pair);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn identical_strength_in_other_suits_scores_equal() {
    let a = eval("Ac Kd 9h 7s 5c");
    let b = eval("Ad Kh 9s 7c 5d");
    assert_eq!(a.score, b.score);
}

#[test]
fn rejects_malformed_card_sets() {
    let four = parse_cards("Ac Kd 9h 7s").unwrap();
    assert!(matches!(evaluate(&four), Err(GameError::InvalidInput(_))));

    let eight = parse_cards("Ac Kd 9h 7s 5c 4d 3h 2s").unwrap();
    assert!(matches!(evaluate(&eight), Err(GameError::InvalidInput(_))));

    let dup = parse_cards("Ac Ac 9h 7s 5c").unwrap();
    assert!(matches!(evaluate(&dup), Err(GameError::InvalidInput(_))));
}

#[test]
fn best_five_is_a_subset_of_any_seven_cards() {
    for seed in 0..200u64 {
        let mut deck = Deck::new_with_seed(seed);
        let cards = deck.draw(7).unwrap();
        let hand = evaluate(&cards).unwrap();
        assert_eq!(hand.cards.len(), 5);
        let unique: HashSet<Card> = hand.cards.iter().copied().collect();
        assert_eq!(unique.len(), 5, "seed {seed}: repeated card in {:?}", hand.cards);
        assert!(
            hand.cards.iter().all(|c| cards.contains(c)),
            "seed {seed}: {:?} not within {:?}",
            hand.cards,
            cards
        );
        assert_eq!(hand.score / 13u32.pow(5), hand.category.ordinal());
    }
}
