use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank};
use crate::errors::GameError;

/// Hand categories from weakest to strongest. The discriminant is the category weight used in scoring.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    GreaterCard = 0,
    Pair = 1,
    TwoPairs = 2,
    Set = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
    FlushRoyal = 9,
}

impl Category {
    pub fn ordinal(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::GreaterCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPairs => "Two Pairs",
            Category::Set => "Set",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::Quads => "Quads",
            Category::StraightFlush => "Straight Flush",
            Category::FlushRoyal => "Royal Flush",
        };
        f.write_str(name)
    }
}

const SCORE_BASE: u32 = 13;

/// The best five-card combination found in a card set.
///
/// `cards` holds the core cards of the category first, then kickers, each group
/// in descending rank order. `score` is `category * 13^5 + Σ rank_i * 13^(4-i)`
/// over those cards, so a higher category always outranks a lower one and equal
/// categories compare kicker by kicker.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub category: Category,
    pub cards: [Card; 5],
    pub score: u32,
}

impl EvaluatedHand {
    /// Builds a hand from exactly five cards already in scoring order.
    pub fn new(category: Category, cards: &[Card]) -> Result<Self, GameError> {
        let cards: [Card; 5] = cards.try_into().map_err(|_| {
            GameError::InvalidInput(format!(
                "a combination needs exactly 5 cards, got {}",
                cards.len()
            ))
        })?;
        let score = cards
            .iter()
            .fold(category.ordinal(), |acc, c| acc * SCORE_BASE + u32::from(c.rank.value()));
        Ok(Self {
            category,
            cards,
            score,
        })
    }
}

pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.score.cmp(&b.score)
}

/// Finds the best five-card hand in 5 to 7 distinct cards.
///
/// # Errors
///
/// [`GameError::InvalidInput`] when fewer than 5 or more than 7 cards are given,
/// or when a card appears twice.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("As Ks Qs Js Ts 2c 3c").unwrap();
/// let hand = evaluate(&cards).unwrap();
/// assert_eq!(hand.category, Category::FlushRoyal);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidInput(format!(
            "expected 5 to 7 cards, got {}",
            cards.len()
        )));
    }
    let mut seen = HashSet::with_capacity(cards.len());
    if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
        return Err(GameError::InvalidInput(format!("duplicate card {}", dup)));
    }

    // stable: equal ranks keep their input order
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.rank.cmp(&a.rank));

    let flush = find_flush(&sorted);
    let straight = find_straight(&sorted);
    let groups = RankGroups::new(&sorted);

    if let Some(flush) = &flush {
        let royal: Vec<Card> = flush
            .iter()
            .copied()
            .filter(|c| c.rank >= Rank::Ten)
            .collect();
        if royal.len() == 5 {
            return EvaluatedHand::new(Category::FlushRoyal, &royal);
        }
        if let Some(run) = find_straight(flush) {
            return EvaluatedHand::new(Category::StraightFlush, &run);
        }
    }

    if let Some(quad) = groups.quad {
        return EvaluatedHand::new(Category::Quads, &take_up_to_5(quad, &sorted));
    }

    if let Some(trips) = groups.trips.first() {
        // a second set can stand in for the pair
        let pair_source = groups
            .trips
            .get(1)
            .map(|t| &t[..2])
            .into_iter()
            .chain(groups.pairs.first().map(|p| p.as_slice()))
            .max_by_key(|g| g[0].rank);
        if let Some(pair) = pair_source {
            let mut core = trips.clone();
            core.extend_from_slice(pair);
            return EvaluatedHand::new(Category::FullHouse, &core);
        }
    }

    if let Some(flush) = &flush {
        return EvaluatedHand::new(Category::Flush, &flush[..5]);
    }

    if let Some(run) = straight {
        return EvaluatedHand::new(Category::Straight, &run);
    }

    if let Some(trips) = groups.trips.first() {
        return EvaluatedHand::new(Category::Set, &take_up_to_5(trips.clone(), &sorted));
    }

    if groups.pairs.len() >= 2 {
        let mut core = groups.pairs[0].clone();
        core.extend_from_slice(&groups.pairs[1]);
        return EvaluatedHand::new(Category::TwoPairs, &take_up_to_5(core, &sorted));
    }

    if let Some(pair) = groups.pairs.first() {
        return EvaluatedHand::new(Category::Pair, &take_up_to_5(pair.clone(), &sorted));
    }

    EvaluatedHand::new(Category::GreaterCard, &take_up_to_5(Vec::new(), &sorted))
}

/// Cards of the first suit holding five or more members, rank-descending.
fn find_flush(sorted: &[Card]) -> Option<Vec<Card>> {
    all_suits().into_iter().find_map(|suit| {
        let bucket: Vec<Card> = sorted.iter().copied().filter(|c| c.suit == suit).collect();
        (bucket.len() >= 5).then_some(bucket)
    })
}

/// Highest run of five consecutive ranks. The ace also counts as value -1 for A-2-3-4-5.
fn find_straight(sorted: &[Card]) -> Option<[Card; 5]> {
    let mut by_value: Vec<(i8, Card)> = Vec::with_capacity(8);
    for &c in sorted {
        let v = c.rank.value() as i8;
        if !by_value.iter().any(|(seen, _)| *seen == v) {
            by_value.push((v, c));
        }
    }
    if let Some(&(_, ace)) = by_value.iter().find(|(v, _)| *v == Rank::Ace.value() as i8) {
        by_value.push((-1, ace));
    }
    by_value.sort_by(|a, b| b.0.cmp(&a.0));

    by_value
        .windows(5)
        .find(|w| w.windows(2).all(|p| p[0].0 == p[1].0 + 1))
        .map(|w| [w[0].1, w[1].1, w[2].1, w[3].1, w[4].1])
}

/// Rank buckets of size 4, 3 and 2, each list ordered by rank descending.
struct RankGroups {
    quad: Option<Vec<Card>>,
    trips: Vec<Vec<Card>>,
    pairs: Vec<Vec<Card>>,
}

impl RankGroups {
    fn new(sorted: &[Card]) -> Self {
        let mut groups = RankGroups {
            quad: None,
            trips: Vec::new(),
            pairs: Vec::new(),
        };
        for bucket in sorted.chunk_by(|a, b| a.rank == b.rank) {
            match bucket.len() {
                4 => groups.quad = Some(bucket.to_vec()),
                3 => groups.trips.push(bucket.to_vec()),
                2 => groups.pairs.push(bucket.to_vec()),
                _ => {}
            }
        }
        groups
    }
}

/// Appends the highest remaining cards to `core` until five are selected.
fn take_up_to_5(mut core: Vec<Card>, sorted: &[Card]) -> Vec<Card> {
    let needed = 5usize.saturating_sub(core.len());
    let kickers: Vec<Card> = sorted
        .iter()
        .copied()
        .filter(|c| !core.contains(c))
        .take(needed)
        .collect();
    core.extend(kickers);
    core
}
