//! # holdem-engine: Texas Hold'em Round Engine
//!
//! A multi-seat Texas Hold'em engine: dealing, blinds, four betting streets,
//! best-five-of-seven hand classification and pot settlement. The engine is
//! synchronous and single-threaded; every action runs to completion before the
//! next one is accepted.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), display and parsing
//! - [`deck`] - Seeded Fisher–Yates deck dealt from the end
//! - [`hand`] - Best-five-card evaluation with a single comparable score
//! - [`player`] - Seat state and wager operations
//! - [`rules`] - Call value, minimum raise and bet validation
//! - [`pot`] - Settlement of the round's wagers
//! - [`game`] - Round controller and stage state machine
//! - [`logger`] - Round records and JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("7c 7d 7h 7s 2c 3d 4h").unwrap();
//! let hand = evaluate(&cards).unwrap();
//! assert_eq!(hand.category, Category::Quads);
//! println!("Best five: {:?}", hand.cards);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use holdem_engine::game::{Game, GameConfig};
//! use holdem_engine::player::PlayerAction;
//!
//! let mut game = Game::new(GameConfig { seed: Some(42), ..GameConfig::new(2, 1_000) }).unwrap();
//! while !game.is_round_over() {
//!     let action = if game.call_value() == Some(0) {
//!         PlayerAction::Check
//!     } else {
//!         PlayerAction::Call
//!     };
//!     game.act(action).unwrap();
//! }
//! let results = game.showdown().unwrap();
//! assert_eq!(results.iter().map(|r| r.reward).sum::<u64>(), game.round_total_bet());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
