//! # holdem-engine: Four-Seat Texas Hold'em Core
//!
//! Rules core for a single-table, four-seat No-Limit Texas Hold'em game:
//! one human seat (seat 0) against three computer seats. Provides the deck,
//! hand evaluation, the betting state machine and hand-history logging,
//! with an injectable ChaCha20 shuffle source for reproducible games.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and notation parsing
//! - [`deck`] - 52-card deck with deal cursor and injectable shuffle
//! - [`hand`] - Best-five-card evaluation and hand comparison
//! - [`player`] - Seat state, actions and chip movement
//! - [`rules`] - Action validation against stack and table bet
//! - [`game`] - Betting state machine, phase progression and showdown
//! - [`logger`] - Table events and JSONL hand records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate_cards, Category};
//!
//! let cards = parse_cards("As Ks Qs Js Ts 2c 3d").unwrap();
//! let result = evaluate_cards(&cards);
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! The same seed deals the same cards:
//!
//! ```rust
//! use holdem_engine::game::{Game, TableConfig};
//!
//! let mut a = Game::new(TableConfig::default(), 42);
//! let mut b = Game::new(TableConfig::default(), 42);
//! a.new_hand().unwrap();
//! b.new_hand().unwrap();
//! assert_eq!(a.player(0).hole_cards(), b.player(0).hole_cards());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
