// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker hand evaluator.
//!
//! Classifies 5 cards hands into one of ten categories and resolves the
//! winners of a showdown using the standard tie-break rules: the category
//! first, then the rank of the group that defines the category, the lower
//! pair for two pairs, and finally the kickers from the highest down.
//!
//! To classify a hand use [classify] or build a [Hand]:
//!
//! ```
//! # use fivecard_eval::*;
//! let cards = parse_cards("AS 2D 3C 4H 5S").unwrap();
//! assert_eq!(classify(&cards), Ok(HandCategory::Straight));
//!
//! let hand = Hand::new(&cards).unwrap();
//! // The ace plays low in a wheel.
//! assert_eq!(hand.cards()[0].rank(), Rank::Ace);
//! ```
//!
//! To find the winners use [resolve_winners] with a list of player ids and
//! their cards, more than one winner means the pot is split:
//!
//! ```
//! # use fivecard_eval::*;
//! let players = vec![
//!     ("alice", parse_cards("4C 4H 9D 9S QC").unwrap()),
//!     ("bob", parse_cards("4D 4S 9C 9H QS").unwrap()),
//!     ("carol", parse_cards("2C 2H 9C 9H QS").unwrap()),
//! ];
//!
//! assert_eq!(resolve_winners(&players), Ok(vec!["alice", "bob"]));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod category;
pub mod compare;
pub mod error;
pub mod hand;
pub mod parts;
pub mod resolve;

pub use category::HandCategory;
pub use compare::Contender;
pub use error::{Error, Result};
pub use hand::{Hand, canonicalize, classify};
pub use parts::{HandParts, extract};
pub use resolve::{KickerRouting, Resolver, resolve_winners};

// Reexport cards types.
pub use fivecard_cards::{Card, Deck, Rank, Suit, parse_cards};
