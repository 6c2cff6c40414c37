// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivecard_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards. The deck takes the
//! random source as a parameter so that a round can be replayed from a seed:
//!
//! ```
//! # use fivecard_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let mut d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! assert_eq!(d1.deal(), d2.deal());
//! assert_eq!(d1.count(), Deck::SIZE - 1);
//! ```
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use fivecard_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
