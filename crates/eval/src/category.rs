// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a 5 cards hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No other category.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
    /// Ten to ace of the same suit.
    RoyalFlush,
}

impl HandCategory {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category strength, 0 for a high card up to 9 for a royal flush.
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Checks if two players with a single deck cannot both hold this category
    /// with a defining group of the same rank.
    pub fn has_unique_main_part(&self) -> bool {
        matches!(
            self,
            HandCategory::ThreeOfAKind | HandCategory::FullHouse | HandCategory::FourOfAKind
        )
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        };

        f.pad(name)
    }
}
