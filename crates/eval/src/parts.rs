// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand parts extraction.
//!
//! Splits a hand into the group that defines its category (the main part),
//! the lower pair of a two pair hand (the sub-main part), and the kickers used
//! to break ties.
use std::{ops::Range, slice};

use fivecard_cards::{Card, Rank};

use crate::{Error, Hand, HandCategory, Result, hand::HAND_SIZE};

/// The groups of a hand of a given category.
///
/// Groups and kickers are in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandParts {
    /// A high card hand, the highest card and the other four.
    HighCard {
        /// The highest card.
        high: Card,
        /// The remaining cards.
        kickers: [Card; 4],
    },
    /// A pair and three kickers.
    OnePair {
        /// The pair.
        pair: [Card; 2],
        /// The kickers.
        kickers: [Card; 3],
    },
    /// Two pairs and a kicker.
    TwoPair {
        /// The pair with the higher rank.
        high_pair: [Card; 2],
        /// The pair with the lower rank.
        low_pair: [Card; 2],
        /// The kicker.
        kicker: Card,
    },
    /// Three of a kind and two kickers.
    ThreeOfAKind {
        /// The three cards with the same rank.
        triple: [Card; 3],
        /// The kickers.
        kickers: [Card; 2],
    },
    /// A straight, the cards in sequence starting from the lowest.
    Straight {
        /// The cards.
        cards: [Card; 5],
    },
    /// A flush, the highest card and the other four.
    Flush {
        /// The highest card.
        high: Card,
        /// The remaining cards.
        kickers: [Card; 4],
    },
    /// A full house.
    FullHouse {
        /// The three cards with the same rank.
        triple: [Card; 3],
        /// The pair.
        pair: [Card; 2],
    },
    /// Four of a kind and a kicker.
    FourOfAKind {
        /// The four cards with the same rank.
        quad: [Card; 4],
        /// The kicker.
        kicker: Card,
    },
    /// A straight flush.
    StraightFlush {
        /// The cards.
        cards: [Card; 5],
    },
    /// A royal flush.
    RoyalFlush {
        /// The cards.
        cards: [Card; 5],
    },
}

impl HandParts {
    /// The category these parts belong to.
    pub fn category(&self) -> HandCategory {
        match self {
            HandParts::HighCard { .. } => HandCategory::HighCard,
            HandParts::OnePair { .. } => HandCategory::OnePair,
            HandParts::TwoPair { .. } => HandCategory::TwoPair,
            HandParts::ThreeOfAKind { .. } => HandCategory::ThreeOfAKind,
            HandParts::Straight { .. } => HandCategory::Straight,
            HandParts::Flush { .. } => HandCategory::Flush,
            HandParts::FullHouse { .. } => HandCategory::FullHouse,
            HandParts::FourOfAKind { .. } => HandCategory::FourOfAKind,
            HandParts::StraightFlush { .. } => HandCategory::StraightFlush,
            HandParts::RoyalFlush { .. } => HandCategory::RoyalFlush,
        }
    }

    /// The rank of the main part.
    ///
    /// For hands without groups this is the rank of the highest card, a five
    /// for a wheel straight.
    pub fn main_rank(&self) -> Rank {
        match self {
            HandParts::HighCard { high, .. } | HandParts::Flush { high, .. } => high.rank(),
            HandParts::OnePair { pair, .. } => pair[0].rank(),
            HandParts::TwoPair { high_pair, .. } => high_pair[0].rank(),
            HandParts::ThreeOfAKind { triple, .. } | HandParts::FullHouse { triple, .. } => {
                triple[0].rank()
            }
            HandParts::FourOfAKind { quad, .. } => quad[0].rank(),
            HandParts::Straight { cards }
            | HandParts::StraightFlush { cards }
            | HandParts::RoyalFlush { cards } => cards[HAND_SIZE - 1].rank(),
        }
    }

    /// The rank of the sub-main part, only two pair hands have one.
    pub fn sub_rank(&self) -> Option<Rank> {
        match self {
            HandParts::TwoPair { low_pair, .. } => Some(low_pair[0].rank()),
            _ => None,
        }
    }

    /// The kickers in ascending order.
    pub fn kickers(&self) -> &[Card] {
        match self {
            HandParts::HighCard { kickers, .. } | HandParts::Flush { kickers, .. } => {
                kickers.as_slice()
            }
            HandParts::OnePair { kickers, .. } => kickers.as_slice(),
            HandParts::ThreeOfAKind { kickers, .. } => kickers.as_slice(),
            HandParts::TwoPair { kicker, .. } | HandParts::FourOfAKind { kicker, .. } => {
                slice::from_ref(kicker)
            }
            HandParts::Straight { .. }
            | HandParts::FullHouse { .. }
            | HandParts::StraightFlush { .. }
            | HandParts::RoyalFlush { .. } => &[],
        }
    }

    /// All the cards, main part first, then the sub-main part and the kickers.
    pub fn cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(HAND_SIZE);
        match self {
            HandParts::HighCard { high, .. } | HandParts::Flush { high, .. } => cards.push(*high),
            HandParts::OnePair { pair, .. } => cards.extend_from_slice(pair),
            HandParts::TwoPair {
                high_pair,
                low_pair,
                ..
            } => {
                cards.extend_from_slice(high_pair);
                cards.extend_from_slice(low_pair);
            }
            HandParts::ThreeOfAKind { triple, .. } => cards.extend_from_slice(triple),
            HandParts::FullHouse { triple, pair } => {
                cards.extend_from_slice(triple);
                cards.extend_from_slice(pair);
            }
            HandParts::FourOfAKind { quad, .. } => cards.extend_from_slice(quad),
            HandParts::Straight { cards: c }
            | HandParts::StraightFlush { cards: c }
            | HandParts::RoyalFlush { cards: c } => cards.extend_from_slice(c),
        }

        cards.extend_from_slice(self.kickers());
        cards
    }
}

/// Splits a hand into the parts of the given category.
///
/// Fails with [Error::CategoryMismatch] if the hand is not of that category.
pub fn extract(hand: &Hand, category: HandCategory) -> Result<HandParts> {
    let actual = hand.category();
    if actual != category {
        return Err(Error::CategoryMismatch {
            expected: category,
            actual,
        });
    }

    Ok(split(hand, category))
}

/// Splits a hand that is known to be of the given category.
pub(crate) fn split(hand: &Hand, category: HandCategory) -> HandParts {
    let cards = hand.cards();

    match category {
        HandCategory::HighCard => HandParts::HighCard {
            high: hand.high_card(),
            kickers: window(cards, 0),
        },
        HandCategory::OnePair => {
            let start = (0..HAND_SIZE - 1)
                .find(|&i| hand.same_rank(i, i + 1))
                .unwrap_or_default();

            HandParts::OnePair {
                pair: window(cards, start),
                kickers: outside(cards, &[start..start + 2]),
            }
        }
        HandCategory::TwoPair => {
            let (low, high) = if hand.same_rank(0, 1) && hand.same_rank(2, 3) {
                (0, 2)
            } else if hand.same_rank(0, 1) && hand.same_rank(3, 4) {
                (0, 3)
            } else {
                (1, 3)
            };

            let [kicker] = outside(cards, &[low..low + 2, high..high + 2]);
            HandParts::TwoPair {
                high_pair: window(cards, high),
                low_pair: window(cards, low),
                kicker,
            }
        }
        HandCategory::ThreeOfAKind => {
            let start = (0..3)
                .find(|&i| hand.same_rank(i, i + 2))
                .unwrap_or_default();

            HandParts::ThreeOfAKind {
                triple: window(cards, start),
                kickers: outside(cards, &[start..start + 3]),
            }
        }
        HandCategory::Straight => HandParts::Straight { cards: *cards },
        HandCategory::Flush => HandParts::Flush {
            high: hand.high_card(),
            kickers: window(cards, 0),
        },
        HandCategory::FullHouse => {
            // Either triple then pair or pair then triple.
            let (triple, pair) = if hand.same_rank(0, 2) { (0, 3) } else { (2, 0) };
            HandParts::FullHouse {
                triple: window(cards, triple),
                pair: window(cards, pair),
            }
        }
        HandCategory::FourOfAKind => {
            let (quad, kicker) = if hand.same_rank(0, 3) { (0, 4) } else { (1, 0) };
            HandParts::FourOfAKind {
                quad: window(cards, quad),
                kicker: cards[kicker],
            }
        }
        HandCategory::StraightFlush => HandParts::StraightFlush { cards: *cards },
        HandCategory::RoyalFlush => HandParts::RoyalFlush { cards: *cards },
    }
}

/// Returns `N` consecutive cards starting at `start`.
fn window<const N: usize>(cards: &[Card; HAND_SIZE], start: usize) -> [Card; N] {
    std::array::from_fn(|i| cards[start + i])
}

/// Returns the `N` cards outside the given groups in canonical order.
fn outside<const N: usize>(cards: &[Card; HAND_SIZE], groups: &[Range<usize>]) -> [Card; N] {
    let mut out = [cards[0]; N];
    let rest = (0..HAND_SIZE)
        .filter(|i| !groups.iter().any(|g| g.contains(i)))
        .map(|i| cards[i]);

    for (slot, card) in out.iter_mut().zip(rest) {
        *slot = card;
    }

    out
}
