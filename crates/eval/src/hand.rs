// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical 5 cards hands and their classification.
//!
//! A hand is kept in canonical order: cards sorted by rank with the suit as
//! tie-break, and for the wheel (2, 3, 4, 5, A) the ace moved in front so that
//! it plays as a one. All the category checks below rely on this order, equal
//! ranks are always adjacent so groups are windows of consecutive cards.
use std::fmt;

use fivecard_cards::{Card, Rank};

use crate::{Error, HandCategory, HandParts, Result, parts};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Sorts cards in canonical order.
///
/// This function is idempotent.
pub fn canonicalize(mut cards: [Card; HAND_SIZE]) -> [Card; HAND_SIZE] {
    cards.sort();

    let ranks = cards.map(|c| c.rank());
    if ranks == [Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five, Rank::Ace] {
        cards.rotate_right(1);
    }

    cards
}

/// Classifies 5 cards.
pub fn classify(cards: &[Card]) -> Result<HandCategory> {
    Hand::new(cards).map(|hand| hand.category())
}

/// A 5 cards hand in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from exactly 5 cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| Error::WrongCardCount(cards.len()))?;

        Ok(Self {
            cards: canonicalize(cards),
        })
    }

    /// The cards in canonical order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The card with the highest rank, a five for a wheel.
    pub fn high_card(&self) -> Card {
        self.cards[HAND_SIZE - 1]
    }

    /// Returns this hand category.
    ///
    /// Checks go from the strongest category down and stop at the first match.
    pub fn category(&self) -> HandCategory {
        if self.is_royal_flush() {
            HandCategory::RoyalFlush
        } else if self.is_straight_flush() {
            HandCategory::StraightFlush
        } else if self.is_four_of_a_kind() {
            HandCategory::FourOfAKind
        } else if self.is_full_house() {
            HandCategory::FullHouse
        } else if self.is_flush() {
            HandCategory::Flush
        } else if self.is_straight() {
            HandCategory::Straight
        } else if self.is_three_of_a_kind() {
            HandCategory::ThreeOfAKind
        } else if self.is_two_pair() {
            HandCategory::TwoPair
        } else if self.is_one_pair() {
            HandCategory::OnePair
        } else {
            HandCategory::HighCard
        }
    }

    /// Splits this hand into the groups of its category.
    pub fn parts(&self) -> HandParts {
        parts::split(self, self.category())
    }

    /// Checks if all cards in the `first..=last` window have the same rank.
    pub(crate) fn same_rank(&self, first: usize, last: usize) -> bool {
        let rank = self.cards[first].rank();
        self.cards[first..=last].iter().all(|c| c.rank() == rank)
    }

    fn is_royal_flush(&self) -> bool {
        self.is_straight_flush() && self.cards[0].rank() == Rank::Ten
    }

    fn is_straight_flush(&self) -> bool {
        self.is_straight() && self.is_flush()
    }

    fn is_four_of_a_kind(&self) -> bool {
        self.same_rank(0, 3) || self.same_rank(1, 4)
    }

    fn is_full_house(&self) -> bool {
        (self.same_rank(0, 2) && self.same_rank(3, 4))
            || (self.same_rank(0, 1) && self.same_rank(2, 4))
    }

    fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    fn is_straight(&self) -> bool {
        // After canonicalization a wheel starts with the ace.
        if self.cards[0].rank() == Rank::Ace {
            return self.cards[1..]
                .iter()
                .map(|c| c.rank())
                .eq([Rank::Deuce, Rank::Trey, Rank::Four, Rank::Five]);
        }

        self.cards
            .windows(2)
            .all(|w| w[0].rank().value() + 1 == w[1].rank().value())
    }

    fn is_three_of_a_kind(&self) -> bool {
        self.same_rank(0, 2) || self.same_rank(1, 3) || self.same_rank(2, 4)
    }

    fn is_two_pair(&self) -> bool {
        (self.same_rank(0, 1) && self.same_rank(2, 3))
            || (self.same_rank(0, 1) && self.same_rank(3, 4))
            || (self.same_rank(1, 2) && self.same_rank(3, 4))
    }

    fn is_one_pair(&self) -> bool {
        (0..HAND_SIZE - 1).any(|i| self.same_rank(i, i + 1))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivecard_cards::{Deck, parse_cards};
    use rand::{prelude::*, rngs::StdRng};

    fn hand(s: &str) -> Hand {
        Hand::new(&parse_cards(s).unwrap()).unwrap()
    }

    fn category(s: &str) -> HandCategory {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn wrong_card_count() {
        let cards = parse_cards("AS KS QS JS TS 9S").unwrap();
        assert_eq!(classify(&cards), Err(Error::WrongCardCount(6)));
        assert_eq!(classify(&cards[..4]), Err(Error::WrongCardCount(4)));
        assert_eq!(classify(&[]), Err(Error::WrongCardCount(0)));
    }

    #[test]
    fn canonical_order() {
        let h = hand("KD 2S KC 9H 2C");
        assert_eq!(h.to_string(), "2C 2S 9H KC KD");
        assert_eq!(h.high_card().to_string(), "KD");

        // The wheel ace is moved in front.
        let h = hand("5C AD 3S 2H 4C");
        assert_eq!(h.to_string(), "AD 2H 3S 4C 5C");
        assert_eq!(h.high_card().rank(), Rank::Five);

        // An ace high straight is left alone.
        let h = hand("AD KD QS JH TC");
        assert_eq!(h.to_string(), "TC JH QS KD AD");

        // Not a wheel, the ace stays at the end.
        let h = hand("AD 2D 3S 4H 6C");
        assert_eq!(h.to_string(), "2D 3S 4H 6C AD");
    }

    #[test]
    fn canonicalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let cards: [Card; 5] = std::array::from_fn(|_| deck.deal().unwrap());
            let once = canonicalize(cards);
            assert_eq!(canonicalize(once), once);
        }

        let wheel = canonicalize(parse_cards("AS 5S 4D 3C 2C").unwrap().try_into().unwrap());
        assert_eq!(canonicalize(wheel), wheel);
    }

    #[test]
    fn categories() {
        assert_eq!(category("TC JC QC KC AC"), HandCategory::RoyalFlush);
        assert_eq!(category("3C 4C 5C 6C 7C"), HandCategory::StraightFlush);
        assert_eq!(category("AH 2H 3H 4H 5H"), HandCategory::StraightFlush);
        assert_eq!(category("9C 9D 9H 9S 2C"), HandCategory::FourOfAKind);
        assert_eq!(category("2C 9D 9H 9S 9C"), HandCategory::FourOfAKind);
        assert_eq!(category("3C 3D 3H 8S 8C"), HandCategory::FullHouse);
        assert_eq!(category("3C 3D 8H 8S 8C"), HandCategory::FullHouse);
        assert_eq!(category("2D 7D 9D JD KD"), HandCategory::Flush);
        assert_eq!(category("9C TD JH QS KC"), HandCategory::Straight);
        assert_eq!(category("AC 2D 3H 4S 5C"), HandCategory::Straight);
        assert_eq!(category("TC JD QH KS AC"), HandCategory::Straight);
        assert_eq!(category("3C 3D 3H 5S 7C"), HandCategory::ThreeOfAKind);
        assert_eq!(category("2C 3D 3H 3S 7C"), HandCategory::ThreeOfAKind);
        assert_eq!(category("2C 5D 7H 7S 7C"), HandCategory::ThreeOfAKind);
        assert_eq!(category("4C 4H 9D 9S QC"), HandCategory::TwoPair);
        assert_eq!(category("4C 4H 7D 9S 9C"), HandCategory::TwoPair);
        assert_eq!(category("2C 4H 4D 9S 9C"), HandCategory::TwoPair);
        assert_eq!(category("5D 5C 8C JH QS"), HandCategory::OnePair);
        assert_eq!(category("2D 5C 8C JH JS"), HandCategory::OnePair);
        assert_eq!(category("2D 5C 8C JH KS"), HandCategory::HighCard);

        // No wrap around straights.
        assert_eq!(category("QC KD AH 2S 3C"), HandCategory::HighCard);
        assert_eq!(category("JD QD KD AD 2D"), HandCategory::Flush);
    }

    #[test]
    fn permutation_invariance() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..2_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..5).map(|_| deck.deal().unwrap()).collect::<Vec<_>>();
            let expected = Hand::new(&cards).unwrap();

            for _ in 0..10 {
                cards.shuffle(&mut rng);
                let h = Hand::new(&cards).unwrap();
                assert_eq!(h, expected);
                assert_eq!(h.category(), expected.category());
            }
        }
    }

    #[test]
    fn all_hands_distribution() {
        let mut counts = [0usize; HandCategory::COUNT];
        Deck::default().for_each(5, |cards| {
            let category = classify(cards).unwrap();
            counts[category as usize] += 1;
        });

        assert_eq!(counts[HandCategory::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandCategory::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandCategory::TwoPair as usize], 123_552);
        assert_eq!(counts[HandCategory::ThreeOfAKind as usize], 54_912);
        assert_eq!(counts[HandCategory::Straight as usize], 10_200);
        assert_eq!(counts[HandCategory::Flush as usize], 5_108);
        assert_eq!(counts[HandCategory::FullHouse as usize], 3_744);
        assert_eq!(counts[HandCategory::FourOfAKind as usize], 624);
        assert_eq!(counts[HandCategory::StraightFlush as usize], 36);
        assert_eq!(counts[HandCategory::RoyalFlush as usize], 4);
        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}
