// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// Cards are ordered by rank and then by suit, the suit order is only used
/// to sort cards and never changes the strength of a hand.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is too short to hold a rank and a suit.
    #[error("invalid card '{0}'")]
    Format(String),
    /// The rank part is not one of 2-10, T, J, Q, K, A.
    #[error("invalid rank '{0}'")]
    Rank(String),
    /// The suit part is not one of C, D, H, S.
    #[error("invalid suit '{0}'")]
    Suit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses cards like `AS`, `td`, or `10H`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .ok_or_else(|| ParseCardError::Format(s.to_string()))?;

        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(ParseCardError::Format(s.to_string()));
        }

        Ok(Card::new(rank.parse()?, Suit::try_from(suit)?))
    }
}

/// Parses a whitespace separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, from 2 for a deuce to 14 for an ace.
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseCardError::Rank(s.to_string())),
        };

        Ok(rank)
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseCardError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Suit::Clubs),
            'D' => Ok(Suit::Diamonds),
            'H' => Ok(Suit::Hearts),
            'S' => Ok(Suit::Spades),
            _ => Err(ParseCardError::Suit(c)),
        }
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }
}

/// A cards Deck.
///
/// The deck owns its cards and deals them by moving a cursor, dealt cards are
/// copied out so hands never share storage with the deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if there are no cards left.
    pub fn deal(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Number of cards left in the deck.
    pub fn count(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Removes a card that has not been dealt yet.
    pub fn remove(&mut self, card: Card) {
        if let Some(pos) = self.undealt().iter().position(|c| c == &card) {
            self.cards.remove(self.next + pos);
        }
    }

    /// Calls the `f` closure for each k-cards hand made of the cards left in
    /// the deck.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        let cards = self.undealt();
        let n = cards.len();
        if k > n {
            return;
        }

        let mut idx = [0, 1, 2, 3, 4];
        let mut h = [cards[0]; 5];

        loop {
            for (c, &i) in h.iter_mut().zip(&idx[..k]) {
                *c = cards[i];
            }

            f(&h[..k]);

            // Find the rightmost index that can still be advanced.
            let mut i = k;
            while i > 0 && idx[i - 1] == n - k + i - 1 {
                i -= 1;
            }

            if i == 0 {
                return;
            }

            idx[i - 1] += 1;
            for j in i..k {
                idx[j] = idx[j - 1] + 1;
            }
        }
    }

    fn undealt(&self) -> &[Card] {
        &self.cards[self.next..]
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards, next: 0 }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::iter::Skip<std::vec::IntoIter<Card>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter().skip(self.next)
    }
}
