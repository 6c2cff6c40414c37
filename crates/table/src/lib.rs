// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker table.
//!
//! Runs five card rounds: players pay the ante, get five cards each from a
//! freshly shuffled deck, and the pot goes to the showdown winners.
//!
//! ```
//! # use fivecard_table::*;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let players = vec![
//!     Player::new("alice", Chips::new(100)),
//!     Player::new("bob", Chips::new(100)),
//! ];
//!
//! let rng = StdRng::seed_from_u64(1);
//! let mut table = Table::with_rng(Config::default(), players, rng).unwrap();
//! let result = table.play_round().unwrap();
//! assert_eq!(result.pot, Chips::new(20));
//!
//! let total = table.players().map(|p| p.chips()).fold(Chips::ZERO, |a, b| a + b);
//! assert_eq!(total, Chips::new(200));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

use fivecard_eval::KickerRouting;

pub mod chips;
pub use chips::Chips;
pub mod player;
pub use player::Player;
pub mod table;
pub use table::{RoundResult, SeatResult, Table};

/// Table configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The chips each player pays to join a round.
    pub ante: Chips,
    /// The maximum number of players at the table.
    pub max_players: usize,
    /// How the showdown breaks ties after the main part.
    pub routing: KickerRouting,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ante: Chips::new(10),
            max_players: Table::MAX_SEATS,
            routing: KickerRouting::Generic,
        }
    }
}

/// Table errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A player cannot cover an ante or a bet.
    #[error("player {nickname} has {chips} chips, needs {needed}")]
    NotEnoughChips {
        /// The player nickname.
        nickname: String,
        /// The player chips.
        chips: Chips,
        /// The chips required.
        needed: Chips,
    },
    /// There are more players than seats.
    #[error("at most {max} players can sit at the table, got {count}")]
    TooManyPlayers {
        /// The number of players.
        count: usize,
        /// The number of seats.
        max: usize,
    },
    /// A round needs at least two players.
    #[error("at least 2 players are needed, got {0}")]
    NotEnoughPlayers(usize),
    /// The pot of the previous round has not been distributed.
    #[error("the current round pot has not been distributed")]
    RoundInProgress,
    /// The players already hold their cards.
    #[error("cards already dealt for this round")]
    CardsAlreadyDealt,
    /// The deck run out of cards while dealing.
    #[error("no cards left in the deck")]
    DeckExhausted,
    /// There is no player at the given seat.
    #[error("no player at seat {0}")]
    InvalidSeat(usize),
    /// The showdown failed.
    #[error(transparent)]
    Eval(#[from] fivecard_eval::Error),
}

/// Table result type.
pub type Result<T> = std::result::Result<T, TableError>;
