// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table player types.
use fivecard_cards::Card;

use crate::{Chips, Result, TableError};

/// A table player state.
#[derive(Debug, Clone)]
pub struct Player {
    nickname: String,
    chips: Chips,
    bet: Chips,
    cards: Vec<Card>,
}

impl Player {
    /// Creates a new player.
    pub fn new(nickname: impl Into<String>, chips: Chips) -> Self {
        Self {
            nickname: nickname.into(),
            chips,
            bet: Chips::ZERO,
            cards: Vec::with_capacity(5),
        }
    }

    /// This player nickname.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// This player chips.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// The chips this player bet in the current round.
    pub fn bet_amount(&self) -> Chips {
        self.bet
    }

    /// This player cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Moves chips from this player stack to the bet.
    ///
    /// Fails without changing the stack if the player doesn't have enough chips.
    pub fn bet(&mut self, chips: Chips) -> Result<()> {
        self.take(chips)?;
        self.bet += chips;
        Ok(())
    }

    /// Takes the ante from this player stack.
    pub fn pay_ante(&mut self, ante: Chips) -> Result<()> {
        self.take(ante)
    }

    /// Checks if this player can pay the given amount.
    pub fn can_pay(&self, chips: Chips) -> bool {
        self.chips >= chips
    }

    /// Adds chips won to this player stack.
    pub fn win(&mut self, chips: Chips) {
        self.chips += chips;
    }

    /// Adds a card to this player hand.
    pub fn draw_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Reset state for a new round.
    pub(crate) fn start_round(&mut self) {
        self.bet = Chips::ZERO;
        self.cards.clear();
    }

    /// Set state on round end, the bet has been moved to the pot.
    pub(crate) fn end_round(&mut self) {
        self.bet = Chips::ZERO;
    }

    fn take(&mut self, chips: Chips) -> Result<()> {
        if !self.can_pay(chips) {
            return Err(TableError::NotEnoughChips {
                nickname: self.nickname.clone(),
                chips: self.chips,
                needed: chips,
            });
        }

        self.chips -= chips;
        Ok(())
    }
}
