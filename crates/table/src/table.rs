// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Table rounds.
//!
//! A round goes through these steps:
//!
//! 1. [Table::start_round] collects the ante and shuffles a new deck.
//! 2. [Table::deal_cards] deals five cards to each player one at a time.
//! 3. Players may [Table::bet] chips that are added to the pot.
//! 4. [Table::showdown] finds the winners and [Table::distribute_pot] pays
//!    them.
//!
//! [Table::play_round] runs all the steps without bets.
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use fivecard_cards::Deck;
use fivecard_eval::{Hand, HandCategory, Resolver, hand::HAND_SIZE};

use crate::{Chips, Config, Player, Result, TableError};

/// A player result at the end of a round.
#[derive(Debug, Clone)]
pub struct SeatResult {
    /// The player nickname.
    pub nickname: String,
    /// The player hand.
    pub hand: Hand,
    /// The player hand category.
    pub category: HandCategory,
    /// The chips won by the player.
    pub payoff: Chips,
}

/// The result of a round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    /// The round number starting from 1.
    pub round: u32,
    /// The pot at showdown.
    pub pot: Chips,
    /// The winners seats.
    pub winners: Vec<usize>,
    /// The result for each seat.
    pub seats: Vec<SeatResult>,
}

/// A five card poker table.
#[derive(Debug)]
pub struct Table {
    config: Config,
    players: Vec<Player>,
    resolver: Resolver,
    deck: Deck,
    antes: Chips,
    round: u32,
    in_round: bool,
    rng: StdRng,
}

impl Table {
    /// The maximum number of seats a single deck can deal to.
    pub const MAX_SEATS: usize = Deck::SIZE / HAND_SIZE;

    /// Creates a new table.
    pub fn new(config: Config, players: Vec<Player>) -> Result<Self> {
        Self::with_rng(config, players, StdRng::from_os_rng())
    }

    /// Creates a new table with user initialized randomness.
    pub fn with_rng(config: Config, players: Vec<Player>, mut rng: StdRng) -> Result<Self> {
        let max = config.max_players.min(Self::MAX_SEATS);
        if players.len() > max {
            return Err(TableError::TooManyPlayers {
                count: players.len(),
                max,
            });
        }

        if players.len() < 2 {
            return Err(TableError::NotEnoughPlayers(players.len()));
        }

        Ok(Self {
            resolver: Resolver::new(config.routing),
            deck: Deck::new_and_shuffled(&mut rng),
            config,
            players,
            antes: Chips::ZERO,
            round: 0,
            in_round: false,
            rng,
        })
    }

    /// The table configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns an iterator to all players in seat order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns the player at the given seat.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// The number of cards left in the deck.
    pub fn cards_left(&self) -> usize {
        self.deck.count()
    }

    /// Starts a new round, collects the ante and shuffles a new deck.
    ///
    /// Fails if the pot of the previous round has not been distributed. If a
    /// player cannot pay the ante no chips are collected.
    pub fn start_round(&mut self) -> Result<()> {
        if self.in_round || self.pot() > Chips::ZERO {
            return Err(TableError::RoundInProgress);
        }

        if self.players.len() < 2 {
            return Err(TableError::NotEnoughPlayers(self.players.len()));
        }

        let ante = self.config.ante;
        if let Some(player) = self.players.iter().find(|p| !p.can_pay(ante)) {
            return Err(TableError::NotEnoughChips {
                nickname: player.nickname().to_string(),
                chips: player.chips(),
                needed: ante,
            });
        }

        for player in &mut self.players {
            player.start_round();
            player.pay_ante(ante)?;
        }

        self.antes = self.players.iter().map(|_| ante).sum();
        self.deck = Deck::new_and_shuffled(&mut self.rng);
        self.round += 1;
        self.in_round = true;

        info!(
            "Round {} started with {} players, ante {ante}",
            self.round,
            self.players.len()
        );

        Ok(())
    }

    /// Deals five cards to each player, one card at a time.
    ///
    /// No card is dealt if the players already hold cards or the deck cannot
    /// complete all the hands.
    pub fn deal_cards(&mut self) -> Result<()> {
        if self.players.iter().any(|p| !p.cards().is_empty()) {
            return Err(TableError::CardsAlreadyDealt);
        }

        if self.deck.count() < self.players.len() * HAND_SIZE {
            return Err(TableError::DeckExhausted);
        }

        for _ in 0..HAND_SIZE {
            for player in &mut self.players {
                let card = self.deck.deal().ok_or(TableError::DeckExhausted)?;
                player.draw_card(card);
            }
        }

        Ok(())
    }

    /// The player at the given seat bets chips.
    pub fn bet(&mut self, seat: usize, chips: Chips) -> Result<()> {
        self.players
            .get_mut(seat)
            .ok_or(TableError::InvalidSeat(seat))?
            .bet(chips)
    }

    /// The chips in the pot, antes plus bets.
    pub fn pot(&self) -> Chips {
        self.antes + self.players.iter().map(|p| p.bet_amount()).sum()
    }

    /// Returns the seats of the players with the best hands.
    pub fn showdown(&self) -> Result<Vec<usize>> {
        let hands = self
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| (seat, p.cards()))
            .collect::<Vec<_>>();

        Ok(self.resolver.resolve(&hands)?)
    }

    /// Splits the pot between the winners and returns the payoff for each seat.
    ///
    /// Chips that cannot be split equally go one each to the winners in seat
    /// order.
    pub fn distribute_pot(&mut self, winners: &[usize]) -> Result<Vec<Chips>> {
        let mut seats = winners.to_vec();
        seats.sort_unstable();
        seats.dedup();

        if let Some(&seat) = seats.iter().find(|&&s| s >= self.players.len()) {
            return Err(TableError::InvalidSeat(seat));
        }

        if seats.is_empty() {
            return Err(fivecard_eval::Error::EmptyInput.into());
        }

        let pot = self.pot();
        let (share, remainder) = pot.split(seats.len());

        let mut payoffs = vec![Chips::ZERO; self.players.len()];
        for &seat in &seats {
            payoffs[seat] += share;
        }

        // The remainder is less than the number of winners.
        for &seat in seats.iter().take(remainder.amount() as usize) {
            payoffs[seat] += Chips::new(1);
        }

        if remainder > Chips::ZERO {
            debug!("Pot {pot} split {} ways, {remainder} odd chips", seats.len());
        }

        for (player, &payoff) in self.players.iter_mut().zip(&payoffs) {
            player.win(payoff);
            player.end_round();
        }

        self.antes = Chips::ZERO;
        self.in_round = false;
        Ok(payoffs)
    }

    /// Plays a round without bets: ante, deal, showdown and payoffs.
    pub fn play_round(&mut self) -> Result<RoundResult> {
        self.start_round()?;
        self.deal_cards()?;

        let pot = self.pot();
        let winners = self.showdown()?;
        let payoffs = self.distribute_pot(&winners)?;

        let seats = self
            .players
            .iter()
            .zip(payoffs)
            .map(|(p, payoff)| {
                Hand::new(p.cards()).map(|hand| SeatResult {
                    nickname: p.nickname().to_string(),
                    category: hand.category(),
                    hand,
                    payoff,
                })
            })
            .collect::<fivecard_eval::Result<Vec<_>>>()?;

        let names = winners
            .iter()
            .map(|&seat| seats[seat].nickname.as_str())
            .collect::<Vec<_>>();
        info!("Round {} pot {pot} won by {}", self.round, names.join(", "));

        Ok(RoundResult {
            round: self.round,
            pot,
            winners,
            seats,
        })
    }

    /// Removes the players who cannot pay the ante and returns them.
    pub fn remove_with_no_chips(&mut self) -> Vec<Player> {
        let ante = self.config.ante;
        let (players, removed): (Vec<_>, Vec<_>) = std::mem::take(&mut self.players)
            .into_iter()
            .partition(|p| p.can_pay(ante));

        self.players = players;

        for player in &removed {
            info!("Player {} left with {} chips", player.nickname(), player.chips());
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    const JOIN_CHIPS: Chips = Chips::new(100);

    fn new_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(format!("player{i}"), JOIN_CHIPS))
            .collect()
    }

    // Creates a `Table` with seeded randomness.
    fn new_table(n: usize) -> Table {
        let rng = StdRng::seed_from_u64(13);
        Table::with_rng(Config::default(), new_players(n), rng).unwrap()
    }

    fn total_chips(table: &Table) -> Chips {
        table.players().map(|p| p.chips()).sum()
    }

    #[test]
    fn seats() {
        let rng = || StdRng::seed_from_u64(1);

        let res = Table::with_rng(Config::default(), new_players(1), rng());
        assert_eq!(res.err(), Some(TableError::NotEnoughPlayers(1)));

        let res = Table::with_rng(Config::default(), new_players(11), rng());
        assert_eq!(
            res.err(),
            Some(TableError::TooManyPlayers { count: 11, max: 10 })
        );

        let config = Config {
            max_players: 3,
            ..Config::default()
        };
        let res = Table::with_rng(config, new_players(4), rng());
        assert_eq!(
            res.err(),
            Some(TableError::TooManyPlayers { count: 4, max: 3 })
        );

        assert!(Table::with_rng(Config::default(), new_players(10), rng()).is_ok());
    }

    #[test]
    fn start_round_collects_ante() {
        let mut table = new_table(3);
        table.start_round().unwrap();

        assert_eq!(table.pot(), Chips::new(30));
        assert!(table.players().all(|p| p.chips() == Chips::new(90)));
        assert_eq!(table.cards_left(), Deck::SIZE);
    }

    #[test]
    fn start_round_ante_not_paid() {
        let mut players = new_players(2);
        players.push(Player::new("short", Chips::new(5)));

        let rng = StdRng::seed_from_u64(1);
        let mut table = Table::with_rng(Config::default(), players, rng).unwrap();

        assert_eq!(
            table.start_round(),
            Err(TableError::NotEnoughChips {
                nickname: "short".to_string(),
                chips: Chips::new(5),
                needed: Chips::new(10),
            })
        );

        // Nobody paid.
        assert_eq!(table.pot(), Chips::ZERO);
        assert_eq!(total_chips(&table), Chips::new(205));

        let removed = table.remove_with_no_chips();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].nickname(), "short");
        assert_eq!(table.players().count(), 2);
        assert!(table.start_round().is_ok());
    }

    #[test]
    fn deal_cards() {
        let mut table = new_table(10);
        table.start_round().unwrap();
        table.deal_cards().unwrap();

        let mut cards = HashSet::default();
        for player in table.players() {
            assert_eq!(player.cards().len(), 5);
            cards.extend(player.cards().iter().copied());
        }

        assert_eq!(cards.len(), 50);
        assert_eq!(table.cards_left(), 2);

        // Hands are dealt once per round.
        assert_eq!(table.deal_cards(), Err(TableError::CardsAlreadyDealt));
        assert!(table.players().all(|p| p.cards().len() == 5));
        assert_eq!(table.cards_left(), 2);
        assert!(table.showdown().is_ok());
    }

    #[test]
    fn deal_cards_short_deck() {
        let mut table = new_table(2);
        table.start_round().unwrap();

        // Leave 7 cards, 10 are needed.
        for _ in 0..45 {
            table.deck.deal().unwrap();
        }

        assert_eq!(table.deal_cards(), Err(TableError::DeckExhausted));
        assert!(table.players().all(|p| p.cards().is_empty()));
        assert_eq!(table.cards_left(), 7);
    }

    #[test]
    fn start_round_twice() {
        let mut table = new_table(3);
        table.start_round().unwrap();
        table.bet(0, Chips::new(20)).unwrap();
        assert_eq!(total_chips(&table) + table.pot(), Chips::new(300));

        assert_eq!(table.start_round(), Err(TableError::RoundInProgress));
        assert_eq!(table.pot(), Chips::new(50));
        assert_eq!(total_chips(&table) + table.pot(), Chips::new(300));

        table.deal_cards().unwrap();
        let winners = table.showdown().unwrap();
        table.distribute_pot(&winners).unwrap();
        assert_eq!(total_chips(&table), Chips::new(300));

        // The pot has been paid, a new round can start.
        assert!(table.start_round().is_ok());
    }

    #[test]
    fn bets_and_odd_chips() {
        let mut table = new_table(3);
        table.start_round().unwrap();
        table.bet(0, Chips::new(1)).unwrap();
        assert_eq!(table.pot(), Chips::new(31));

        assert_eq!(
            table.bet(3, Chips::new(1)),
            Err(TableError::InvalidSeat(3))
        );
        assert!(table.bet(1, Chips::new(1_000)).is_err());

        let payoffs = table.distribute_pot(&[2, 0]).unwrap();
        assert_eq!(payoffs, vec![Chips::new(16), Chips::ZERO, Chips::new(15)]);

        let chips = table.players().map(|p| p.chips()).collect::<Vec<_>>();
        assert_eq!(chips, vec![Chips::new(105), Chips::new(90), Chips::new(105)]);
        assert_eq!(table.pot(), Chips::ZERO);
        assert_eq!(total_chips(&table), Chips::new(300));
    }

    #[test]
    fn distribute_pot_invalid_winners() {
        let mut table = new_table(2);
        table.start_round().unwrap();

        assert_eq!(
            table.distribute_pot(&[5]),
            Err(TableError::InvalidSeat(5))
        );
        assert_eq!(
            table.distribute_pot(&[]),
            Err(TableError::Eval(fivecard_eval::Error::EmptyInput))
        );

        // The pot is still there.
        assert_eq!(table.pot(), Chips::new(20));
    }

    #[test]
    fn play_rounds() {
        let mut table = new_table(4);

        for round in 1..=5 {
            let res = table.play_round().unwrap();
            assert_eq!(res.round, round);
            assert_eq!(res.pot, Chips::new(40));
            assert_eq!(res.seats.len(), 4);
            assert!(!res.winners.is_empty());

            let best = res.seats.iter().map(|s| s.category).max().unwrap();
            for &seat in &res.winners {
                assert_eq!(res.seats[seat].category, best);
                assert!(res.seats[seat].payoff >= Chips::new(10));
            }

            let paid = res.seats.iter().map(|s| s.payoff).sum::<Chips>();
            assert_eq!(paid, res.pot);
            assert_eq!(total_chips(&table), Chips::new(400));
        }
    }

    #[test]
    fn seeded_rounds_replay() {
        let mut t1 = new_table(5);
        let mut t2 = new_table(5);

        for _ in 0..3 {
            let r1 = t1.play_round().unwrap();
            let r2 = t2.play_round().unwrap();
            assert_eq!(r1.winners, r2.winners);

            let h1 = r1.seats.iter().map(|s| s.hand).collect::<Vec<_>>();
            let h2 = r2.seats.iter().map(|s| s.hand).collect::<Vec<_>>();
            assert_eq!(h1, h2);
        }
    }
}
