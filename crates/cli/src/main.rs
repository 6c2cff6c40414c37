// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivecard Poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};

use fivecard_cards::parse_cards;
use fivecard_eval::{Hand, KickerRouting, Resolver};
use fivecard_table::{Chips, Config, Player, Table};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Break ties left after the main part the way older releases did.
    #[clap(long, global = true)]
    legacy: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plays rounds at a table with shuffled decks.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// The chips each player starts with.
        #[clap(long, default_value_t = 1_000)]
        chips: u32,
        /// The ante paid by each player every round.
        #[clap(long, default_value_t = 10)]
        ante: u32,
        /// Number of rounds to play.
        #[clap(long, short, default_value_t = 1)]
        rounds: u32,
        /// Seed for the deck shuffles.
        #[clap(long, short)]
        seed: Option<u64>,
    },
    /// Finds the winners among the given hands, i.e. "AS KS QS JS TS".
    Showdown {
        /// The hands, five cards each.
        #[clap(required = true, num_args = 1..)]
        hands: Vec<String>,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let routing = if cli.legacy {
        KickerRouting::Legacy
    } else {
        KickerRouting::Generic
    };

    let res = match cli.command {
        Command::Deal {
            players,
            chips,
            ante,
            rounds,
            seed,
        } => deal(players as usize, chips, ante, rounds, seed, routing),
        Command::Showdown { hands } => showdown(&hands, routing),
    };

    if let Err(e) = res {
        error!("{e}");
        std::process::exit(1);
    }
}

fn deal(
    players: usize,
    chips: u32,
    ante: u32,
    rounds: u32,
    seed: Option<u64>,
    routing: KickerRouting,
) -> Result<()> {
    let config = Config {
        ante: Chips::new(ante),
        routing,
        ..Config::default()
    };

    let players = (1..=players)
        .map(|n| Player::new(format!("player{n}"), Chips::new(chips)))
        .collect();

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut table = Table::with_rng(config, players, rng)?;

    for _ in 0..rounds {
        let res = table.play_round()?;

        println!("Round {} pot {}", res.round, res.pot);
        for (seat, s) in res.seats.iter().enumerate() {
            let mark = if res.winners.contains(&seat) { "*" } else { " " };
            println!(
                "{mark} {:<10} {}  {:<16} +{}",
                s.nickname, s.hand, s.category, s.payoff
            );
        }

        table.remove_with_no_chips();
        if table.players().count() < 2 {
            info!("Not enough players left");
            break;
        }
    }

    println!();
    for p in table.players() {
        println!("{:<10} {}", p.nickname(), p.chips());
    }

    Ok(())
}

fn showdown(hands: &[String], routing: KickerRouting) -> Result<()> {
    let players = hands
        .iter()
        .map(|s| parse_cards(s).map(|cards| (s.as_str(), cards)))
        .collect::<Result<Vec<_>, _>>()?;

    for (s, cards) in &players {
        match Hand::new(cards) {
            Ok(hand) => println!("{s:<20} {}", hand.category()),
            Err(e) => bail!("{s}: {e}"),
        }
    }

    let winners = Resolver::new(routing).resolve(&players)?;
    println!("Winners: {}", winners.join(", "));

    Ok(())
}
