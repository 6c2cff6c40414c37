// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use log::debug;
use serde::{Deserialize, Serialize};

use fivecard_cards::Card;

use crate::{
    Contender, Error, Hand, HandCategory, Result,
    compare::{compare_kickers, compare_kickers_legacy, compare_main_part, compare_sub_main_part},
    extract,
};

/// How ties left after the main part stage are routed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KickerRouting {
    /// Compare the kickers of the shared category.
    #[default]
    Generic,
    /// Reproduce the kicker routing of older releases: only two pair hands
    /// compare kickers, other categories repeat the one pair main part stage.
    ///
    /// The main part stage is shared with [KickerRouting::Generic], so any
    /// repeated group rank fails with [Error::DuplicateGroupRank] where older
    /// releases only failed on a tie with the highest group.
    Legacy,
}

/// Resolves the winners of a showdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    routing: KickerRouting,
}

impl Resolver {
    /// Creates a resolver with the given kicker routing.
    pub fn new(routing: KickerRouting) -> Self {
        Self { routing }
    }

    /// The kicker routing used by this resolver.
    pub fn routing(&self) -> KickerRouting {
        self.routing
    }

    /// Returns the ids of the players with the best hand in input order, more
    /// than one id is a draw.
    ///
    /// Any invalid hand fails the whole showdown.
    pub fn resolve<I, C>(&self, players: &[(I, C)]) -> Result<Vec<I>>
    where
        I: Clone,
        C: AsRef<[Card]>,
    {
        if players.is_empty() {
            return Err(Error::EmptyInput);
        }

        let hands = players
            .iter()
            .map(|(id, cards)| Hand::new(cards.as_ref()).map(|hand| (id, hand)))
            .collect::<Result<Vec<_>>>()?;

        // Keep the players with the strongest category.
        let mut best = HandCategory::HighCard;
        let mut candidates = Vec::with_capacity(hands.len());
        for (id, hand) in hands {
            let category = hand.category();
            if category > best {
                best = category;
                candidates.clear();
                candidates.push((id, hand));
            } else if category == best {
                candidates.push((id, hand));
            }
        }

        debug!("{} players with {best}", candidates.len());

        if candidates.len() == 1 || best == HandCategory::RoyalFlush {
            return Ok(candidates.into_iter().map(|(id, _)| id.clone()).collect());
        }

        let contenders = candidates
            .into_iter()
            .map(|(id, hand)| extract(&hand, best).map(|parts| Contender::new(id, parts)))
            .collect::<Result<Vec<_>>>()?;

        let contenders = compare_main_part(contenders, best)?;
        debug!("{} players left after main part", contenders.len());

        let contenders = if contenders.len() == 1 {
            contenders
        } else if best == HandCategory::TwoPair {
            let contenders = compare_sub_main_part(contenders)?;
            debug!("{} players left after sub-main part", contenders.len());
            compare_kickers(contenders, best)?
        } else {
            match self.routing {
                KickerRouting::Generic => compare_kickers(contenders, best)?,
                KickerRouting::Legacy => compare_kickers_legacy(contenders, best)?,
            }
        };

        debug!("{} winners with {best}", contenders.len());
        Ok(contenders.into_iter().map(|c| c.id.clone()).collect())
    }
}

/// Resolves the winners of a showdown comparing kickers for every category.
///
/// See [Resolver::resolve].
pub fn resolve_winners<I, C>(players: &[(I, C)]) -> Result<Vec<I>>
where
    I: Clone,
    C: AsRef<[Card]>,
{
    Resolver::default().resolve(players)
}
