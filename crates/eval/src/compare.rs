// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie-break stages for hands of the same category.
//!
//! Each stage takes the contenders still in the running, computes a key for
//! each of them, and keeps every contender with the maximum key. A stage never
//! drops all the contenders and keeps them in input order.
use ahash::AHashSet;

use fivecard_cards::Rank;

use crate::{Error, HandCategory, HandParts, Result};

/// A player hand taking part in a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contender<I> {
    /// The player identifier.
    pub id: I,
    /// The player hand parts.
    pub parts: HandParts,
}

impl<I> Contender<I> {
    /// Creates a contender.
    pub fn new(id: I, parts: HandParts) -> Self {
        Self { id, parts }
    }
}

/// Compares the group that defines the category.
///
/// A set of royal flushes is always a tie and is returned as is. For three of
/// a kind, full house and four of a kind two contenders with the same group
/// rank cannot come from a single deck and fail with
/// [Error::DuplicateGroupRank].
pub fn compare_main_part<I>(
    contenders: Vec<Contender<I>>,
    category: HandCategory,
) -> Result<Vec<Contender<I>>> {
    check_category(&contenders, category)?;

    if category == HandCategory::RoyalFlush {
        return Ok(contenders);
    }

    if category.has_unique_main_part() {
        let mut seen = AHashSet::with_capacity(contenders.len());
        for c in &contenders {
            let rank = c.parts.main_rank();
            if !seen.insert(rank) {
                return Err(Error::DuplicateGroupRank { category, rank });
            }
        }
    }

    Ok(retain_max(contenders, |c| c.parts.main_rank()))
}

/// Compares the lower pair of two pair hands.
pub fn compare_sub_main_part<I>(contenders: Vec<Contender<I>>) -> Result<Vec<Contender<I>>> {
    check_category(&contenders, HandCategory::TwoPair)?;
    Ok(retain_max(contenders, |c| c.parts.sub_rank()))
}

/// Compares kickers from the highest down, stopping as soon as a single
/// contender is left.
///
/// Contenders still tied after the last kicker are a draw.
pub fn compare_kickers<I>(
    mut contenders: Vec<Contender<I>>,
    category: HandCategory,
) -> Result<Vec<Contender<I>>> {
    check_category(&contenders, category)?;

    let num_kickers = contenders
        .first()
        .map(|c| c.parts.kickers().len())
        .unwrap_or_default();

    for pos in (0..num_kickers).rev() {
        if contenders.len() < 2 {
            break;
        }

        contenders = retain_max(contenders, |c| kicker_rank(&c.parts, pos));
    }

    Ok(contenders)
}

/// The kicker stage as routed by older releases.
///
/// Only two pair hands get their kicker compared, every other category goes
/// through the one pair main part stage again. This cannot break a one pair
/// kicker tie and fails with [Error::CategoryMismatch] for any category other
/// than one pair.
pub fn compare_kickers_legacy<I>(
    contenders: Vec<Contender<I>>,
    category: HandCategory,
) -> Result<Vec<Contender<I>>> {
    match category {
        HandCategory::TwoPair => compare_kickers(contenders, category),
        _ => compare_main_part(contenders, HandCategory::OnePair),
    }
}

fn kicker_rank(parts: &HandParts, pos: usize) -> Option<Rank> {
    parts.kickers().get(pos).map(|c| c.rank())
}

fn check_category<I>(contenders: &[Contender<I>], category: HandCategory) -> Result<()> {
    for c in contenders {
        let actual = c.parts.category();
        if actual != category {
            return Err(Error::CategoryMismatch {
                expected: category,
                actual,
            });
        }
    }

    Ok(())
}

/// Keeps all the contenders with the maximum key.
fn retain_max<I, K, F>(contenders: Vec<Contender<I>>, key: F) -> Vec<Contender<I>>
where
    K: Ord,
    F: Fn(&Contender<I>) -> K,
{
    let Some(max) = contenders.iter().map(&key).max() else {
        return contenders;
    };

    contenders.into_iter().filter(|c| key(c) == max).collect()
}
