// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use fivecard_cards::Rank;
use thiserror::Error;

use crate::HandCategory;

/// Errors returned by classification, extraction and winners resolution.
///
/// None of these are transient, evaluating the same input again always fails
/// the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hand doesn't have exactly 5 cards.
    #[error("a hand must have 5 cards, got {0}")]
    WrongCardCount(usize),
    /// A hand was split as a category it doesn't hold.
    #[error("expected a {expected} hand, got {actual}")]
    CategoryMismatch {
        /// The category requested by the caller.
        expected: HandCategory,
        /// The hand category.
        actual: HandCategory,
    },
    /// Two players hold a group of the same rank that a single deck can only
    /// deal once.
    #[error("{category} of rank {rank} held by more than one player")]
    DuplicateGroupRank {
        /// The shared category.
        category: HandCategory,
        /// The duplicated group rank.
        rank: Rank,
    },
    /// There are no players to resolve.
    #[error("no players in showdown")]
    EmptyInput,
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;
