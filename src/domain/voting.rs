// Copyright (c) 2025 - Cowboy AI, Inc.
//! Voting Value Object
//!
//! A voting is a fact, not an entity: the triple (voter, abstract, points)
//! with structural equality. Issuing appends it to the aggregate's active
//! votings; revocation is a separate compensating event that removes the
//! first matching entry on fold.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ids::{AbstractId, OrganizerId};

/// Points an organizer can award to an abstract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Points {
    /// No points
    Zero,

    /// One point
    One,

    /// Two points
    Two,

    /// Unconditional disqualification from acceptance
    Veto,
}

impl Points {
    /// Numeric score contribution for the acceptance sum
    ///
    /// Vetoes contribute nothing here; they disqualify the abstract
    /// entirely before sums are compared.
    pub const fn score(self) -> u32 {
        match self {
            Points::Zero | Points::Veto => 0,
            Points::One => 1,
            Points::Two => 2,
        }
    }

    /// Whether this vote disqualifies the abstract outright
    pub const fn is_veto(self) -> bool {
        matches!(self, Points::Veto)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Points::Zero => write!(f, "0"),
            Points::One => write!(f, "1"),
            Points::Two => write!(f, "2"),
            Points::Veto => write!(f, "veto"),
        }
    }
}

/// A single organizer vote on a single abstract
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Voting {
    /// Organizer who cast the vote
    pub voter: OrganizerId,

    /// Abstract being voted on
    pub abstract_id: AbstractId,

    /// Awarded points
    pub points: Points,
}

impl Voting {
    /// Create a voting fact
    pub const fn new(voter: OrganizerId, abstract_id: AbstractId, points: Points) -> Self {
        Self {
            voter,
            abstract_id,
            points,
        }
    }
}

impl fmt::Display for Voting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} by {}",
            self.points, self.abstract_id, self.voter
        )
    }
}
