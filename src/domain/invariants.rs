// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Guard Predicates - Conference Domain Invariants
//!
//! Boolean predicates over folded aggregate state, used by the command
//! handlers to decide success versus domain-error events. All functions
//! are pure and take only the slices they inspect, so they are trivially
//! testable without building a full aggregate.

use crate::domain::abstracts::Abstract;
use crate::domain::ids::{AbstractId, OrganizerId};
use crate::domain::organizer::Organizer;
use crate::domain::voting::Voting;

/// Whether an organizer with this id is currently part of the conference
pub fn organizer_present(organizers: &[Organizer], id: OrganizerId) -> bool {
    organizers.iter().any(|o| o.id == id)
}

/// Whether this exact voting (voter, abstract, points) is currently active
///
/// Active means issued and not yet revoked; the projector removes revoked
/// votings from the aggregate's list, so membership is the whole check.
pub fn voting_issued(votings: &[Voting], voting: &Voting) -> bool {
    votings.contains(voting)
}

/// All active votes cast by one organizer, in issue order
pub fn active_votes_of(votings: &[Voting], voter: OrganizerId) -> Vec<Voting> {
    votings
        .iter()
        .filter(|v| v.voter == voter)
        .cloned()
        .collect()
}

/// Number of active votes on one abstract
pub fn votes_on(votings: &[Voting], abstract_id: AbstractId) -> usize {
    votings
        .iter()
        .filter(|v| v.abstract_id == abstract_id)
        .count()
}

/// Whether every proposed abstract carries exactly one vote per organizer
///
/// The finishing precondition: each abstract must have been voted on by
/// all organizers before the voting period can close.
pub fn all_abstracts_fully_voted(
    abstracts: &[Abstract],
    votings: &[Voting],
    organizer_count: usize,
) -> bool {
    abstracts
        .iter()
        .all(|a| votes_on(votings, a.id) == organizer_count)
}
