// Copyright (c) 2025 - Cowboy AI, Inc.
//! Abstract Acceptance Scoring
//!
//! Given folded conference state at the moment the voting period finishes,
//! decides which talks are accepted and which are rejected:
//!
//! 1. Only talks participate; other submission kinds are ignored.
//! 2. Any talk with at least one veto is excluded from the candidate pool.
//! 3. Remaining candidates are ranked by summed points (0/1/2), stable
//!    descending sort so ties keep proposal order.
//! 4. The first `available_slots_for_talks` candidates are accepted.
//! 5. Every other talk, vetoed ones included, is rejected in proposal order.
//!
//! The caller (`handle_finish_voting_period`) prepends
//! `VotingPeriodWasFinished`; this module only produces the
//! accepted-then-rejected tail.

use std::collections::HashSet;

use crate::aggregate::conference::ConferenceState;
use crate::domain::AbstractId;
use crate::events::ConferenceEvent;

/// Compute accept/reject events for all proposed talks
///
/// Output order: all `AbstractWasAccepted` events in ranking order, then
/// all `AbstractWasRejected` events in proposal order.
pub fn score_abstracts(state: &ConferenceState) -> Vec<ConferenceEvent> {
    let talks: Vec<_> = state.abstracts.iter().filter(|a| a.is_talk()).collect();

    let vetoed: HashSet<AbstractId> = state
        .votings
        .iter()
        .filter(|v| v.points.is_veto())
        .map(|v| v.abstract_id)
        .collect();

    // Candidates in proposal order, de-duplicated by id on first occurrence
    let mut seen = HashSet::new();
    let mut candidates: Vec<(AbstractId, u32)> = Vec::new();
    for talk in &talks {
        if vetoed.contains(&talk.id) || !seen.insert(talk.id) {
            continue;
        }
        let score = state
            .votings
            .iter()
            .filter(|v| v.abstract_id == talk.id && !v.points.is_veto())
            .map(|v| v.points.score())
            .sum();
        candidates.push((talk.id, score));
    }

    // Stable sort: ties keep proposal order
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let accepted: Vec<AbstractId> = candidates
        .iter()
        .take(state.available_slots_for_talks as usize)
        .map(|(id, _)| *id)
        .collect();
    let accepted_set: HashSet<AbstractId> = accepted.iter().copied().collect();

    let mut events: Vec<ConferenceEvent> = accepted
        .into_iter()
        .map(ConferenceEvent::AbstractWasAccepted)
        .collect();

    let mut rejected_seen = HashSet::new();
    for talk in &talks {
        if !accepted_set.contains(&talk.id) && rejected_seen.insert(talk.id) {
            events.push(ConferenceEvent::AbstractWasRejected(talk.id));
        }
    }

    events
}
