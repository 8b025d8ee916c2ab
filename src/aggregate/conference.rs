// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Conference Aggregate
//!
//! Implements the event sourcing pattern with pure functions:
//! - Immutable state
//! - Pure event application (fold)
//! - No side effects, no mutations
//!
//! # Architecture
//!
//! ```text
//! Command → handle_command() → Vec<ConferenceEvent>
//!                                    ↓
//! Events → apply_event() → New State
//! ```
//!
//! The aggregate's state is never stored; it is always derived by folding
//! the full committed history through [`apply_event`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Abstract, ConferenceId, Organizer, Voting};
use crate::events::ConferenceEvent;

/// Call-for-papers phase gate
///
/// Controls whether abstracts may be proposed. Transitions are externally
/// driven facts (`CallForPapersOpened`/`CallForPapersClosed` events).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallForPapers {
    /// Call for papers has not been opened yet
    NotOpened,

    /// Abstracts may be proposed
    Open,

    /// Call for papers has closed; voting may conclude
    Closed,
}

/// Voting period phase gate
///
/// Controls whether votes may be cast or revoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VotingPeriod {
    /// Votes may be cast and revoked
    InProgress,

    /// Voting has concluded; abstracts have been scored
    Finished,
}

/// Immutable Conference State
///
/// The aggregate root state reconstructed from events. All fields are
/// public for read access, but handlers never mutate a projected snapshot;
/// they only propose new events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceState {
    /// Aggregate identity, assigned once at scheduling
    pub id: ConferenceId,

    /// Conference title
    pub title: String,

    /// Number of talk slots available for acceptance
    pub available_slots_for_talks: u32,

    /// Call-for-papers phase
    pub call_for_papers: CallForPapers,

    /// Voting period phase
    pub voting_period: VotingPeriod,

    /// Current programme committee (set semantics by organizer id)
    pub organizers: Vec<Organizer>,

    /// Proposed abstracts, in proposal order
    pub abstracts: Vec<Abstract>,

    /// Active votings (issued and not yet revoked), in issue order
    pub votings: Vec<Voting>,

    /// Whether a `ConferenceScheduled` event has been applied
    pub scheduled: bool,
}

impl ConferenceState {
    /// Create the empty state that event folding starts from
    pub fn empty() -> Self {
        Self {
            id: ConferenceId::from_uuid(Uuid::nil()),
            title: String::new(),
            available_slots_for_talks: 0,
            call_for_papers: CallForPapers::NotOpened,
            voting_period: VotingPeriod::InProgress,
            organizers: Vec::new(),
            abstracts: Vec::new(),
            votings: Vec::new(),
            scheduled: false,
        }
    }

    /// Reconstruct state from an ordered event history
    ///
    /// This is the core event sourcing fold:
    /// ```text
    /// State = fold(Events, EmptyState, apply_event)
    /// ```
    ///
    /// Total for any well-formed history, including histories ending after
    /// a `DomainError` event.
    pub fn from_events(events: &[ConferenceEvent]) -> Self {
        events
            .iter()
            .fold(Self::empty(), |state, event| apply_event(state, event))
    }

    /// Whether the aggregate exists (scheduling event applied)
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

impl Default for ConferenceState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Apply one event to the state (pure function)
///
/// # Invariants
/// - Pure: same event + same state = same result
/// - Never fails: events are facts that happened
/// - `DomainError`, `AbstractWasAccepted`, and `AbstractWasRejected` carry
///   no state change; they are audit facts, not mutations
pub fn apply_event(state: ConferenceState, event: &ConferenceEvent) -> ConferenceState {
    use ConferenceEvent::*;

    match event {
        ConferenceScheduled(descriptor) => ConferenceState {
            id: descriptor.id,
            title: descriptor.title.clone(),
            available_slots_for_talks: descriptor.available_slots_for_talks,
            scheduled: true,
            ..state
        },

        TitleChanged(title) => ConferenceState {
            title: title.clone(),
            ..state
        },

        NumberOfSlotsDecided(slots) => ConferenceState {
            available_slots_for_talks: *slots,
            ..state
        },

        CallForPapersOpened => ConferenceState {
            call_for_papers: CallForPapers::Open,
            ..state
        },

        CallForPapersClosed => ConferenceState {
            call_for_papers: CallForPapers::Closed,
            ..state
        },

        OrganizerAddedToConference(organizer) => {
            let mut organizers = state.organizers.clone();
            if !organizers.iter().any(|o| o.id == organizer.id) {
                organizers.push(organizer.clone());
            }
            ConferenceState { organizers, ..state }
        }

        OrganizerRemovedFromConference(organizer) => {
            let organizers: Vec<_> = state
                .organizers
                .iter()
                .filter(|o| o.id != organizer.id)
                .cloned()
                .collect();
            ConferenceState { organizers, ..state }
        }

        AbstractWasProposed(proposal) => {
            let mut abstracts = state.abstracts.clone();
            abstracts.push(proposal.clone());
            ConferenceState { abstracts, ..state }
        }

        VotingWasIssued(voting) => {
            let mut votings = state.votings.clone();
            votings.push(voting.clone());
            ConferenceState { votings, ..state }
        }

        VotingWasRevoked(voting) => {
            // Remove only the first matching entry; a compensating event
            // cancels exactly one issued voting.
            let mut votings = state.votings.clone();
            if let Some(pos) = votings.iter().position(|v| v == voting) {
                votings.remove(pos);
            }
            ConferenceState { votings, ..state }
        }

        VotingPeriodWasFinished => ConferenceState {
            voting_period: VotingPeriod::Finished,
            ..state
        },

        VotingPeriodWasReopened => ConferenceState {
            voting_period: VotingPeriod::InProgress,
            ..state
        },

        // Scoring outcomes and rejections never change folded state
        AbstractWasAccepted(_) | AbstractWasRejected(_) | DomainError(_) => state,
    }
}
