// Copyright (c) 2025 - Cowboy AI, Inc.
//! Conference Domain Events
//!
//! All state changes to a conference aggregate are represented as immutable
//! events. Events follow event sourcing practice:
//! - Immutable facts, past tense naming (VotingWasIssued, not IssueVoting)
//! - A closed sum type; projections and dispatch match exhaustively
//! - Serializable for persistence
//!
//! Rejected commands are part of the vocabulary too: a [`ConferenceEvent::DomainError`]
//! carries the [`RejectionReason`] and flows through the same append/broadcast
//! pipeline as success events, which keeps rejections auditable. Domain-error
//! events are no-ops under projection.
//!
//! The engine is agnostic to metadata envelopes; transaction ids, sequence
//! numbers, and timestamps belong to the event store (see
//! [`StoredEvent`](crate::event_store::StoredEvent)).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Abstract, AbstractId, ConferenceId, Organizer, Voting};

/// Descriptor carried by scheduling commands and events
///
/// The initial shape of a conference: identity is assigned here, once, and
/// never changes. Call-for-papers starts `NotOpened` and the voting period
/// starts `InProgress`; neither is part of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceDescriptor {
    /// Conference identity
    pub id: ConferenceId,

    /// Conference title
    pub title: String,

    /// Number of talk slots available for acceptance
    pub available_slots_for_talks: u32,
}

impl ConferenceDescriptor {
    /// Create a descriptor with a fresh conference id
    pub fn new(title: impl Into<String>, available_slots_for_talks: u32) -> Self {
        Self {
            id: ConferenceId::new(),
            title: title.into(),
            available_slots_for_talks,
        }
    }
}

/// Conference Domain Events
///
/// The closed set of facts that can appear in a conference's history.
/// `CallForPapersOpened`/`CallForPapersClosed` are externally driven phase
/// transitions: they appear in history and gate proposing/finishing, but no
/// command in this engine emits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ConferenceEvent {
    /// Conference was scheduled; first event of every history
    ConferenceScheduled(ConferenceDescriptor),

    /// Conference title was changed
    TitleChanged(String),

    /// Number of available talk slots was decided
    NumberOfSlotsDecided(u32),

    /// Call for papers was opened (externally driven)
    CallForPapersOpened,

    /// Call for papers was closed (externally driven)
    CallForPapersClosed,

    /// Organizer joined the programme committee
    OrganizerAddedToConference(Organizer),

    /// Organizer left the programme committee
    OrganizerRemovedFromConference(Organizer),

    /// Abstract was proposed while the call for papers was open
    AbstractWasProposed(Abstract),

    /// Organizer vote was issued
    VotingWasIssued(Voting),

    /// Previously issued vote was revoked
    VotingWasRevoked(Voting),

    /// Voting period concluded; scoring events follow
    VotingPeriodWasFinished,

    /// Finished voting period was reopened
    VotingPeriodWasReopened,

    /// Abstract was accepted by the scoring pass
    AbstractWasAccepted(AbstractId),

    /// Abstract was rejected by the scoring pass
    AbstractWasRejected(AbstractId),

    /// A command was rejected; carries the reason, changes no state
    DomainError(RejectionReason),
}

impl ConferenceEvent {
    /// Whether this event is a rejected-command record
    pub const fn is_domain_error(&self) -> bool {
        matches!(self, ConferenceEvent::DomainError(_))
    }

    /// Stable event type name, used by stores for envelope metadata
    pub const fn event_type(&self) -> &'static str {
        match self {
            ConferenceEvent::ConferenceScheduled(_) => "conference_scheduled",
            ConferenceEvent::TitleChanged(_) => "title_changed",
            ConferenceEvent::NumberOfSlotsDecided(_) => "number_of_slots_decided",
            ConferenceEvent::CallForPapersOpened => "call_for_papers_opened",
            ConferenceEvent::CallForPapersClosed => "call_for_papers_closed",
            ConferenceEvent::OrganizerAddedToConference(_) => "organizer_added_to_conference",
            ConferenceEvent::OrganizerRemovedFromConference(_) => {
                "organizer_removed_from_conference"
            }
            ConferenceEvent::AbstractWasProposed(_) => "abstract_was_proposed",
            ConferenceEvent::VotingWasIssued(_) => "voting_was_issued",
            ConferenceEvent::VotingWasRevoked(_) => "voting_was_revoked",
            ConferenceEvent::VotingPeriodWasFinished => "voting_period_was_finished",
            ConferenceEvent::VotingPeriodWasReopened => "voting_period_was_reopened",
            ConferenceEvent::AbstractWasAccepted(_) => "abstract_was_accepted",
            ConferenceEvent::AbstractWasRejected(_) => "abstract_was_rejected",
            ConferenceEvent::DomainError(_) => "domain_error",
        }
    }
}

/// Reason a command was rejected
///
/// Modeled as data inside the event vocabulary rather than as a thrown
/// fault, so rejections persist and replay like any other fact.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RejectionReason {
    /// Scheduling was attempted on a non-empty history
    #[error("Conference already scheduled")]
    ConferenceAlreadyScheduled,

    /// Abstract proposal rejected (call for papers not open)
    #[error("Proposing denied: {0}")]
    ProposingDenied(String),

    /// Finishing or reopening the voting period rejected
    #[error("Finishing denied: {0}")]
    FinishingDenied(String),

    /// Vote rejected
    #[error("Voting denied: {0}")]
    VotingDenied(String),

    /// Revocation of a vote rejected
    #[error("Revocation of voting {voting} denied: {reason}")]
    RevocationOfVotingWasDenied {
        /// The voting whose revocation was attempted
        voting: Voting,
        /// Why the revocation was refused
        reason: String,
    },

    /// Organizer is already part of the conference
    #[error("Organizer {0} already added to conference")]
    OrganizerAlreadyAddedToConference(Organizer),

    /// Organizer is not part of the conference
    #[error("Organizer {0} was not added to conference")]
    OrganizerWasNotAddedToConference(Organizer),
}
