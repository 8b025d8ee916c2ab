// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Aggregate Projector
//!
//! Folding is a pure left-fold over the event history, so replay must be
//! deterministic and total for any well-formed event sequence, including
//! sequences ending in domain-error events.

use proptest::prelude::*;
use uuid::Uuid;

use conference_engine::aggregate::ConferenceState;
use conference_engine::domain::{
    Abstract, AbstractId, AbstractKind, Organizer, OrganizerId, Points, Voting,
};
use conference_engine::events::{ConferenceDescriptor, ConferenceEvent, RejectionReason};

// Small deterministic id pools so generated events can refer to each other
pub fn organizer_id(i: u8) -> OrganizerId {
    OrganizerId::from_uuid(Uuid::from_u128(0x0100 + u128::from(i)))
}

pub fn abstract_id(i: u8) -> AbstractId {
    AbstractId::from_uuid(Uuid::from_u128(0x0200 + u128::from(i)))
}

pub fn organizer(i: u8) -> Organizer {
    Organizer::with_id(organizer_id(i), format!("organizer-{i}"))
}

pub fn talk(i: u8) -> Abstract {
    Abstract::with_id(abstract_id(i), AbstractKind::Talk, format!("talk-{i}"))
}

pub fn points() -> impl Strategy<Value = Points> {
    prop_oneof![
        Just(Points::Zero),
        Just(Points::One),
        Just(Points::Two),
        Just(Points::Veto),
    ]
}

pub fn voting() -> impl Strategy<Value = Voting> {
    (0u8..4, 0u8..6, points())
        .prop_map(|(o, a, p)| Voting::new(organizer_id(o), abstract_id(a), p))
}

fn admin_event() -> impl Strategy<Value = ConferenceEvent> {
    prop_oneof![
        Just(ConferenceEvent::ConferenceScheduled(ConferenceDescriptor {
            id: conference_engine::domain::ConferenceId::from_uuid(Uuid::from_u128(1)),
            title: "Conf".to_string(),
            available_slots_for_talks: 2,
        })),
        "[a-z]{1,12}".prop_map(ConferenceEvent::TitleChanged),
        (0u32..10).prop_map(ConferenceEvent::NumberOfSlotsDecided),
        Just(ConferenceEvent::DomainError(
            RejectionReason::ConferenceAlreadyScheduled
        )),
    ]
}

fn phase_event() -> impl Strategy<Value = ConferenceEvent> {
    prop_oneof![
        Just(ConferenceEvent::CallForPapersOpened),
        Just(ConferenceEvent::CallForPapersClosed),
        Just(ConferenceEvent::VotingPeriodWasFinished),
        Just(ConferenceEvent::VotingPeriodWasReopened),
    ]
}

fn committee_event() -> impl Strategy<Value = ConferenceEvent> {
    prop_oneof![
        (0u8..4).prop_map(|i| ConferenceEvent::OrganizerAddedToConference(organizer(i))),
        (0u8..4).prop_map(|i| ConferenceEvent::OrganizerRemovedFromConference(organizer(i))),
    ]
}

fn submission_event() -> impl Strategy<Value = ConferenceEvent> {
    prop_oneof![
        (0u8..6).prop_map(|i| ConferenceEvent::AbstractWasProposed(talk(i))),
        voting().prop_map(ConferenceEvent::VotingWasIssued),
        voting().prop_map(ConferenceEvent::VotingWasRevoked),
        (0u8..6).prop_map(|i| ConferenceEvent::AbstractWasAccepted(abstract_id(i))),
        (0u8..6).prop_map(|i| ConferenceEvent::AbstractWasRejected(abstract_id(i))),
    ]
}

/// Any member of the closed event vocabulary
pub fn conference_event() -> impl Strategy<Value = ConferenceEvent> {
    prop_oneof![
        admin_event(),
        phase_event(),
        committee_event(),
        submission_event(),
    ]
}

pub fn event_history() -> impl Strategy<Value = Vec<ConferenceEvent>> {
    prop::collection::vec(conference_event(), 0..40)
}

proptest! {
    /// Replaying the same history twice yields identical state.
    #[test]
    fn prop_replay_is_deterministic(history in event_history()) {
        let first = ConferenceState::from_events(&history);
        let second = ConferenceState::from_events(&history);
        prop_assert_eq!(first, second);
    }

    /// Folding never panics, whatever the history shape, and appending a
    /// domain-error event never changes the folded state.
    #[test]
    fn prop_domain_errors_are_projection_noops(history in event_history()) {
        let before = ConferenceState::from_events(&history);

        let mut extended = history;
        extended.push(ConferenceEvent::DomainError(
            RejectionReason::ConferenceAlreadyScheduled,
        ));
        prop_assert_eq!(ConferenceState::from_events(&extended), before);
    }

    /// Fold is incremental: folding a prefix and applying the remaining
    /// events one at a time equals folding the whole history.
    #[test]
    fn prop_fold_composes(history in event_history(), split in 0usize..40) {
        let split = split.min(history.len());
        let (head, tail) = history.split_at(split);

        let mut state = ConferenceState::from_events(head);
        for event in tail {
            state = conference_engine::aggregate::apply_event(state, event);
        }
        prop_assert_eq!(state, ConferenceState::from_events(&history));
    }
}
