// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Command Handling
//!
//! Verifies the handler contract over arbitrary histories and commands:
//! schedule-once, non-organizer rejection, scoring bounds, revocation on
//! removal, and the error/success mutual-exclusion rule.

use proptest::prelude::*;

use conference_engine::aggregate::{handle_command, ConferenceCommand, ConferenceState};
use conference_engine::domain::invariants::active_votes_of;
use conference_engine::domain::{OrganizerId, Voting};
use conference_engine::events::{ConferenceDescriptor, ConferenceEvent, RejectionReason};

use crate::property::projection::{
    abstract_id, event_history, organizer, organizer_id, points, talk, voting,
};

fn command() -> impl Strategy<Value = ConferenceCommand> {
    prop_oneof![
        Just(ConferenceCommand::ScheduleConference(
            ConferenceDescriptor::new("Conf", 2)
        )),
        "[a-z]{1,12}".prop_map(ConferenceCommand::ChangeTitle),
        (0u32..10).prop_map(ConferenceCommand::DecideNumberOfSlots),
        (0u8..4).prop_map(|i| ConferenceCommand::AddOrganizerToConference(organizer(i))),
        (0u8..4).prop_map(|i| ConferenceCommand::RemoveOrganizerFromConference(organizer(i))),
        (0u8..6).prop_map(|i| ConferenceCommand::ProposeAbstract(talk(i))),
        Just(ConferenceCommand::FinishVotingPeriod),
        Just(ConferenceCommand::ReopenVotingPeriod),
        voting().prop_map(ConferenceCommand::Vote),
        voting().prop_map(ConferenceCommand::RevokeVoting),
    ]
}

proptest! {
    /// Scheduling against any non-empty history is rejected and, once the
    /// rejection is appended, folds to the same state as before.
    #[test]
    fn prop_schedule_only_on_empty_history(mut history in event_history()) {
        prop_assume!(!history.is_empty());
        let before = ConferenceState::from_events(&history);

        let events = handle_command(
            &history,
            ConferenceCommand::ScheduleConference(ConferenceDescriptor::new("Again", 1)),
        );
        prop_assert_eq!(
            &events,
            &vec![ConferenceEvent::DomainError(
                RejectionReason::ConferenceAlreadyScheduled
            )]
        );

        history.extend(events);
        prop_assert_eq!(ConferenceState::from_events(&history), before);
    }

    /// A voter outside the committee is always rejected, whatever the
    /// history (and therefore whatever the voting period) looks like.
    #[test]
    fn prop_non_organizer_vote_always_rejected(
        history in event_history(),
        a in 0u8..6,
        p in points(),
    ) {
        // An id from outside the generator's organizer pool
        let outsider = OrganizerId::new();
        let events = handle_command(
            &history,
            ConferenceCommand::Vote(Voting::new(outsider, abstract_id(a), p)),
        );

        prop_assert_eq!(events.len(), 1);
        prop_assert!(events[0].is_domain_error());
        prop_assert!(!ConferenceState::from_events(&history)
            .votings
            .iter()
            .any(|v| v.voter == outsider));
    }

    /// Whenever finishing succeeds, the number of accepted abstracts never
    /// exceeds the available slots and no accepted abstract carries a veto.
    #[test]
    fn prop_scoring_respects_slots_and_vetoes(history in event_history()) {
        let state = ConferenceState::from_events(&history);
        let events = handle_command(&history, ConferenceCommand::FinishVotingPeriod);

        if events[0] == ConferenceEvent::VotingPeriodWasFinished {
            let accepted: Vec<_> = events
                .iter()
                .filter_map(|e| match e {
                    ConferenceEvent::AbstractWasAccepted(id) => Some(*id),
                    _ => None,
                })
                .collect();

            prop_assert!(accepted.len() as u32 <= state.available_slots_for_talks);
            for id in &accepted {
                prop_assert!(!state
                    .votings
                    .iter()
                    .any(|v| v.abstract_id == *id && v.points.is_veto()));
            }
        } else {
            prop_assert_eq!(events.len(), 1);
            prop_assert!(events[0].is_domain_error());
        }
    }

    /// Removing a present organizer yields the removal event followed by
    /// exactly one revocation per active vote of that organizer.
    #[test]
    fn prop_removal_revokes_exactly_active_votes(history in event_history(), i in 0u8..4) {
        let state = ConferenceState::from_events(&history);
        let target = organizer(i);
        let active = active_votes_of(&state.votings, organizer_id(i));

        let events = handle_command(
            &history,
            ConferenceCommand::RemoveOrganizerFromConference(target.clone()),
        );

        if state.organizers.iter().any(|o| o.id == target.id) {
            prop_assert_eq!(events.len(), 1 + active.len());
            prop_assert_eq!(
                &events[0],
                &ConferenceEvent::OrganizerRemovedFromConference(target)
            );
            for (event, voting) in events[1..].iter().zip(active) {
                prop_assert_eq!(event, &ConferenceEvent::VotingWasRevoked(voting));
            }
        } else {
            prop_assert_eq!(
                events,
                vec![ConferenceEvent::DomainError(
                    RejectionReason::OrganizerWasNotAddedToConference(target)
                )]
            );
        }
    }

    /// A handler returns either one domain-error event or a non-empty list
    /// of success events, never a mix.
    #[test]
    fn prop_error_and_success_never_mix(history in event_history(), cmd in command()) {
        let events = handle_command(&history, cmd);

        prop_assert!(!events.is_empty());
        let errors = events.iter().filter(|e| e.is_domain_error()).count();
        if errors > 0 {
            prop_assert_eq!(events.len(), 1);
        }
    }
}
