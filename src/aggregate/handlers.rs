// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Command Handlers for the Conference Aggregate
//!
//! Each handler is a pure function over `(history, payload)`:
//! 1. Re-derive current state by folding the history
//! 2. Apply validation guards
//! 3. Return success events, or exactly one `DomainError` event — never both
//!
//! Returning rejections as events lets the append-to-store caller treat
//! every handler result uniformly as "what happened", including refusals,
//! which keeps an audit trail.
//!
//! # Handler Pattern
//!
//! ```text
//! handle_command(&history, Command) → Vec<ConferenceEvent>
//! ```
//!
//! All handlers are deterministic and side-effect free; the only
//! allocation is the output event list.

use tracing::debug;

use crate::aggregate::commands::ConferenceCommand;
use crate::aggregate::conference::{CallForPapers, ConferenceState, VotingPeriod};
use crate::aggregate::scoring::score_abstracts;
use crate::domain::invariants::{
    active_votes_of, all_abstracts_fully_voted, organizer_present, voting_issued,
};
use crate::domain::{Abstract, Organizer, Voting};
use crate::events::{ConferenceDescriptor, ConferenceEvent, RejectionReason};

fn reject(reason: RejectionReason) -> Vec<ConferenceEvent> {
    vec![ConferenceEvent::DomainError(reason)]
}

/// Handle ScheduleConference
///
/// # Business Rules
/// - History must be empty: identity is assigned once and never changes
pub fn handle_schedule_conference(
    history: &[ConferenceEvent],
    descriptor: ConferenceDescriptor,
) -> Vec<ConferenceEvent> {
    if !history.is_empty() {
        return reject(RejectionReason::ConferenceAlreadyScheduled);
    }

    vec![ConferenceEvent::ConferenceScheduled(descriptor)]
}

/// Handle ChangeTitle
///
/// Always allowed on an existing aggregate.
pub fn handle_change_title(_history: &[ConferenceEvent], title: String) -> Vec<ConferenceEvent> {
    vec![ConferenceEvent::TitleChanged(title)]
}

/// Handle DecideNumberOfSlots
///
/// Always allowed; the new bound only matters at scoring time.
pub fn handle_decide_number_of_slots(
    _history: &[ConferenceEvent],
    slots: u32,
) -> Vec<ConferenceEvent> {
    vec![ConferenceEvent::NumberOfSlotsDecided(slots)]
}

/// Handle AddOrganizerToConference
///
/// # Business Rules
/// - Organizer must not already be part of the conference
pub fn handle_add_organizer(
    history: &[ConferenceEvent],
    organizer: Organizer,
) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if organizer_present(&state.organizers, organizer.id) {
        return reject(RejectionReason::OrganizerAlreadyAddedToConference(organizer));
    }

    vec![ConferenceEvent::OrganizerAddedToConference(organizer)]
}

/// Handle RemoveOrganizerFromConference
///
/// # Business Rules
/// - Organizer must currently be part of the conference
///
/// Removal also revokes every active vote that organizer has cast: the
/// removal event first, then one `VotingWasRevoked` per vote in issue order.
pub fn handle_remove_organizer(
    history: &[ConferenceEvent],
    organizer: Organizer,
) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if !organizer_present(&state.organizers, organizer.id) {
        return reject(RejectionReason::OrganizerWasNotAddedToConference(organizer));
    }

    let revocations = active_votes_of(&state.votings, organizer.id);
    let mut events = vec![ConferenceEvent::OrganizerRemovedFromConference(organizer)];
    events.extend(revocations.into_iter().map(ConferenceEvent::VotingWasRevoked));
    events
}

/// Handle ProposeAbstract
///
/// # Business Rules
/// - Call for papers must be open
pub fn handle_propose_abstract(
    history: &[ConferenceEvent],
    proposal: Abstract,
) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    match state.call_for_papers {
        CallForPapers::Open => vec![ConferenceEvent::AbstractWasProposed(proposal)],
        CallForPapers::NotOpened => reject(RejectionReason::ProposingDenied(
            "Call For Papers Not Opened".to_string(),
        )),
        CallForPapers::Closed => reject(RejectionReason::ProposingDenied(
            "Call For Papers Closed".to_string(),
        )),
    }
}

/// Handle Vote
///
/// # Business Rules
/// - Voter must be a current organizer, whatever the voting period
/// - Voting period must be in progress
pub fn handle_vote(history: &[ConferenceEvent], voting: Voting) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if !organizer_present(&state.organizers, voting.voter) {
        return reject(RejectionReason::VotingDenied(
            "Voter Is Not An Organizer".to_string(),
        ));
    }

    if state.voting_period == VotingPeriod::Finished {
        return reject(RejectionReason::VotingDenied(
            "Voting Period Already Finished".to_string(),
        ));
    }

    vec![ConferenceEvent::VotingWasIssued(voting)]
}

/// Handle RevokeVoting
///
/// # Business Rules
/// - Voting period must be in progress
/// - The exact voting must have been issued and not yet revoked
pub fn handle_revoke_voting(history: &[ConferenceEvent], voting: Voting) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if state.voting_period == VotingPeriod::Finished {
        return reject(RejectionReason::RevocationOfVotingWasDenied {
            voting,
            reason: "Voting Period Already Finished".to_string(),
        });
    }

    if !voting_issued(&state.votings, &voting) {
        return reject(RejectionReason::RevocationOfVotingWasDenied {
            voting,
            reason: "Voting Not Issued".to_string(),
        });
    }

    vec![ConferenceEvent::VotingWasRevoked(voting)]
}

/// Handle FinishVotingPeriod
///
/// # Business Rules
/// - Call for papers must be closed
/// - Voting period must still be in progress
/// - Every proposed abstract must carry exactly one vote per organizer
///
/// On success, emits `VotingPeriodWasFinished` followed by the scoring
/// events (accepted talks in ranking order, then rejected talks in
/// proposal order).
pub fn handle_finish_voting_period(history: &[ConferenceEvent]) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if state.call_for_papers != CallForPapers::Closed {
        return reject(RejectionReason::FinishingDenied(
            "Call For Papers Not Closed".to_string(),
        ));
    }

    if state.voting_period == VotingPeriod::Finished {
        return reject(RejectionReason::FinishingDenied(
            "Voting Period Already Finished".to_string(),
        ));
    }

    if !all_abstracts_fully_voted(&state.abstracts, &state.votings, state.organizers.len()) {
        return reject(RejectionReason::FinishingDenied(
            "Not all abstracts have been voted for by all organisers".to_string(),
        ));
    }

    let mut events = vec![ConferenceEvent::VotingPeriodWasFinished];
    events.extend(score_abstracts(&state));
    events
}

/// Handle ReopenVotingPeriod
///
/// # Business Rules
/// - Call for papers must be closed
/// - Voting period must be finished
pub fn handle_reopen_voting_period(history: &[ConferenceEvent]) -> Vec<ConferenceEvent> {
    let state = ConferenceState::from_events(history);

    if state.call_for_papers != CallForPapers::Closed {
        return reject(RejectionReason::FinishingDenied(
            "Call For Papers Not Closed".to_string(),
        ));
    }

    if state.voting_period == VotingPeriod::InProgress {
        return reject(RejectionReason::FinishingDenied(
            "Voting Period Is Not Finished".to_string(),
        ));
    }

    vec![ConferenceEvent::VotingPeriodWasReopened]
}

/// Dispatch a command to its handler
///
/// Stateless, exhaustive over the closed command sum type; no command
/// falls through silently. The returned event list is ready for the
/// caller to append to the store and broadcast.
pub fn handle_command(
    history: &[ConferenceEvent],
    command: ConferenceCommand,
) -> Vec<ConferenceEvent> {
    debug!(command = command.kind(), history_len = history.len(), "dispatching command");

    match command {
        ConferenceCommand::ScheduleConference(descriptor) => {
            handle_schedule_conference(history, descriptor)
        }
        ConferenceCommand::ChangeTitle(title) => handle_change_title(history, title),
        ConferenceCommand::DecideNumberOfSlots(slots) => {
            handle_decide_number_of_slots(history, slots)
        }
        ConferenceCommand::AddOrganizerToConference(organizer) => {
            handle_add_organizer(history, organizer)
        }
        ConferenceCommand::RemoveOrganizerFromConference(organizer) => {
            handle_remove_organizer(history, organizer)
        }
        ConferenceCommand::ProposeAbstract(proposal) => {
            handle_propose_abstract(history, proposal)
        }
        ConferenceCommand::FinishVotingPeriod => handle_finish_voting_period(history),
        ConferenceCommand::ReopenVotingPeriod => handle_reopen_voting_period(history),
        ConferenceCommand::Vote(voting) => handle_vote(history, voting),
        ConferenceCommand::RevokeVoting(voting) => handle_revoke_voting(history, voting),
    }
}
