// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Commands for the Conference Aggregate
//!
//! Commands express user intent and can be rejected by business rules.
//! They differ from events:
//! - Commands express intent (what should happen)
//! - Events express facts (what did happen)
//! - A rejected command becomes a `DomainError` event, never an exception
//!
//! The sum type is closed: the dispatcher matches it exhaustively, so a
//! new command cannot be added without the compiler pointing at every
//! place that must learn about it.

use serde::{Deserialize, Serialize};

use crate::domain::{Abstract, Organizer, Voting};
use crate::events::ConferenceDescriptor;

/// Conference Commands
///
/// The closed set of intents a client may submit against one conference
/// aggregate. Note there is no command for opening or closing the call
/// for papers; those transitions arrive as externally driven events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ConferenceCommand {
    /// Schedule a new conference; only valid on an empty history
    ScheduleConference(ConferenceDescriptor),

    /// Change the conference title
    ChangeTitle(String),

    /// Decide the number of available talk slots
    DecideNumberOfSlots(u32),

    /// Add an organizer to the programme committee
    AddOrganizerToConference(Organizer),

    /// Remove an organizer; their active votes are revoked alongside
    RemoveOrganizerFromConference(Organizer),

    /// Propose an abstract while the call for papers is open
    ProposeAbstract(Abstract),

    /// Conclude the voting period and score all talks
    FinishVotingPeriod,

    /// Reopen a finished voting period
    ReopenVotingPeriod,

    /// Cast an organizer vote on an abstract
    Vote(Voting),

    /// Revoke a previously issued vote
    RevokeVoting(Voting),
}

impl ConferenceCommand {
    /// Stable command kind name, used for dispatch logging
    pub const fn kind(&self) -> &'static str {
        match self {
            ConferenceCommand::ScheduleConference(_) => "schedule_conference",
            ConferenceCommand::ChangeTitle(_) => "change_title",
            ConferenceCommand::DecideNumberOfSlots(_) => "decide_number_of_slots",
            ConferenceCommand::AddOrganizerToConference(_) => "add_organizer_to_conference",
            ConferenceCommand::RemoveOrganizerFromConference(_) => {
                "remove_organizer_from_conference"
            }
            ConferenceCommand::ProposeAbstract(_) => "propose_abstract",
            ConferenceCommand::FinishVotingPeriod => "finish_voting_period",
            ConferenceCommand::ReopenVotingPeriod => "reopen_voting_period",
            ConferenceCommand::Vote(_) => "vote",
            ConferenceCommand::RevokeVoting(_) => "revoke_voting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AbstractId, AbstractKind, OrganizerId, Points};

    #[test]
    fn test_command_serialization_roundtrip() {
        let command = ConferenceCommand::Vote(Voting::new(
            OrganizerId::new(),
            AbstractId::new(),
            Points::Veto,
        ));

        let json = serde_json::to_string(&command).expect("Failed to serialize");
        assert!(json.contains("vote"));

        let back: ConferenceCommand = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, command);
    }

    #[test]
    fn test_command_kind_names() {
        let command =
            ConferenceCommand::ProposeAbstract(Abstract::new(AbstractKind::Talk, "Talk"));
        assert_eq!(command.kind(), "propose_abstract");
        assert_eq!(
            ConferenceCommand::FinishVotingPeriod.kind(),
            "finish_voting_period"
        );
    }
}
