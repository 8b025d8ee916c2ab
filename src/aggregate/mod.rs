// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Functional Conference Aggregate
//!
//! This module provides the functional aggregate pattern for event sourcing:
//! - Handlers are pure functions: History → Command → [Event]
//! - State reconstruction via event folding: [Event] → State
//! - No mutations, no side effects
//! - Rejections are `DomainError` events, not errors
//!
//! # Event Sourcing Pattern
//!
//! ```text
//! Command → Handler → Events → Event Store
//!    ↓         ↓         ↓
//! Intent   Validation  Facts
//! ```
//!
//! # Example Usage
//!
//! ```rust
//! use conference_engine::aggregate::{handle_command, ConferenceCommand, ConferenceState};
//! use conference_engine::events::ConferenceDescriptor;
//!
//! let history = Vec::new();
//! let command = ConferenceCommand::ScheduleConference(
//!     ConferenceDescriptor::new("EventSourcing Conf", 2),
//! );
//!
//! // Decide: pure function of (history, command)
//! let new_events = handle_command(&history, command);
//!
//! // The caller appends new_events to the store, then anyone can fold:
//! let state = ConferenceState::from_events(&new_events);
//! assert!(state.is_scheduled());
//! ```
//!
//! # Design Principles
//!
//! 1. **Command-Event Separation**: commands express intent and can be
//!    refused; events are facts and cannot fail
//! 2. **Pure Event Application**: `apply_event(State, Event) → State`,
//!    no validation (it already happened), deterministic replay
//! 3. **Handlers Re-derive State**: every handler folds the supplied
//!    history itself; the engine caches nothing between calls

pub mod commands;
pub mod conference;
pub mod handlers;
pub mod scoring;

pub use commands::ConferenceCommand;
pub use conference::{apply_event, CallForPapers, ConferenceState, VotingPeriod};
pub use handlers::{
    handle_add_organizer, handle_change_title, handle_command, handle_decide_number_of_slots,
    handle_finish_voting_period, handle_propose_abstract, handle_remove_organizer,
    handle_reopen_voting_period, handle_revoke_voting, handle_schedule_conference, handle_vote,
};
pub use scoring::score_abstracts;
