//! Event-sourced domain engine for a conference call-for-papers and
//! organizer-voting workflow
//!
//! Given the full ordered history of past events for one conference
//! aggregate and an incoming command, the engine deterministically decides
//! whether the command is valid against the folded current state and, if
//! so, emits the new events that represent the effect. Invalid commands
//! become `DomainError` events rather than errors, so rejections are
//! auditable facts.
//!
//! The engine performs no I/O and holds no mutable state; persistence is a
//! collaborator behind the [`event_store::EventStore`] trait.
//!
//! ```rust
//! use conference_engine::aggregate::{handle_command, ConferenceCommand};
//! use conference_engine::events::ConferenceDescriptor;
//!
//! let descriptor = ConferenceDescriptor::new("EventSourcing Conf", 2);
//! let events = handle_command(&[], ConferenceCommand::ScheduleConference(descriptor));
//! assert_eq!(events.len(), 1);
//! ```

pub mod aggregate;
pub mod domain;
pub mod errors;
pub mod event_store;
pub mod events;

// Re-export commonly used types
pub use aggregate::{handle_command, ConferenceCommand, ConferenceState};
pub use errors::{EngineError, EngineResult};
pub use event_store::{EventStore, InMemoryEventStore, StoredEvent};
pub use events::{ConferenceDescriptor, ConferenceEvent, RejectionReason};
