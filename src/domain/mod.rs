// Copyright (c) 2025 - Cowboy AI, Inc.
//! Conference Domain Models
//!
//! Core domain concepts for the call-for-papers workflow: typed ids,
//! organizers, abstracts, votings, and the pure guard predicates the
//! command handlers validate against.
//!
//! # Value Objects
//!
//! - [`ConferenceId`] / [`OrganizerId`] / [`AbstractId`] - typed UUID wrappers
//! - [`Organizer`] - a voting member of the programme committee
//! - [`Abstract`] - an immutable proposed submission ([`AbstractKind`])
//! - [`Voting`] - the (voter, abstract, points) fact ([`Points`])
//!
//! # Guards
//!
//! [`invariants`] holds the pure predicates (organizer present, voting
//! issued, all abstracts fully voted) shared by the handlers.

pub mod abstracts;
pub mod ids;
pub mod invariants;
pub mod organizer;
pub mod voting;

// Re-export value objects
pub use abstracts::{Abstract, AbstractKind};
pub use ids::{AbstractId, ConferenceId, OrganizerId};
pub use organizer::Organizer;
pub use voting::{Points, Voting};
