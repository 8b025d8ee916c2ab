// Copyright (c) 2025 - Cowboy AI, Inc.
//! Conference Domain Events
//!
//! This module defines the closed event vocabulary for the conference
//! bounded context. Events are immutable facts representing state changes
//! that have occurred.
//!
//! # Event Sourcing Principles
//!
//! 1. **Events are immutable**: Once created, events never change
//! 2. **Events are past tense**: Named for what happened (Issued, not Issue)
//! 3. **Events are facts**: What happened, not what should happen
//! 4. **Rejections are events**: A refused command becomes a
//!    `DomainError` event, not an exception
//!
//! # Event Flow
//!
//! ```text
//! Command → Handler → Events → EventStore → Projections
//!   (intent)  (validate)  (facts)   (persist)   (fold state)
//! ```

pub mod conference;

// Re-export commonly used types
pub use conference::{ConferenceDescriptor, ConferenceEvent, RejectionReason};
