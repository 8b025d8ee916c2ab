// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Store Collaborator Interface
//!
//! The engine itself never touches storage; it is a pure function of
//! `(history, command)`. This module specifies the collaborator the caller
//! wires the engine to:
//!
//! ```text
//! read_events → handle_command → append
//! ```
//!
//! # Contract
//!
//! 1. **Append-Only**: events are never updated or deleted
//! 2. **Ordered**: events keep commit order within an aggregate
//! 3. **Gap-Free Reads**: `read_events` returns the full committed history
//! 4. **Serialized Writers**: at most one command executes against a given
//!    aggregate at a time; `expected_version` lets compare-and-append
//!    stores enforce this
//!
//! The store, not the engine, assigns envelope metadata: event ids,
//! sequence numbers, timestamps, correlation ids.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EngineResult;
use crate::events::ConferenceEvent;

pub mod memory;

pub use memory::InMemoryEventStore;

/// Envelope wrapping a committed domain event
///
/// All metadata here is store-assigned; the domain event inside carries
/// none of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent {
    /// Unique event id (UUID v7 for time-ordering)
    pub event_id: Uuid,

    /// Aggregate this event belongs to
    pub aggregate_id: Uuid,

    /// Sequence number within the aggregate stream (1-based)
    pub sequence: u64,

    /// When the event was committed
    pub timestamp: DateTime<Utc>,

    /// Correlation id grouping events from one command dispatch
    pub correlation_id: Uuid,

    /// Event type name (for consumers filtering without deserializing)
    pub event_type: String,

    /// The domain event itself
    pub data: ConferenceEvent,
}

/// Event Store trait for persisting and retrieving conference events
///
/// Implementations must guarantee atomic append (all events of one
/// dispatch commit or none do) and ordered, gap-free reads.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Append events to an aggregate's stream
    ///
    /// `expected_version` is the optimistic concurrency check: when given,
    /// the append fails with
    /// [`ConcurrencyConflict`](crate::errors::EngineError::ConcurrencyConflict)
    /// unless the stream currently holds exactly that many events.
    ///
    /// Returns the new stream version after the append.
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<ConferenceEvent>,
        expected_version: Option<u64>,
    ) -> EngineResult<u64>;

    /// Read the full committed history of an aggregate, in commit order
    async fn read_events(&self, aggregate_id: Uuid) -> EngineResult<Vec<StoredEvent>>;

    /// Current version of an aggregate stream (event count), if any
    async fn version(&self, aggregate_id: Uuid) -> EngineResult<Option<u64>>;
}
