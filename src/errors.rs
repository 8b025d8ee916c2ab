// Copyright (c) 2025 - Cowboy AI, Inc.
//! Error types for store-boundary operations
//!
//! These errors cover the event store collaborator interface only.
//! Rejected commands are not errors here: they are
//! [`DomainError`](crate::events::ConferenceEvent::DomainError) events and
//! flow through the ordinary event pipeline.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur at the event store boundary
#[derive(Debug, Error)]
pub enum EngineError {
    /// Optimistic concurrency check failed on append
    #[error("Concurrency conflict on aggregate {aggregate_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// Aggregate whose stream was contended
        aggregate_id: Uuid,
        /// Version the caller expected
        expected: u64,
        /// Version actually found
        actual: u64,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for store-boundary operations
pub type EngineResult<T> = Result<T, EngineError>;

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}
