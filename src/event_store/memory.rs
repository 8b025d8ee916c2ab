// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Event Store
//!
//! Reference implementation of the [`EventStore`] contract, used by tests
//! and as executable documentation of the read–decide–append loop. All
//! streams live in one mutex-guarded map; the mutex also provides the
//! per-aggregate writer serialization the engine assumes.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::event_store::{EventStore, StoredEvent};
use crate::events::ConferenceEvent;

/// In-memory, append-only event store
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    streams: Mutex<HashMap<Uuid, Vec<StoredEvent>>>,
}

impl InMemoryEventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(
        &self,
        aggregate_id: Uuid,
        events: Vec<ConferenceEvent>,
        expected_version: Option<u64>,
    ) -> EngineResult<u64> {
        let mut streams = self
            .streams
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        let stream = streams.entry(aggregate_id).or_default();

        let actual = stream.len() as u64;
        if let Some(expected) = expected_version {
            if expected != actual {
                return Err(EngineError::ConcurrencyConflict {
                    aggregate_id,
                    expected,
                    actual,
                });
            }
        }

        let correlation_id = Uuid::now_v7();
        for event in events {
            let sequence = stream.len() as u64 + 1;
            debug!(
                %aggregate_id,
                sequence,
                event_type = event.event_type(),
                "appending event"
            );
            stream.push(StoredEvent {
                event_id: Uuid::now_v7(),
                aggregate_id,
                sequence,
                timestamp: Utc::now(),
                correlation_id,
                event_type: event.event_type().to_string(),
                data: event,
            });
        }

        Ok(stream.len() as u64)
    }

    async fn read_events(&self, aggregate_id: Uuid) -> EngineResult<Vec<StoredEvent>> {
        let streams = self
            .streams
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        Ok(streams.get(&aggregate_id).cloned().unwrap_or_default())
    }

    async fn version(&self, aggregate_id: Uuid) -> EngineResult<Option<u64>> {
        let streams = self
            .streams
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        Ok(streams.get(&aggregate_id).map(|s| s.len() as u64))
    }
}
