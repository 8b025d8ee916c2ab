// Copyright (c) 2025 - Cowboy AI, Inc.
//! Abstract Value Object
//!
//! A proposed abstract is immutable once proposed: it is only ever
//! referenced by votings and by the scoring pass, never mutated or removed.

use serde::{Deserialize, Serialize};

use crate::domain::ids::AbstractId;

/// Kind of proposed abstract
///
/// Only talks compete for the available talk slots; everything else
/// (workshops, lightning sessions, ...) is tracked but never scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractKind {
    /// A talk competing for `available_slots_for_talks`
    Talk,

    /// Any other submission kind, excluded from acceptance scoring
    Other,
}

/// A proposed abstract
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Abstract {
    /// Abstract identity
    pub id: AbstractId,

    /// Submission kind
    pub kind: AbstractKind,

    /// Title of the submission
    pub title: String,
}

impl Abstract {
    /// Create a new abstract proposal with a fresh id
    pub fn new(kind: AbstractKind, title: impl Into<String>) -> Self {
        Self {
            id: AbstractId::new(),
            kind,
            title: title.into(),
        }
    }

    /// Create an abstract with a known id
    pub fn with_id(id: AbstractId, kind: AbstractKind, title: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            title: title.into(),
        }
    }

    /// Whether this abstract competes for talk slots
    pub fn is_talk(&self) -> bool {
        self.kind == AbstractKind::Talk
    }
}
