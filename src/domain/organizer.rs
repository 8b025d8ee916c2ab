// Copyright (c) 2025 - Cowboy AI, Inc.
//! Organizer Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ids::OrganizerId;

/// A conference organizer
///
/// Organizers are the only parties allowed to vote on abstracts.
/// Identity lives in `id`; the name is display-only and never takes part
/// in equality checks performed by the guards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Organizer {
    /// Organizer identity (doubles as voter identity)
    pub id: OrganizerId,

    /// Display name
    pub name: String,
}

impl Organizer {
    /// Create a new organizer with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: OrganizerId::new(),
            name: name.into(),
        }
    }

    /// Create an organizer with a known id
    pub fn with_id(id: OrganizerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Organizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
