// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed Identifiers for the Conference Domain
//!
//! Newtype wrappers around UUIDs so a `ConferenceId` can never be passed
//! where an `AbstractId` is expected. All ids are serde-transparent and
//! render as plain UUIDs on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a fresh id (UUID v7 for time-ordering)
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Wrap an existing UUID
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Get the underlying UUID
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Identity of one conference aggregate
    ConferenceId
);

define_id!(
    /// Identity of an organizer (also used as voter identity)
    OrganizerId
);

define_id!(
    /// Identity of a proposed abstract
    AbstractId
);
