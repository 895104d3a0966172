// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cardinality limits enforced when resources and events are constructed.
//!
//! The hosting process owns these values and passes them into every
//! validating constructor; nothing in this crate reads them from the
//! environment.

use serde::{Deserialize, Serialize};

/// Default maximum number of labels on a single resource
pub const DEFAULT_MAX_LABELS_PER_RESOURCE: usize = 500;

/// Default maximum number of related resources on a single event
pub const DEFAULT_MAX_RELATED_RESOURCES: usize = 500;

/// Limits checked at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventLimits {
    /// Maximum labels per resource, identity and role labels included
    pub max_labels_per_resource: usize,
    /// Maximum related resources per event
    pub max_related_resources: usize,
}

impl Default for EventLimits {
    fn default() -> Self {
        Self {
            max_labels_per_resource: DEFAULT_MAX_LABELS_PER_RESOURCE,
            max_related_resources: DEFAULT_MAX_RELATED_RESOURCES,
        }
    }
}

impl EventLimits {
    pub fn new(max_labels_per_resource: usize, max_related_resources: usize) -> Self {
        Self {
            max_labels_per_resource,
            max_related_resources,
        }
    }

    /// Create limits suitable for testing (lower values).
    pub fn for_testing() -> Self {
        Self {
            max_labels_per_resource: 5,
            max_related_resources: 3,
        }
    }

    /// Check if a resource with `count` labels fits.
    pub fn allows_labels(&self, count: usize) -> bool {
        count <= self.max_labels_per_resource
    }

    /// Check if an event with `count` related resources fits.
    pub fn allows_related(&self, count: usize) -> bool {
        count <= self.max_related_resources
    }
}
