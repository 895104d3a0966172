// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! beacon-core: event and resource model for the Beacon pipeline
//!
//! This crate provides:
//! - Labelled resources and related resources, validated on construction
//! - Events and received events with derived role views
//! - A label pattern matcher and resource specifications built on it
//!
//! Nothing here performs I/O. Limits arrive as an [`EventLimits`] value
//! passed to each validating constructor.

pub mod clock;
pub mod id;

mod error;
mod event;
mod labels;
mod limits;
mod pattern;
mod received;
mod resource;
mod specification;
mod timestamp;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use error::ValidationError;
pub use event::{Event, EventBuilder, RawEvent};
pub use id::{EventId, IdGen, SequentialIdGen, UuidIdGen};
pub use labels::{LabelValue, Labelled, Labels};
pub use limits::{EventLimits, DEFAULT_MAX_LABELS_PER_RESOURCE, DEFAULT_MAX_RELATED_RESOURCES};
pub use pattern::matches;
pub use received::{RawReceivedEvent, ReceivedEvent};
pub use resource::{
    RelatedResource, Resource, RESOURCE_ID_LABEL, RESOURCE_NAME_LABEL, RESOURCE_ROLE_LABEL,
};
pub use specification::{ResourceSpecification, WirePatterns};
