// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server-side view of an event after ingestion

use crate::error::ValidationError;
use crate::event::{Event, RawEvent};
use crate::limits::EventLimits;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// An event plus the time the server received it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceivedEvent {
    #[serde(flatten)]
    event: Event,
    received: DateTime<Utc>,
}

impl ReceivedEvent {
    pub fn new(event: Event, received: DateTime<Utc>) -> Self {
        Self { event, received }
    }

    /// Validate a decoded wire event that already carries `received`
    pub fn from_raw(raw: RawReceivedEvent, limits: &EventLimits) -> Result<Self, ValidationError> {
        let event = Event::from_raw(raw.event, limits)?;
        Ok(Self::new(event, raw.received))
    }

    pub fn received(&self) -> DateTime<Utc> {
        self.received
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_event(self) -> Event {
        self.event
    }
}

impl Deref for ReceivedEvent {
    type Target = Event;

    fn deref(&self) -> &Event {
        &self.event
    }
}

/// A received event as it arrives on the wire; `received` is required
#[derive(Debug, Clone, Deserialize)]
pub struct RawReceivedEvent {
    #[serde(flatten)]
    pub event: RawEvent,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub received: DateTime<Utc>,
}

#[cfg(test)]
#[path = "received_tests.rs"]
mod tests;
