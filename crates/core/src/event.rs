// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events: timestamped occurrences affecting a primary resource
//!
//! An event owns its primary resource and every related resource. All
//! validation happens in [`EventBuilder::build_with`]; a constructed event
//! is never invalid.

use crate::clock::{Clock, SystemClock};
use crate::error::ValidationError;
use crate::id::{EventId, IdGen, UuidIdGen};
use crate::labels::{Labelled, Labels};
use crate::limits::EventLimits;
use crate::received::ReceivedEvent;
use crate::resource::{RelatedResource, Resource};
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Prefix selecting a related resource by role in [`Event::find_resource_label`]
const RELATED_DIRECTIVE: &str = "related";

/// The client-side view of something that happened to a resource
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    occurred: DateTime<Utc>,
    event: String,
    resource: Resource,
    related: Vec<RelatedResource>,
    payload: Map<String, Value>,
    id: EventId,
    follows: Option<EventId>,
}

impl Event {
    /// Start building an event named `event` about the resource with `resource` labels
    pub fn builder(event: impl Into<String>, resource: Labels) -> EventBuilder {
        EventBuilder::new(event, resource)
    }

    /// Validate a decoded wire event, defaulting `occurred` and `id`
    pub fn from_raw(raw: RawEvent, limits: &EventLimits) -> Result<Self, ValidationError> {
        EventBuilder::from(raw).build(limits)
    }

    pub fn from_raw_with(
        raw: RawEvent,
        limits: &EventLimits,
        clock: &impl Clock,
        id_gen: &impl IdGen,
    ) -> Result<Self, ValidationError> {
        EventBuilder::from(raw).build_with(limits, clock, id_gen)
    }

    /// When the event happened from the sender's perspective
    pub fn occurred(&self) -> DateTime<Utc> {
        self.occurred
    }

    /// The name of the event that happened
    pub fn name(&self) -> &str {
        &self.event
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn related(&self) -> &[RelatedResource] {
        &self.related
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    /// The event known to have occurred just before this one, if any
    pub fn follows(&self) -> Option<EventId> {
        self.follows
    }

    /// The primary resource followed by every related resource, in order
    pub fn involved_resources(&self) -> Vec<&Resource> {
        std::iter::once(&self.resource)
            .chain(self.related.iter().map(RelatedResource::as_resource))
            .collect()
    }

    /// Map each role to the first related resource in that role
    pub fn resource_in_role(&self) -> BTreeMap<&str, &RelatedResource> {
        // Reverse scan: earlier entries overwrite later ones.
        self.related.iter().rev().map(|r| (r.role(), r)).collect()
    }

    /// Map each role to all related resources in that role, in original order
    pub fn resources_in_role(&self) -> BTreeMap<&str, Vec<&RelatedResource>> {
        let mut roles: BTreeMap<&str, Vec<&RelatedResource>> = BTreeMap::new();
        for related in &self.related {
            roles.entry(related.role()).or_default().push(related);
        }
        roles
    }

    /// Find a label value on this event's resources.
    ///
    /// `related:<role>:<label>` reads `<label>` from the first related
    /// resource in `<role>`. Anything else, including a `related:` address
    /// whose role has no resource, is looked up verbatim on the primary
    /// resource.
    pub fn find_resource_label(&self, label: &str) -> Option<&str> {
        if let Some((directive, related_label)) = label.rsplit_once(':') {
            let (directive, role) = directive.split_once(':').unwrap_or((directive, ""));
            if directive == RELATED_DIRECTIVE {
                if let Some(related) = self.related.iter().find(|r| r.role() == role) {
                    return related.get(related_label);
                }
            }
        }
        self.resource.get(label)
    }

    /// Stamp this event as received by the server now
    pub fn receive(self, clock: &impl Clock) -> ReceivedEvent {
        ReceivedEvent::new(self, clock.now())
    }
}

/// Builder for [`Event`]; validation runs in `build`
#[derive(Debug, Clone)]
pub struct EventBuilder {
    event: String,
    resource: Labels,
    related: Vec<Labels>,
    payload: Map<String, Value>,
    occurred: Option<DateTime<Utc>>,
    id: Option<EventId>,
    follows: Option<EventId>,
}

impl EventBuilder {
    pub fn new(event: impl Into<String>, resource: Labels) -> Self {
        Self {
            event: event.into(),
            resource,
            related: Vec::new(),
            payload: Map::new(),
            occurred: None,
            id: None,
            follows: None,
        }
    }

    /// Append related resources
    pub fn with_related(mut self, related: impl IntoIterator<Item = Labels>) -> Self {
        self.related.extend(related);
        self
    }

    pub fn with_payload(mut self, payload: Map<String, Value>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_occurred(mut self, occurred: DateTime<Utc>) -> Self {
        self.occurred = Some(occurred);
        self
    }

    pub fn with_id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_follows(mut self, follows: EventId) -> Self {
        self.follows = Some(follows);
        self
    }

    /// Build using the system clock and random UUIDs for defaults
    pub fn build(self, limits: &EventLimits) -> Result<Event, ValidationError> {
        self.build_with(limits, &SystemClock, &UuidIdGen)
    }

    pub fn build_with(
        self,
        limits: &EventLimits,
        clock: &impl Clock,
        id_gen: &impl IdGen,
    ) -> Result<Event, ValidationError> {
        let resource = Resource::new(self.resource, limits)?;

        if !limits.allows_related(self.related.len()) {
            let error = ValidationError::TooManyRelatedResources {
                max: limits.max_related_resources,
            };
            tracing::debug!(
                event_name = %self.event,
                count = self.related.len(),
                %error,
                "rejected event"
            );
            return Err(error);
        }

        let related = self
            .related
            .into_iter()
            .map(|labels| RelatedResource::new(labels, limits))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Event {
            occurred: self.occurred.unwrap_or_else(|| clock.now()),
            event: self.event,
            resource,
            related,
            payload: self.payload,
            id: self.id.unwrap_or_else(|| id_gen.next()),
            follows: self.follows,
        })
    }
}

/// An event as it arrives on the wire, before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub occurred: Option<DateTime<Utc>>,
    pub event: String,
    pub resource: Labels,
    #[serde(default)]
    pub related: Vec<Labels>,
    #[serde(default)]
    pub payload: Map<String, Value>,
    #[serde(default)]
    pub id: Option<EventId>,
    #[serde(default)]
    pub follows: Option<EventId>,
}

impl From<RawEvent> for EventBuilder {
    fn from(raw: RawEvent) -> Self {
        EventBuilder {
            event: raw.event,
            resource: raw.resource,
            related: raw.related,
            payload: raw.payload,
            occurred: raw.occurred,
            id: raw.id,
            follows: raw.follows,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
