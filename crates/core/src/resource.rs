// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resources and related resources
//!
//! A resource is validated once, when it is constructed, and is immutable
//! afterwards. Changing a label means building a new resource.

use crate::error::ValidationError;
use crate::labels::{Labelled, Labels};
use crate::limits::EventLimits;
use serde::Serialize;

/// Label carrying a resource's identity
pub const RESOURCE_ID_LABEL: &str = "prefect.resource.id";
/// Label carrying a resource's optional display name
pub const RESOURCE_NAME_LABEL: &str = "prefect.resource.name";
/// Label carrying a related resource's role in an event
pub const RESOURCE_ROLE_LABEL: &str = "prefect.resource.role";

/// An observable business object that an event concerns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Resource {
    labels: Labels,
}

impl Resource {
    pub fn new(labels: Labels, limits: &EventLimits) -> Result<Self, ValidationError> {
        if !limits.allows_labels(labels.len()) {
            return Err(reject(ValidationError::TooManyLabels {
                max: limits.max_labels_per_resource,
            }));
        }
        let Some(id) = labels.get(RESOURCE_ID_LABEL) else {
            return Err(reject(ValidationError::MissingLabel {
                label: RESOURCE_ID_LABEL,
            }));
        };
        require_non_empty(id, RESOURCE_ID_LABEL)?;
        Ok(Self { labels })
    }

    /// The value of the identity label
    pub fn id(&self) -> &str {
        self.labels.get(RESOURCE_ID_LABEL).unwrap_or_default()
    }

    pub fn name(&self) -> Option<&str> {
        self.labels.get(RESOURCE_NAME_LABEL)
    }

    pub fn into_labels(self) -> Labels {
        self.labels
    }
}

impl Labelled for Resource {
    fn labels(&self) -> &Labels {
        &self.labels
    }
}

/// A resource with a specific role in an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RelatedResource {
    resource: Resource,
}

impl RelatedResource {
    pub fn new(labels: Labels, limits: &EventLimits) -> Result<Self, ValidationError> {
        let resource = Resource::new(labels, limits)?;
        let Some(role) = resource.labels.get(RESOURCE_ROLE_LABEL) else {
            return Err(reject(ValidationError::MissingRelatedLabel {
                label: RESOURCE_ROLE_LABEL,
            }));
        };
        require_non_empty(role, RESOURCE_ROLE_LABEL)?;
        Ok(Self { resource })
    }

    pub fn id(&self) -> &str {
        self.resource.id()
    }

    pub fn name(&self) -> Option<&str> {
        self.resource.name()
    }

    /// The value of the role label
    pub fn role(&self) -> &str {
        self.resource
            .labels
            .get(RESOURCE_ROLE_LABEL)
            .unwrap_or_default()
    }

    pub fn as_resource(&self) -> &Resource {
        &self.resource
    }

    pub fn into_resource(self) -> Resource {
        self.resource
    }
}

impl AsRef<Resource> for RelatedResource {
    fn as_ref(&self) -> &Resource {
        &self.resource
    }
}

impl Labelled for RelatedResource {
    fn labels(&self) -> &Labels {
        &self.resource.labels
    }
}

fn require_non_empty(value: &str, label: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(reject(ValidationError::EmptyLabel { label }));
    }
    Ok(())
}

fn reject(error: ValidationError) -> ValidationError {
    tracing::debug!(%error, "rejected resource");
    error
}

#[cfg(test)]
#[path = "resource_tests.rs"]
mod tests;
