// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource specifications: label-based selectors over resources
//!
//! A specification maps label names to one or more patterns. A resource
//! matches when, for every label in the specification, at least one of
//! that label's patterns matches the resource's value (AND across labels,
//! OR within a label). An empty specification matches everything.
//!
//! On the wire a label may map to a single string or an array of strings.
//! A single string is one pattern for matching, including the empty
//! string. Item access (`get`, `pop`) reads an empty string, an empty
//! array or null as no patterns at all.

use crate::event::Event;
use crate::labels::Labelled;
use crate::pattern;
use crate::resource::RESOURCE_ID_LABEL;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A selector from label name to label patterns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<WirePatterns>>",
    into = "BTreeMap<String, WirePatterns>"
)]
pub struct ResourceSpecification {
    patterns: BTreeMap<String, WirePatterns>,
}

impl ResourceSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the patterns for a label, returning the ones it replaced
    pub fn insert<S: Into<String>>(
        &mut self,
        label: impl Into<String>,
        patterns: impl IntoIterator<Item = S>,
    ) -> Option<Vec<String>> {
        let patterns = WirePatterns::Many(patterns.into_iter().map(Into::into).collect());
        self.patterns
            .insert(label.into(), patterns)
            .map(WirePatterns::into_patterns)
    }

    /// Builder-style insert
    pub fn with<S: Into<String>>(
        mut self,
        label: impl Into<String>,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.insert(label, patterns);
        self
    }

    /// True for the universal selector (no labels at all)
    pub fn matches_every_resource(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if universal, or if the only constraint is an id pattern of
    /// exactly `<prefix>.*`.
    ///
    /// This compares the pattern text literally; it does not evaluate it.
    pub fn matches_every_resource_of_kind(&self, prefix: &str) -> bool {
        if self.matches_every_resource() {
            return true;
        }
        if self.patterns.len() != 1 {
            return false;
        }
        let kind = format!("{prefix}.*");
        self.get(RESOURCE_ID_LABEL).iter().any(|p| *p == kind)
    }

    /// Check if a single resource satisfies every label's patterns
    pub fn matches<L: Labelled + ?Sized>(&self, resource: &L) -> bool {
        self.patterns.iter().all(|(label, patterns)| {
            let value = resource.get(label);
            let matched = patterns
                .as_slice()
                .iter()
                .any(|p| pattern::matches(p, value));
            if !matched {
                tracing::trace!(label = %label, ?value, "label did not match");
            }
            matched
        })
    }

    /// Check if the specification is universal or any candidate matches
    pub fn includes<'a, L, I>(&self, candidates: I) -> bool
    where
        L: Labelled + ?Sized + 'a,
        I: IntoIterator<Item = &'a L>,
    {
        if self.matches_every_resource() {
            return true;
        }
        candidates.into_iter().any(|candidate| self.matches(candidate))
    }

    /// Check the event's primary and related resources
    pub fn matches_event(&self, event: &Event) -> bool {
        self.includes(event.involved_resources())
    }

    /// Patterns for a label; empty when absent, `""`, `[]` or null
    pub fn get(&self, label: &str) -> &[String] {
        match self.patterns.get(label) {
            Some(patterns) if !patterns.is_blank() => patterns.as_slice(),
            _ => &[],
        }
    }

    /// Remove a label, returning its patterns with the same view as `get`
    pub fn pop(&mut self, label: &str) -> Vec<String> {
        match self.patterns.remove(label) {
            Some(patterns) if !patterns.is_blank() => patterns.into_patterns(),
            _ => Vec::new(),
        }
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.patterns.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Iterate `(label, patterns)` pairs sorted by label, as matching sees them
    pub fn items(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.patterns
            .iter()
            .map(|(label, patterns)| (label.as_str(), patterns.as_slice()))
    }

    /// An independent copy whose patterns can be changed freely
    pub fn deepcopy(&self) -> Self {
        self.clone()
    }
}

impl<K, V, S> FromIterator<(K, V)> for ResourceSpecification
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut spec = ResourceSpecification::new();
        for (label, patterns) in iter {
            spec.insert(label, patterns);
        }
        spec
    }
}

/// A label's patterns as they appear on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WirePatterns {
    One(String),
    Many(Vec<String>),
}

impl WirePatterns {
    /// The patterns used for matching; a single string is one pattern
    pub fn as_slice(&self) -> &[String] {
        match self {
            WirePatterns::One(pattern) => std::slice::from_ref(pattern),
            WirePatterns::Many(patterns) => patterns,
        }
    }

    pub fn into_patterns(self) -> Vec<String> {
        match self {
            WirePatterns::One(pattern) => vec![pattern],
            WirePatterns::Many(patterns) => patterns,
        }
    }

    /// An empty string or empty array
    fn is_blank(&self) -> bool {
        match self {
            WirePatterns::One(pattern) => pattern.is_empty(),
            WirePatterns::Many(patterns) => patterns.is_empty(),
        }
    }
}

impl From<BTreeMap<String, Option<WirePatterns>>> for ResourceSpecification {
    fn from(wire: BTreeMap<String, Option<WirePatterns>>) -> Self {
        Self {
            patterns: wire
                .into_iter()
                .map(|(label, patterns)| {
                    (label, patterns.unwrap_or(WirePatterns::Many(Vec::new())))
                })
                .collect(),
        }
    }
}

impl From<ResourceSpecification> for BTreeMap<String, WirePatterns> {
    fn from(spec: ResourceSpecification) -> Self {
        spec.patterns
    }
}

#[cfg(test)]
#[path = "specification_tests.rs"]
mod tests;
