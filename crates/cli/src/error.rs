// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors shown to the person running `beacon`.
//!
//! Decode, validation and config failures are each turned into a message,
//! the underlying cause as context, and numbered suggestions.

use crate::config::{ConfigError, ENV_MAX_LABELS, ENV_MAX_RELATED};
use beacon_core::ValidationError;
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct CliError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
    /// Original error if any
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CliError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Record the underlying error, showing its message as context.
    pub fn caused_by<E: std::error::Error + Send + Sync + 'static>(self, cause: E) -> Self {
        let mut error = self.with_context(cause.to_string());
        error.source = Some(Box::new(cause));
        error
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Builders for each failure `beacon` reports.
impl CliError {
    /// Input could not be read at all.
    pub fn unreadable_input(source_name: &str, err: std::io::Error) -> Self {
        CliError::new(format!("Failed to read {}", source_name))
            .caused_by(err)
            .with_suggestion("Pass a readable file path, or '-' to read from stdin")
    }

    /// Input was read but is not the expected JSON shape.
    pub fn undecodable(what: &str, source_name: &str, err: serde_json::Error) -> Self {
        CliError::new(format!("Could not decode {} from {}", what, source_name))
            .caused_by(err)
            .with_suggestion(format!(
                "Check that {} is valid JSON in the expected wire format",
                source_name
            ))
    }

    /// Input decoded but failed construction-time validation.
    pub fn invalid_event(source_name: &str, err: ValidationError) -> Self {
        let error = CliError::new(format!("Invalid event in {}", source_name)).caused_by(err.clone());

        match err {
            ValidationError::MissingLabel { label }
            | ValidationError::MissingRelatedLabel { label }
            | ValidationError::EmptyLabel { label } => {
                error.with_suggestion(format!("Give every resource a non-empty '{}' label", label))
            }
            ValidationError::TooManyLabels { .. } => error
                .with_suggestion("Remove labels from the offending resource")
                .with_suggestion(format!("Raise the limit with {}", ENV_MAX_LABELS)),
            ValidationError::TooManyRelatedResources { .. } => error
                .with_suggestion("Drop related resources from the event")
                .with_suggestion(format!("Raise the limit with {}", ENV_MAX_RELATED)),
        }
    }

    /// Configuration could not be loaded.
    pub fn config(err: ConfigError) -> Self {
        CliError::new("Invalid configuration")
            .caused_by(err)
            .with_suggestion("Check beacon.toml or pass --config <path>")
    }
}
