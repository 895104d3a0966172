// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading wire JSON from files or stdin and decoding it into core types

use crate::error::CliError;
use beacon_core::{
    Event, EventLimits, RawEvent, RawReceivedEvent, ReceivedEvent, ResourceSpecification,
};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// Raw input text and where it came from
pub struct Input {
    pub name: String,
    pub text: String,
}

impl Input {
    /// Read a file, or stdin when `path` is absent or `-`
    pub fn read(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) if path != Path::new("-") => {
                let name = path.display().to_string();
                let text = std::fs::read_to_string(path)
                    .map_err(|e| CliError::unreadable_input(&name, e))?;
                Ok(Self { name, text })
            }
            _ => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| CliError::unreadable_input("stdin", e))?;
                Ok(Self {
                    name: "stdin".to_string(),
                    text,
                })
            }
        }
    }

    fn decode<T: DeserializeOwned>(&self, what: &str) -> Result<T, CliError> {
        serde_json::from_str(&self.text).map_err(|e| CliError::undecodable(what, &self.name, e))
    }

    pub fn event(&self, limits: &EventLimits) -> Result<Event, CliError> {
        let raw: RawEvent = self.decode("an event")?;
        let event =
            Event::from_raw(raw, limits).map_err(|e| CliError::invalid_event(&self.name, e))?;
        tracing::debug!(id = %event.id(), event_name = event.name(), "decoded event");
        Ok(event)
    }

    pub fn received_event(&self, limits: &EventLimits) -> Result<ReceivedEvent, CliError> {
        let raw: RawReceivedEvent = self.decode("a received event")?;
        ReceivedEvent::from_raw(raw, limits).map_err(|e| CliError::invalid_event(&self.name, e))
    }
}

/// Decode a specification given inline as JSON or as a path to a JSON file
pub fn specification(arg: &str) -> Result<ResourceSpecification, CliError> {
    let input = if arg.trim_start().starts_with('{') {
        Input {
            name: "--spec".to_string(),
            text: arg.to_string(),
        }
    } else {
        Input::read(Some(Path::new(arg)))?
    };
    input.decode("a resource specification")
}
