// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon validate [FILE]` - Check an event against the configured limits

use crate::commands::Outcome;
use crate::input::Input;
use crate::output::{self, OutputFormat};
use beacon_core::{Event, EventLimits};
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateArgs {
    /// Event JSON file (stdin when omitted or '-')
    pub file: Option<PathBuf>,

    /// Require a server-side `received` timestamp
    #[arg(long)]
    pub received: bool,
}

#[derive(Serialize)]
struct ValidationReport {
    id: String,
    event: String,
    resource: String,
    related: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    received: Option<String>,
}

impl ValidationReport {
    fn new(event: &Event, received: Option<String>) -> Self {
        Self {
            id: event.id().to_string(),
            event: event.name().to_string(),
            resource: event.resource().id().to_string(),
            related: event.related().len(),
            received,
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "valid: {}", self.id)
    }
}

pub fn handle(
    args: ValidateArgs,
    limits: &EventLimits,
    format: OutputFormat,
) -> anyhow::Result<Outcome> {
    let input = Input::read(args.file.as_deref())?;

    let report = if args.received {
        let received = input.received_event(limits)?;
        ValidationReport::new(&received, Some(received.received().to_rfc3339()))
    } else {
        ValidationReport::new(&input.event(limits)?, None)
    };

    output::print(&report, format);
    Ok(Outcome::Found)
}
