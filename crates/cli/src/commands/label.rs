// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon label <LABEL> [FILE]` - Resolve a label on an event's resources

use crate::commands::Outcome;
use crate::input::Input;
use crate::output::{self, OutputFormat};
use beacon_core::EventLimits;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct LabelArgs {
    /// Label name, or `related:<role>:<label>` to read from a related resource
    pub label: String,

    /// Event JSON file (stdin when omitted or '-')
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct LabelReport {
    label: String,
    value: Option<String>,
}

impl fmt::Display for LabelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "Label not found: {}", self.label),
        }
    }
}

pub fn handle(
    args: LabelArgs,
    limits: &EventLimits,
    format: OutputFormat,
) -> anyhow::Result<Outcome> {
    let event = Input::read(args.file.as_deref())?.event(limits)?;
    let value = event.find_resource_label(&args.label).map(str::to_string);
    let outcome = if value.is_some() {
        Outcome::Found
    } else {
        Outcome::NotFound
    };

    output::print(
        &LabelReport {
            label: args.label,
            value,
        },
        format,
    );
    Ok(outcome)
}
