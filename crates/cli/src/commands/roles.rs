// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon roles [FILE]` - Summarize an event's related resources by role

use crate::commands::Outcome;
use crate::input::Input;
use crate::output::{self, OutputFormat};
use beacon_core::EventLimits;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct RolesArgs {
    /// Event JSON file (stdin when omitted or '-')
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct RoleSummary {
    role: String,
    /// Id of the first related resource in this role
    first: String,
    /// Ids of every related resource in this role, in event order
    resources: Vec<String>,
}

impl fmt::Display for RoleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15} {:<40} {}", self.role, self.first, self.resources.len())
    }
}

pub fn handle(
    args: RolesArgs,
    limits: &EventLimits,
    format: OutputFormat,
) -> anyhow::Result<Outcome> {
    let event = Input::read(args.file.as_deref())?.event(limits)?;

    let first = event.resource_in_role();
    let summaries: Vec<RoleSummary> = event
        .resources_in_role()
        .into_iter()
        .filter_map(|(role, resources)| {
            Some(RoleSummary {
                role: role.to_string(),
                first: first.get(role)?.id().to_string(),
                resources: resources.iter().map(|r| r.id().to_string()).collect(),
            })
        })
        .collect();

    output::print_table(
        &format!("{:<15} {:<40} COUNT", "ROLE", "FIRST"),
        &summaries,
        "No related resources",
        format,
    );
    Ok(Outcome::Found)
}
