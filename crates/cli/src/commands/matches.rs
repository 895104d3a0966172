// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon match --spec <SPEC> [FILE]` - Test an event against a resource specification

use crate::commands::Outcome;
use crate::input::{self, Input};
use crate::output::{self, OutputFormat};
use beacon_core::EventLimits;
use clap::Args;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Args)]
pub struct MatchArgs {
    /// Resource specification as inline JSON or a path to a JSON file
    #[arg(long)]
    pub spec: String,

    /// Event JSON file (stdin when omitted or '-')
    pub file: Option<PathBuf>,
}

#[derive(Serialize)]
struct MatchReport {
    matched: bool,
    /// Ids of involved resources the specification matched individually
    resources: Vec<String>,
}

impl fmt::Display for MatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "match")
        } else {
            write!(f, "no match")
        }
    }
}

pub fn handle(
    args: MatchArgs,
    limits: &EventLimits,
    format: OutputFormat,
) -> anyhow::Result<Outcome> {
    let spec = input::specification(&args.spec)?;
    let event = Input::read(args.file.as_deref())?.event(limits)?;

    let report = MatchReport {
        matched: spec.matches_event(&event),
        resources: event
            .involved_resources()
            .into_iter()
            .filter(|resource| spec.matches(*resource))
            .map(|resource| resource.id().to_string())
            .collect(),
    };
    tracing::info!(id = %event.id(), matched = report.matched, "evaluated specification");

    output::print(&report, format);
    Ok(if report.matched {
        Outcome::Found
    } else {
        Outcome::NotFound
    })
}
