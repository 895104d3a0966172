// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon receive [FILE]` - Stamp an event as received now

use crate::commands::Outcome;
use crate::input::Input;
use crate::output;
use beacon_core::{Clock, EventLimits};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ReceiveArgs {
    /// Event JSON file (stdin when omitted or '-')
    pub file: Option<PathBuf>,
}

/// Always prints JSON: the received event is meant to be piped onward
pub fn handle(
    args: ReceiveArgs,
    limits: &EventLimits,
    clock: &impl Clock,
) -> anyhow::Result<Outcome> {
    let event = Input::read(args.file.as_deref())?.event(limits)?;
    let received = event.receive(clock);
    tracing::info!(id = %received.id(), received = %received.received(), "stamped event");

    output::print_json(&received);
    Ok(Outcome::Found)
}
