// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error display specs: message, context, suggestions

use crate::prelude::*;

#[test]
fn missing_file_reports_read_failure() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate", "missing.json"])
        .exits(2)
        .stderr_has("error: Failed to read missing.json")
        .stderr_has("suggestions:");
}

#[test]
fn malformed_json_reports_decode_failure() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate"])
        .stdin("{ not json")
        .exits(2)
        .stderr_has("error: Could not decode an event from stdin");
}

#[test]
fn missing_event_name_is_a_decode_failure() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate"])
        .stdin(r#"{"resource": {"prefect.resource.id": "r"}}"#)
        .exits(2)
        .stderr_has("missing field `event`");
}
