// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon validate` specs

use crate::prelude::*;

#[test]
fn valid_event_prints_its_id() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["validate", "event.json"])
        .passes()
        .stdout_eq("valid: 11111111-2222-3333-4444-555555555555\n");
}

#[test]
fn reads_event_from_stdin() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate", "-"])
        .stdin(FLOW_RUN_EVENT)
        .passes()
        .stdout_has("valid: 11111111-2222-3333-4444-555555555555");
}

#[test]
fn json_report_summarizes_event() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    let run = temp
        .beacon()
        .args(&["validate", "event.json", "--format", "json"])
        .passes();
    let report = run.stdout_json();
    assert_eq!(report["event"], "prefect.flow-run.Completed");
    assert_eq!(report["resource"], "prefect.flow-run.abc");
    assert_eq!(report["related"], 3);
    assert!(report.get("received").is_none());
}

#[test]
fn missing_resource_id_is_rejected() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate"])
        .stdin(r#"{"event": "hello", "resource": {"name": "x"}}"#)
        .exits(2)
        .stderr_has("error: Invalid event in stdin")
        .stderr_has("resources must include the prefect.resource.id label");
}

#[test]
fn empty_resource_id_is_rejected() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate"])
        .stdin(r#"{"event": "hello", "resource": {"prefect.resource.id": ""}}"#)
        .exits(2)
        .stderr_has("the prefect.resource.id label must be non-empty");
}

#[test]
fn related_resource_without_role_is_rejected() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["validate"])
        .stdin(
            r#"{"event": "hello",
                "resource": {"prefect.resource.id": "a"},
                "related": [{"prefect.resource.id": "b"}]}"#,
        )
        .exits(2)
        .stderr_has("related resources must include the prefect.resource.role label");
}

#[test]
fn received_flag_requires_received_timestamp() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["validate", "--received", "event.json"])
        .exits(2)
        .stderr_has("missing field `received`");
}

#[test]
fn received_flag_reports_received_timestamp() {
    let temp = Project::empty();
    temp.file(
        "event.json",
        r#"{"event": "hello",
            "resource": {"prefect.resource.id": "a"},
            "occurred": "2024-05-01T12:00:00Z",
            "received": "2024-05-01T12:00:05Z"}"#,
    );

    let run = temp
        .beacon()
        .args(&["validate", "--received", "--format", "json", "event.json"])
        .passes();
    assert_eq!(run.stdout_json()["received"], "2024-05-01T12:00:05+00:00");
}
