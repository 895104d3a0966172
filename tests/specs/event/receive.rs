// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon receive` specs

use crate::prelude::*;

#[test]
fn stamps_received_and_keeps_wire_fields() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    let run = temp.beacon().args(&["receive", "event.json"]).passes();
    let received = run.stdout_json();

    assert_eq!(received["id"], "11111111-2222-3333-4444-555555555555");
    assert_eq!(received["event"], "prefect.flow-run.Completed");
    assert_eq!(received["occurred"], "2024-05-01T12:00:00Z");
    assert_eq!(received["related"].as_array().unwrap().len(), 3);
    assert!(received["follows"].is_null());
    assert!(received["received"].is_string());
}

#[test]
fn output_validates_as_received_event() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    let run = temp.beacon().args(&["receive", "event.json"]).passes();
    temp.file("received.json", &run.stdout);

    temp.beacon()
        .args(&["validate", "--received", "received.json"])
        .passes()
        .stdout_eq("valid: 11111111-2222-3333-4444-555555555555\n");
}

#[test]
fn defaults_occurred_and_id() {
    let temp = Project::empty();
    let run = temp
        .beacon()
        .args(&["receive"])
        .stdin(r#"{"event": "hello", "resource": {"prefect.resource.id": "a"}}"#)
        .passes();
    let received = run.stdout_json();

    assert!(received["occurred"].is_string());
    assert_eq!(received["id"].as_str().unwrap().len(), 36);
    assert_eq!(received["payload"], serde_json::json!({}));
}
