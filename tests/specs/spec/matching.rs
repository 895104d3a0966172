// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon match` specs

use crate::prelude::*;

#[test]
fn inline_spec_matching_primary_resource() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&[
            "match",
            "--spec",
            r#"{"prefect.resource.id": "prefect.flow-run.*"}"#,
            "event.json",
        ])
        .passes()
        .stdout_eq("match\n");
}

#[test]
fn spec_matching_related_resource() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    let run = temp
        .beacon()
        .args(&[
            "match",
            "--spec",
            r#"{"prefect.resource.role": "worker", "name": ["bob", "carol"]}"#,
            "event.json",
            "--format",
            "json",
        ])
        .passes();
    let report = run.stdout_json();
    assert_eq!(report["matched"], true);
    assert_eq!(
        report["resources"],
        serde_json::json!(["prefect.worker.process.w2"])
    );
}

#[test]
fn negated_pattern_excludes_resources() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&[
            "match",
            "--spec",
            r#"{"prefect.resource.id": "!prefect.*"}"#,
            "event.json",
        ])
        .exits(1)
        .stdout_eq("no match\n");
}

#[test]
fn spec_from_file() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);
    temp.file(
        "spec.json",
        r#"{"prefect.resource.id": ["prefect.deployment.d1"]}"#,
    );

    temp.beacon()
        .args(&["match", "--spec", "spec.json", "event.json"])
        .passes()
        .stdout_eq("match\n");
}

#[test]
fn empty_spec_matches_any_event() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["match", "--spec", "{}", "event.json"])
        .passes()
        .stdout_eq("match\n");
}

#[test]
fn absent_label_never_matches() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["match", "--spec", r#"{"color": "!red"}"#, "event.json"])
        .exits(1);
}

#[test]
fn invalid_spec_json_is_an_error() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["match", "--spec", r#"{"a": 3}"#, "event.json"])
        .exits(2)
        .stderr_has("Could not decode a resource specification from --spec");
}
