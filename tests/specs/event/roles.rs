// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `beacon roles` specs

use crate::prelude::*;

#[test]
fn lists_roles_with_first_resource_and_count() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    temp.beacon()
        .args(&["roles", "event.json"])
        .passes()
        .stdout_eq(&format!(
            "{:<15} {:<40} COUNT\n{:<15} {:<40} 1\n{:<15} {:<40} 2\n",
            "ROLE",
            "FIRST",
            "deployment",
            "prefect.deployment.d1",
            "worker",
            "prefect.worker.process.w1",
        ));
}

#[test]
fn json_lists_every_resource_per_role() {
    let temp = Project::empty();
    temp.file("event.json", FLOW_RUN_EVENT);

    let run = temp
        .beacon()
        .args(&["roles", "event.json", "--format", "json"])
        .passes();
    let roles = run.stdout_json();
    assert_eq!(roles[1]["role"], "worker");
    assert_eq!(roles[1]["first"], "prefect.worker.process.w1");
    assert_eq!(
        roles[1]["resources"],
        serde_json::json!(["prefect.worker.process.w1", "prefect.worker.process.w2"])
    );
}

#[test]
fn event_without_related_resources() {
    let temp = Project::empty();
    temp.beacon()
        .args(&["roles"])
        .stdin(r#"{"event": "hello", "resource": {"prefect.resource.id": "a"}}"#)
        .passes()
        .stdout_eq("No related resources\n");
}
