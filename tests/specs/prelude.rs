// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

/// An event with a primary flow run and two workers plus a deployment
pub const FLOW_RUN_EVENT: &str = r#"{
  "occurred": "2024-05-01T12:00:00Z",
  "event": "prefect.flow-run.Completed",
  "resource": {
    "prefect.resource.id": "prefect.flow-run.abc",
    "prefect.resource.name": "cheerful-otter"
  },
  "related": [
    {"prefect.resource.id": "prefect.worker.process.w1", "prefect.resource.role": "worker", "name": "alice"},
    {"prefect.resource.id": "prefect.deployment.d1", "prefect.resource.role": "deployment"},
    {"prefect.resource.id": "prefect.worker.process.w2", "prefect.resource.role": "worker", "name": "bob"}
  ],
  "payload": {"intended": {"from": "RUNNING", "to": "COMPLETED"}},
  "id": "11111111-2222-3333-4444-555555555555",
  "follows": null
}"#;

/// Path to the `beacon` binary, building it once if this run has not
fn beacon_bin() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        let path = assert_cmd::cargo::cargo_bin("beacon");
        if !path.exists() {
            let status = std::process::Command::new(env!("CARGO"))
                .args(["build", "--quiet", "-p", "beacon"])
                .status()
                .expect("failed to run cargo build");
            assert!(status.success(), "cargo build -p beacon failed");
        }
        path
    })
}

/// Temporary working directory for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// A `beacon` invocation running in the project directory
    pub fn beacon(&self) -> CliBuilder {
        let mut cmd = Command::new(beacon_bin());
        cmd.current_dir(self.dir.path());
        // Keep user config and environment out of specs
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join(".config"));
        cmd.env("HOME", self.dir.path());
        cmd.env_remove("BEACON_MAX_LABELS_PER_RESOURCE");
        cmd.env_remove("BEACON_MAX_RELATED_RESOURCES");
        cmd.env_remove("BEACON_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    /// Run and expect exit code 0
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and expect a specific exit code
    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    pub stdout: String,
    pub stderr: String,
}

impl RunAssert {
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(
            self.stdout.contains(needle),
            "stdout missing {:?}:\n{}",
            needle,
            self.stdout
        );
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(
            self.stderr.contains(needle),
            "stderr missing {:?}:\n{}",
            needle,
            self.stderr
        );
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}
