// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod label;
pub mod matches;
pub mod receive;
pub mod roles;
pub mod validate;

/// How a command finished when it did not error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command found what it was asked about
    Found,
    /// The command ran but found nothing (no match, no label)
    NotFound,
}
