// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Label value pattern matching

/// Check if a label pattern matches an observed label value.
///
/// Supports:
///   - Exact: "prefect.flow-run.123"
///   - Prefix wildcard: "prefect.flow-run.*" matches any value starting with "prefect.flow-run."
///   - Negation: "!worker" matches anything but "worker"; "!prefect.*" anything not starting with "prefect."
///
/// An absent value never matches, negated or not.
pub fn matches(pattern: &str, observed: Option<&str>) -> bool {
    let Some(value) = observed else {
        return false;
    };

    let (positive, pattern) = match pattern.strip_prefix('!') {
        Some(rest) => (false, rest),
        None => (true, pattern),
    };

    let matched = match pattern.strip_suffix('*') {
        Some(prefix) => value.starts_with(prefix),
        None => value == pattern,
    };

    matched == positive
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
