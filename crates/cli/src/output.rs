// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of command reports

use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print one report: its `Display` form as text, or pretty JSON
pub fn print<T: Serialize + Display>(report: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", report),
        OutputFormat::Json => print_json(report),
    }
}

/// Print rows under a column header, or a JSON array.
///
/// Text mode prints `empty` instead when there are no rows.
pub fn print_table<T: Serialize + Display>(
    header: &str,
    rows: &[T],
    empty: &str,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(rows),
        OutputFormat::Text if rows.is_empty() => println!("{}", empty),
        OutputFormat::Text => {
            println!("{}", header);
            for row in rows {
                println!("{}", row);
            }
        }
    }
}

/// Print pretty JSON regardless of format
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!(error = %e, "failed to render JSON"),
    }
}
