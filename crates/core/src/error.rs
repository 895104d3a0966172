// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Construction-time validation errors

use thiserror::Error;

/// Why a resource, related resource or event was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("resources must include the {label} label")]
    MissingLabel { label: &'static str },
    #[error("related resources must include the {label} label")]
    MissingRelatedLabel { label: &'static str },
    #[error("the {label} label must be non-empty")]
    EmptyLabel { label: &'static str },
    #[error("the maximum number of labels per resource is {max}")]
    TooManyLabels { max: usize },
    #[error("the maximum number of related resources is {max}")]
    TooManyRelatedResources { max: usize },
}
