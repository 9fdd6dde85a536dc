//! Error Types
//!
//! Errors for the fallible library surfaces. UI paths never fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlockError {
    #[error("block name is empty")]
    EmptyBlockName,

    #[error("block name `{0}` must start with a letter and contain only letters, digits, `-`, `_` or spaces")]
    InvalidBlockName(String),

    #[error("store namespace `{0}` is not a valid identifier")]
    InvalidNamespace(String),

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("invalid block config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read block config from window: {0}")]
    Js(String),
}

/// Operation dialog field validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("please enter a task name")]
    MissingTitle,

    #[error("please choose a start time")]
    MissingStartTime,

    #[error("start time `{0}` is not a valid date and time")]
    InvalidStartTime(String),

    #[error("please choose an owner")]
    MissingOwner,

    #[error("please enter a description of at least {min} characters")]
    DescriptionTooShort { min: usize },
}
