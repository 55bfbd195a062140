// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::transport::Response;
use serde_json::Value;
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a call on this crate can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Query options rejected by their field descriptors. Carries every failure, not just the first.
    #[error("validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// Malformed method arguments, raised before any request is issued.
    #[error("{0}")]
    Argument(String),

    /// The API answered, but with a failure.
    #[error("{0}")]
    Upstream(Upstream),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failure payload extracted from a response, see [extract_error_message_from_response].
#[derive(Clone, Debug, PartialEq)]
pub enum Upstream {
    Code(String),
    Message(String),
    Raw(Value),
    Unknown,
}

impl Display for Upstream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Upstream::Code(code) => f.write_str(code),
            Upstream::Message(message) => f.write_str(message),
            Upstream::Raw(entity) => write!(f, "{entity}"),
            Upstream::Unknown => f.write_str("Unknown internal error"),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| error.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Turns a failed response into an [Error].
///
/// A transport fault code wins over anything in the entity; after that the entity's `message`,
/// then the raw entity itself. A response carrying none of these is an unknown error.
pub fn extract_error_message_from_response(response: &Response) -> Error {
    if let Some(fault) = &response.error {
        return Error::Upstream(Upstream::Code(fault.code.clone()));
    }
    let upstream = match &response.entity {
        Some(entity) => match entity.get("message").and_then(Value::as_str) {
            Some(message) => Upstream::Message(message.into()),
            None => Upstream::Raw(entity.clone()),
        },
        None => Upstream::Unknown,
    };
    Error::Upstream(upstream)
}
