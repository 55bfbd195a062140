// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::ClientConfig;
use crate::error::Result;
use crate::token::Token;
use async_trait::async_trait;
use serde_json::Value;

pub use http::HttpTransport;
mod http;

/// A way of issuing requests against the API.
///
/// Implementations prefix paths and attach credentials themselves, so callers only pass the
/// endpoint path. [HttpTransport] is the production implementation; anything else (a recording
/// stub, a proxy) can be plugged into a [crate::Provider] through [crate::Provider::with_transport].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET. The entity, when given, is sent as a JSON body.
    async fn get(&self, path: &str, entity: Option<&Value>) -> Result<Response>;

    async fn post(&self, path: &str, entity: &Value) -> Result<Response>;
}

/// A response as seen by the endpoint layer. Error statuses are values, not failures.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    /// The decoded JSON body, absent when the body was empty or could not be decoded.
    pub entity: Option<Value>,
    pub error: Option<Fault>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.error.is_none() && (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fault {
    pub code: String,
}

/// How to build a transport. Without `auth_header_name` requests go out unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub provider: Option<String>,
    pub auth_header_name: Option<String>,
    pub path_prefix: Option<String>,
    pub token_prefix: Option<String>,
    pub token: Option<String>,
}

pub fn request(options: RequestOptions, config: &ClientConfig) -> Result<HttpTransport> {
    HttpTransport::new(options, config)
}

/// Builds the transport for an authenticated session: `Authorization: <token_type> <access_token>`
/// on every request and every path resolved under `<api_server>v1/`.
pub fn auth_request(token: &Token, config: &ClientConfig) -> Result<HttpTransport> {
    request(
        RequestOptions {
            provider: Some("questrade".into()),
            auth_header_name: Some("Authorization".into()),
            path_prefix: Some(format!("{}v1/", token.api_server)),
            token_prefix: Some(token.token_type.clone()),
            token: Some(token.access_token.clone()),
        },
        config,
    )
}
