// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{Fault, RequestOptions, Response, Transport};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use std::time::Instant;

const MIME_DESERIALIZATION: &str = "mime-deserialization";

/// [Transport] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    provider: String,
    path_prefix: String,
}

impl HttpTransport {
    pub fn new(options: RequestOptions, config: &ClientConfig) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(name) = &options.auth_header_name {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| Error::InvalidHeader(err.to_string()))?;
            let mut value = HeaderValue::from_str(&format!(
                "{} {}",
                options.token_prefix.as_deref().unwrap_or_default(),
                options.token.as_deref().unwrap_or_default()
            ))
            .map_err(|err| Error::InvalidHeader(err.to_string()))?;
            value.set_sensitive(true);
            header_map.insert(name, value);
        }

        let client = reqwest::ClientBuilder::new()
            .default_headers(header_map)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            provider: options.provider.unwrap_or_default(),
            path_prefix: options.path_prefix.unwrap_or_default(),
        })
    }

    /// Absolute URLs are used verbatim, anything else goes under the path prefix. Query strings
    /// embedded in the path travel along untouched.
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.into();
        }
        if self.path_prefix.is_empty() {
            return path.into();
        }
        format!(
            "{}/{}",
            self.path_prefix.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        entity: Option<&Value>,
    ) -> Result<Response> {
        let url = self.resolve(path);
        let mut builder: RequestBuilder = self.client.request(method.clone(), &url);
        if let Some(entity) = entity {
            builder = builder.json(entity);
        }

        let started = Instant::now();
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        tracing::debug!(
            provider = %self.provider,
            %method,
            %url,
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );

        if body.is_empty() {
            return Ok(Response {
                status,
                entity: None,
                error: None,
            });
        }
        match serde_json::from_slice::<Value>(&body) {
            Ok(entity) => Ok(Response {
                status,
                entity: Some(entity),
                error: None,
            }),
            Err(err) => {
                tracing::warn!(%url, status, "response body is not JSON: {err}");
                Ok(Response {
                    status,
                    entity: None,
                    error: Some(Fault {
                        code: MIME_DESERIALIZATION.into(),
                    }),
                })
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, entity: Option<&Value>) -> Result<Response> {
        self.execute(Method::GET, path, entity).await
    }

    async fn post(&self, path: &str, entity: &Value) -> Result<Response> {
        self.execute(Method::POST, path, Some(entity)).await
    }
}
