// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Result, extract_error_message_from_response};
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Issues GETs for the endpoint methods: every path is resolved under `prefix`, failed
/// responses become errors and the entity of successful ones is handed to a transform.
#[derive(Clone)]
pub struct RequestContext {
    transport: Arc<dyn Transport>,
    prefix: String,
}

impl RequestContext {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            prefix: String::new(),
        }
    }

    /// A context sharing this one's transport, with `segment` appended to its prefix.
    pub fn nested(&self, segment: &str) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            prefix: format!("{}{}", self.prefix, segment),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub async fn get<T, F>(&self, path: &str, transform: F) -> Result<T>
    where
        F: FnOnce(Value) -> Result<T>,
    {
        let path = format!("{}{}", self.prefix, path);
        tracing::debug!(%path, "GET");
        let response = self.transport.get(&path, None).await?;
        if !response.is_success() {
            let error = extract_error_message_from_response(&response);
            tracing::warn!(%path, status = response.status, "request failed: {error}");
            return Err(error);
        }
        transform(response.entity.unwrap_or(Value::Null))
    }
}

impl Debug for RequestContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Takes `name` out of an entity object and decodes it. A missing field decodes from `null`.
pub(crate) fn field<T: DeserializeOwned>(entity: Value, name: &str) -> Result<T> {
    let value = match entity {
        Value::Object(mut map) => map.remove(name).unwrap_or(Value::Null),
        _ => Value::Null,
    };
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Upstream};
    use crate::testing::RecordingTransport;
    use anyhow::Result;
    use serde_json::json;

    #[tokio::test]
    async fn nested_context_prefixes_paths() -> Result<()> {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond("accounts/12345678/positions", json!({"positions": []}));
        let context = RequestContext::new(transport.clone()).nested("accounts/12345678/");

        let positions: Vec<Value> = context
            .get("positions", |entity| field(entity, "positions"))
            .await?;

        assert!(positions.is_empty());
        assert_eq!(context.prefix(), "accounts/12345678/");
        assert_eq!(transport.requests(), vec!["accounts/12345678/positions"]);
        Ok(())
    }

    #[tokio::test]
    async fn failed_response_goes_through_error_extraction() -> Result<()> {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail("time", 401, json!({"code": 1017, "message": "Access token is invalid"}));
        let context = RequestContext::new(transport);

        let result = context.get("time", Ok).await;

        assert!(matches!(
            result,
            Err(Error::Upstream(Upstream::Message(message))) if message == "Access token is invalid"
        ));
        Ok(())
    }

    #[test]
    fn missing_field_decodes_from_null() -> Result<()> {
        let value: Option<u64> = field(json!({"other": 1}), "userId")?;
        assert_eq!(value, None);
        Ok(())
    }
}
