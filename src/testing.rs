// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use crate::transport::{Response, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory [Transport] that answers from canned responses and records every path it is asked for.
/// Paths without a canned response get a 404 with an empty body.
pub(crate) struct RecordingTransport {
    responses: Mutex<HashMap<String, Response>>,
    requests: Mutex<Vec<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(&self, path: &str, entity: Value) {
        self.insert(
            path,
            Response {
                status: 200,
                entity: Some(entity),
                error: None,
            },
        );
    }

    pub fn fail(&self, path: &str, status: u16, entity: Value) {
        self.insert(
            path,
            Response {
                status,
                entity: Some(entity),
                error: None,
            },
        );
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn insert(&self, path: &str, response: Response) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.into(), response);
    }

    fn answer(&self, path: &str) -> Response {
        self.requests.lock().unwrap().push(path.into());
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or(Response {
                status: 404,
                entity: None,
                error: None,
            })
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str, _entity: Option<&Value>) -> Result<Response> {
        Ok(self.answer(path))
    }

    async fn post(&self, path: &str, _entity: &Value) -> Result<Response> {
        Ok(self.answer(path))
    }
}
