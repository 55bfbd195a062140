// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// OAuth credential bundle issued by the Questrade login server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    /// Base URL of the API server assigned to this session, e.g. `https://api01.iq.questrade.com/`.
    pub api_server: String,
    pub refresh_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    /// Whatever else the login server sent along.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Anything a refresh token can be read from: a bare token string or a whole [Token].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshToken(pub String);

impl From<&str> for RefreshToken {
    fn from(token: &str) -> Self {
        Self(token.into())
    }
}

impl From<String> for RefreshToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&Token> for RefreshToken {
    fn from(token: &Token) -> Self {
        Self(token.refresh_token.clone())
    }
}

impl From<Token> for RefreshToken {
    fn from(token: Token) -> Self {
        Self(token.refresh_token)
    }
}
