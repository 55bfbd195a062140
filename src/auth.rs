// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::ClientConfig;
use crate::error::{Result, extract_error_message_from_response};
use crate::token::{RefreshToken, Token};
use crate::transport::{RequestOptions, Response, Transport, auth_request, request};

/// Exchanges a refresh token for a new [Token]. The request is not authenticated.
pub async fn refresh(token: impl Into<RefreshToken>) -> Result<Token> {
    let config = ClientConfig::default();
    let transport = request(RequestOptions::default(), &config)?;
    refresh_with(&transport, &config, token).await
}

pub async fn refresh_with(
    transport: &dyn Transport,
    config: &ClientConfig,
    token: impl Into<RefreshToken>,
) -> Result<Token> {
    let RefreshToken(refresh_token) = token.into();
    let url = format!(
        "{}?grant_type=refresh_token&refresh_token={}",
        config.login_url,
        urlencoding::encode(&refresh_token)
    );
    let response = transport.get(&url, None).await?;
    if !response.is_success() {
        return Err(extract_error_message_from_response(&response));
    }
    let entity = response.entity.unwrap_or_default();
    Ok(serde_json::from_value(entity)?)
}

/// Checks that the API currently accepts `token` by asking for the server time.
pub async fn verify(token: &Token) -> Result<Response> {
    let transport = auth_request(token, &ClientConfig::default())?;
    verify_with(&transport).await
}

pub async fn verify_with(transport: &dyn Transport) -> Result<Response> {
    let response = transport.get("time", None).await?;
    if !response.is_success() {
        return Err(extract_error_message_from_response(&response));
    }
    Ok(response)
}
