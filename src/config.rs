// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_LOGIN_URL: &str = "https://login.questrade.com/oauth2/token";

/// Settings shared by every transport built for a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Requests that take longer than this are aborted.
    pub timeout: Duration,
    /// OAuth token endpoint used by [crate::refresh].
    pub login_url: String,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            login_url: DEFAULT_LOGIN_URL.into(),
        }
    }
}
