// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the Questrade REST API.
//!
//! A [Provider] is built from an OAuth [Token] and exposes one method per endpoint.
//! Account-scoped endpoints live on the [AccountProvider] returned by [Provider::account].
//! Tokens are renewed with [refresh] and checked with [verify].

pub use auth::{refresh, refresh_with, verify, verify_with};
mod auth;

pub use config::ClientConfig;
pub mod config;

mod context;
pub use context::RequestContext;

pub use error::{Error, FieldError, Result, Upstream, extract_error_message_from_response};
pub mod error;

pub mod adapters;
pub mod filters;

pub use provider::{
    AccountProvider, IdSelector, InstrumentRef, OrderQuery, Provider, SymbolQuery, instrument_ids,
};
mod provider;

pub use query::{QueryOptions, StateFilter, build_query_string};
pub mod query;

pub mod records;

pub use token::{RefreshToken, Token};
mod token;

pub use transport::{HttpTransport, Response, Transport};
pub mod transport;

#[cfg(test)]
mod testing;
