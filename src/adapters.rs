// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalized record shapes derived from the wire records.

use crate::records::{Account, Symbol};
use serde::Serialize;
use serde_json::{Map, Value};

/// An account reduced to what identifies it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// A symbol keyed by `id` instead of `symbolId`, with `securityType` exposed as `type`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSummary {
    pub id: Option<u64>,
    pub symbol: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    pub description: Option<String>,
    pub listing_exchange: Option<String>,
    pub currency: Option<String>,
    pub is_tradable: Option<bool>,
    pub is_quotable: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn account(account: &Account) -> AccountSummary {
    AccountSummary {
        id: account.number.clone(),
        status: account.status.clone(),
        type_: account.type_.clone(),
    }
}

pub fn symbol(symbol: &Symbol) -> SymbolSummary {
    SymbolSummary {
        id: symbol.symbol_id,
        symbol: symbol.symbol.clone(),
        type_: symbol.security_type.clone(),
        description: symbol.description.clone(),
        listing_exchange: symbol.listing_exchange.clone(),
        currency: symbol.currency.clone(),
        is_tradable: symbol.is_tradable,
        is_quotable: symbol.is_quotable,
        extra: symbol.extra.clone(),
    }
}

/// Adapters applied to every element of a slice.
pub mod array {
    use super::{AccountSummary, SymbolSummary};
    use crate::records::{Account, Symbol};

    pub fn account(accounts: &[Account]) -> Vec<AccountSummary> {
        accounts.iter().map(super::account).collect()
    }

    pub fn symbol(symbols: &[Symbol]) -> Vec<SymbolSummary> {
        symbols.iter().map(super::symbol).collect()
    }
}
