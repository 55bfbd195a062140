// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

//! Records as the API returns them.
//!
//! Only the documented fields are typed. Everything else lands in `extra`, so a record
//! serializes back to the shape it was received in. Absent fields stay absent, and a
//! field of the wrong shape decodes as missing instead of failing the whole response.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_this_or_that::{as_opt_string, as_opt_u64};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, deserialize_with = "as_opt_string", skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_account_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub cash: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub market_value: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub total_equity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub buying_power: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub maintenance_excess: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_real_time: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Account balances, per currency and combined, current and start-of-day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(default)]
    pub per_currency_balances: Vec<Balance>,
    #[serde(default)]
    pub combined_balances: Vec<Balance>,
    #[serde(default)]
    pub sod_per_currency_balances: Vec<Balance>,
    #[serde(default)]
    pub sod_combined_balances: Vec<Balance>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub commission: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<BigDecimal>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub commission: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub total_quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub open_quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub filled_quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub canceled_quantity: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub avg_exec_price: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub open_quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub closed_quantity: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub current_market_value: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub current_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub average_entry_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub closed_pnl: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub open_pnl: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_real_time: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub trading_venues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_trading_venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub bid_size: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub ask_price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub ask_size: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub last_trade_price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub last_trade_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trade_time: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub open_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub high_price: Option<BigDecimal>,
    #[serde(default, with = "money", skip_serializing_if = "Option::is_none")]
    pub low_price: Option<BigDecimal>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_halted: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A symbol, either from a lookup by id or from a description search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "as_opt_u64", skip_serializing_if = "Option::is_none")]
    pub symbol_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_exchange: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_tradable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_quotable: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Money and quantities. Prices arrive as JSON floats, so they are read through their
/// shortest decimal form (`83.65` stays `83.65`) and written back as numbers.
mod money {
    use bigdecimal::{BigDecimal, ToPrimitive};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;
    use std::str::FromStr;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigDecimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = match Option::<Value>::deserialize(deserializer)? {
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::String(text)) if !text.is_empty() => text,
            _ => return Ok(None),
        };
        BigDecimal::from_str(&text)
            .map(Some)
            .map_err(|error| D::Error::custom(format!("invalid decimal {text}: {error}")))
    }

    pub fn serialize<S>(value: &Option<BigDecimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Some(value) = value else {
            return serializer.serialize_none();
        };
        if value.fractional_digit_count() <= 0 {
            if let Some(integer) = value.to_i64() {
                return serializer.serialize_i64(integer);
            }
        }
        let text = value.to_string();
        match f64::from_str(&text) {
            Ok(float) if float.is_finite() => serializer.serialize_f64(float),
            _ => serializer.serialize_str(&text),
        }
    }
}
