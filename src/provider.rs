// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::config::ClientConfig;
use crate::context::{RequestContext, field};
use crate::error::{Error, Result};
use crate::filters;
use crate::records::{Account, Market, Quote, Symbol};
use crate::token::Token;
use crate::transport::{Transport, auth_request};
use chrono::{DateTime, FixedOffset, Utc};
use std::fmt::Display;
use std::sync::Arc;

pub use account::AccountProvider;
mod account;

pub use selector::{IdSelector, InstrumentRef, OrderQuery, SymbolQuery, instrument_ids};
mod selector;

/// Authenticated client for one Questrade session.
///
/// Cloning is cheap and clones share the same transport. Every method issues exactly one
/// request; nothing is cached or retried.
///
/// # Example
///
/// ```no_run
/// use questrade::{Provider, QueryOptions, StateFilter, Token};
///
/// # async fn run(token: Token) -> questrade::Result<()> {
/// let provider = Provider::new(&token)?;
/// let account = provider.account("26598145")?;
/// let open_orders = account
///     .orders(QueryOptions::new().state(StateFilter::Open))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Provider {
    context: RequestContext,
}

impl Provider {
    pub fn new(token: &Token) -> Result<Self> {
        Self::with_config(token, &ClientConfig::default())
    }

    pub fn with_config(token: &Token, config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(Arc::new(auth_request(token, config)?)))
    }

    /// A provider on top of an already authenticated transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            context: RequestContext::new(transport),
        }
    }

    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.context
            .get("accounts", |entity| field(entity, "accounts"))
            .await
    }

    /// Endpoints scoped to one account. The number must be a whole number of exactly 8
    /// digits; exponent forms such as `"2.6598145e7"` are read as numbers.
    pub fn account(&self, number: impl Display) -> Result<AccountProvider> {
        let number = selector::parse_account_number(&number.to_string())?;
        Ok(AccountProvider::new(
            self.context.nested(&format!("accounts/{number}/")),
        ))
    }

    pub async fn markets(&self) -> Result<Vec<Market>> {
        self.context
            .get("markets", |entity| field(entity, "markets"))
            .await
    }

    pub async fn quotes(&self, ids: impl Into<IdSelector>) -> Result<Vec<Quote>> {
        let url = ids.into().path("markets/quotes");
        self.context
            .get(&url, |entity| field(entity, "quotes"))
            .await
    }

    /// Symbols by id, or a description search when given text that is not a number.
    pub async fn symbols(&self, query: impl Into<SymbolQuery>) -> Result<Vec<Symbol>> {
        match query.into() {
            SymbolQuery::Ids(ids) => {
                let url = ids.path("symbols");
                self.context
                    .get(&url, |entity| field(entity, "symbols"))
                    .await
            }
            SymbolQuery::Description(prefix) => self.search_symbols(&prefix, None).await,
        }
    }

    /// Symbols whose description starts with `prefix`. Only tradable symbols are returned.
    pub async fn search_symbols(&self, prefix: &str, offset: Option<i64>) -> Result<Vec<Symbol>> {
        let mut url = format!("symbols/search?prefix={}", urlencoding::encode(prefix));
        if let Some(offset) = offset {
            if offset < 0 {
                return Err(Error::Argument(format!(
                    "Offset must be an integer greater than or equal to zero.Given value: {offset}"
                )));
            }
            url = format!("{url}&offset={offset}");
        }
        self.context
            .get(&url, |entity| {
                field(entity, "symbols").map(filters::array::tradable_symbol)
            })
            .await
    }

    /// Current server time. The server reports it with an offset; it is returned in UTC.
    pub async fn time(&self) -> Result<DateTime<Utc>> {
        self.context
            .get("time", |entity| {
                field::<DateTime<FixedOffset>>(entity, "time").map(|time| time.with_timezone(&Utc))
            })
            .await
    }

    /// Id of the user owning the session's accounts.
    pub async fn user(&self) -> Result<u64> {
        self.context
            .get("accounts", |entity| field(entity, "userId"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use anyhow::Result;
    use bigdecimal::BigDecimal;
    use chrono::TimeZone;
    use serde_json::json;
    use std::str::FromStr;

    fn provider() -> (Provider, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        (Provider::with_transport(transport.clone()), transport)
    }

    #[tokio::test]
    async fn accounts_returns_account_list() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "accounts",
            json!({
                "accounts": [
                    {"type": "Margin", "number": "26598145", "status": "Active", "isPrimary": true},
                    {"type": "TFSA", "number": "26598146", "status": "Active", "isPrimary": false}
                ],
                "userId": 3000124
            }),
        );

        let accounts = provider.accounts().await?;

        assert_eq!(transport.requests(), vec!["accounts"]);
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].number.as_deref(), Some("26598145"));
        assert_eq!(accounts[1].type_.as_deref(), Some("TFSA"));
        Ok(())
    }

    #[tokio::test]
    async fn account_without_number_does_not_fail_the_list() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "accounts",
            json!({"accounts": [{"type": "Margin", "status": "Active"}]}),
        );

        let accounts = provider.accounts().await?;

        assert_eq!(accounts[0].number, None);
        assert_eq!(accounts[0].type_.as_deref(), Some("Margin"));
        Ok(())
    }

    #[tokio::test]
    async fn user_reads_user_id_from_accounts() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond("accounts", json!({"accounts": [], "userId": 3000124}));

        assert_eq!(provider.user().await?, 3000124);
        assert_eq!(transport.requests(), vec!["accounts"]);
        Ok(())
    }

    #[test]
    fn account_requires_eight_digits() {
        let (provider, _) = provider();
        assert!(provider.account(12345678).is_ok());
        assert!(matches!(provider.account(123), Err(Error::Argument(_))));
        assert!(matches!(provider.account("abc"), Err(Error::Argument(_))));
    }

    #[tokio::test]
    async fn markets_are_extracted() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "markets",
            json!({"markets": [{"name": "TSX", "tradingVenues": ["TSX", "ALPH"], "currency": "CAD"}]}),
        );

        let markets = provider.markets().await?;

        assert_eq!(markets[0].name.as_deref(), Some("TSX"));
        assert_eq!(markets[0].trading_venues, vec!["TSX", "ALPH"]);
        Ok(())
    }

    #[tokio::test]
    async fn quotes_by_one_or_many_ids() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "markets/quotes/2434553",
            json!({"quotes": [{"symbol": "THI.TO", "symbolId": 2434553, "bidPrice": 83.65, "volume": 1.5e3}]}),
        );
        transport.respond(
            "markets/quotes?ids=2434553,8049",
            json!({"quotes": [{"symbolId": 2434553}, {"symbolId": 8049}]}),
        );

        let single = provider.quotes(2434553u64).await?;
        let many = provider.quotes(vec![2434553u64, 8049]).await?;

        assert_eq!(single[0].symbol.as_deref(), Some("THI.TO"));
        assert_eq!(single[0].bid_price, Some(BigDecimal::from_str("83.65")?));
        assert_eq!(single[0].volume, Some(1500));
        assert_eq!(many.len(), 2);
        assert_eq!(
            transport.requests(),
            vec!["markets/quotes/2434553", "markets/quotes?ids=2434553,8049"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn symbols_by_id_are_not_filtered() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "symbols?ids=8049,9291",
            json!({"symbols": [
                {"symbol": "AAPL", "symbolId": 8049, "isTradable": true},
                {"symbol": "BBD.B.TO", "symbolId": 9291, "isTradable": false}
            ]}),
        );
        transport.respond("symbols/8049", json!({"symbols": [{"symbolId": 8049}]}));

        assert_eq!(provider.symbols(vec![8049u64, 9291]).await?.len(), 2);
        assert_eq!(provider.symbols(8049u64).await?.len(), 1);
        assert_eq!(provider.symbols("8049").await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn symbol_search_keeps_only_tradable() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "symbols/search?prefix=apple",
            json!({"symbols": [
                {"symbol": "AAPL", "symbolId": 8049, "description": "Apple Inc.", "isTradable": true},
                {"symbol": "APLE", "symbolId": 1, "description": "Apple Hospitality", "isTradable": false}
            ]}),
        );

        let symbols = provider.symbols("apple").await?;

        assert_eq!(transport.requests(), vec!["symbols/search?prefix=apple"]);
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].symbol_id, Some(8049));
        Ok(())
    }

    #[tokio::test]
    async fn symbol_search_with_offset_and_encoded_prefix() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond(
            "symbols/search?prefix=bank%20of&offset=20",
            json!({"symbols": []}),
        );

        let symbols = provider.search_symbols("bank of", Some(20)).await?;

        assert!(symbols.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn negative_offset_fails_without_request() -> Result<()> {
        let (provider, transport) = provider();

        let result = provider.search_symbols("apple", Some(-1)).await;

        assert!(matches!(result, Err(Error::Argument(_))));
        assert!(transport.requests().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn time_is_converted_to_utc() -> Result<()> {
        let (provider, transport) = provider();
        transport.respond("time", json!({"time": "2014-10-24T12:14:42.730000-04:00"}));

        let time = provider.time().await?;

        let expected = Utc.with_ymd_and_hms(2014, 10, 24, 16, 14, 42).unwrap()
            + chrono::Duration::milliseconds(730);
        assert_eq!(time, expected);
        Ok(())
    }

    #[tokio::test]
    async fn upstream_message_is_surfaced() -> Result<()> {
        let (provider, transport) = provider();
        transport.fail(
            "markets",
            401,
            json!({"code": 1017, "message": "Access token is invalid"}),
        );

        let result = provider.markets().await;

        assert_eq!(
            result.map_err(|err| err.to_string()).err().as_deref(),
            Some("Access token is invalid")
        );
        Ok(())
    }
}
