// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{Error, Result};
use crate::query::QueryOptions;
use crate::records::Symbol;
use std::fmt::{Display, Formatter};

/// One id or a list of ids. A single id goes in the path, a list goes in `?ids=`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdSelector {
    One(u64),
    Many(Vec<u64>),
}

impl IdSelector {
    pub(crate) fn path(&self, base: &str) -> String {
        match self {
            IdSelector::One(id) => format!("{base}/{id}"),
            IdSelector::Many(ids) => format!("{base}?ids={}", join(ids)),
        }
    }
}

fn join(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl From<u64> for IdSelector {
    fn from(id: u64) -> Self {
        IdSelector::One(id)
    }
}

impl From<Vec<u64>> for IdSelector {
    fn from(ids: Vec<u64>) -> Self {
        IdSelector::Many(ids)
    }
}

impl From<&[u64]> for IdSelector {
    fn from(ids: &[u64]) -> Self {
        IdSelector::Many(ids.to_vec())
    }
}

impl<const N: usize> From<[u64; N]> for IdSelector {
    fn from(ids: [u64; N]) -> Self {
        IdSelector::Many(ids.to_vec())
    }
}

/// Orders either by id or by filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderQuery {
    Ids(IdSelector),
    Filter(QueryOptions),
}

impl Default for OrderQuery {
    fn default() -> Self {
        OrderQuery::Filter(QueryOptions::default())
    }
}

impl From<IdSelector> for OrderQuery {
    fn from(ids: IdSelector) -> Self {
        OrderQuery::Ids(ids)
    }
}

impl From<u64> for OrderQuery {
    fn from(id: u64) -> Self {
        OrderQuery::Ids(IdSelector::One(id))
    }
}

impl From<Vec<u64>> for OrderQuery {
    fn from(ids: Vec<u64>) -> Self {
        OrderQuery::Ids(IdSelector::Many(ids))
    }
}

impl From<&[u64]> for OrderQuery {
    fn from(ids: &[u64]) -> Self {
        OrderQuery::Ids(ids.into())
    }
}

impl From<QueryOptions> for OrderQuery {
    fn from(options: QueryOptions) -> Self {
        OrderQuery::Filter(options)
    }
}

/// Symbols either by id or by description prefix. Text that parses as an id is an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SymbolQuery {
    Ids(IdSelector),
    Description(String),
}

impl From<u64> for SymbolQuery {
    fn from(id: u64) -> Self {
        SymbolQuery::Ids(IdSelector::One(id))
    }
}

impl From<Vec<u64>> for SymbolQuery {
    fn from(ids: Vec<u64>) -> Self {
        SymbolQuery::Ids(IdSelector::Many(ids))
    }
}

impl From<&[u64]> for SymbolQuery {
    fn from(ids: &[u64]) -> Self {
        SymbolQuery::Ids(ids.into())
    }
}

impl From<&str> for SymbolQuery {
    fn from(text: &str) -> Self {
        match parse_id(text) {
            Some(id) => SymbolQuery::Ids(IdSelector::One(id)),
            None => SymbolQuery::Description(text.into()),
        }
    }
}

impl From<String> for SymbolQuery {
    fn from(text: String) -> Self {
        SymbolQuery::from(text.as_str())
    }
}

/// Anything an instrument id can be read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstrumentRef {
    Id(u64),
    Text(String),
    /// The `symbolId` of a symbol record, if it had one.
    Symbol(Option<u64>),
}

impl InstrumentRef {
    fn id(&self) -> Option<u64> {
        match self {
            InstrumentRef::Id(id) => Some(*id),
            InstrumentRef::Text(text) => parse_id(text),
            InstrumentRef::Symbol(symbol_id) => *symbol_id,
        }
    }
}

impl Display for InstrumentRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InstrumentRef::Id(id) => write!(f, "{id}"),
            InstrumentRef::Text(text) => f.write_str(text),
            InstrumentRef::Symbol(Some(symbol_id)) => write!(f, "{symbol_id}"),
            InstrumentRef::Symbol(None) => f.write_str("undefined"),
        }
    }
}

impl From<u64> for InstrumentRef {
    fn from(id: u64) -> Self {
        InstrumentRef::Id(id)
    }
}

impl From<&str> for InstrumentRef {
    fn from(text: &str) -> Self {
        InstrumentRef::Text(text.into())
    }
}

impl From<String> for InstrumentRef {
    fn from(text: String) -> Self {
        InstrumentRef::Text(text)
    }
}

impl From<&Symbol> for InstrumentRef {
    fn from(symbol: &Symbol) -> Self {
        InstrumentRef::Symbol(symbol.symbol_id)
    }
}

impl From<Symbol> for InstrumentRef {
    fn from(symbol: Symbol) -> Self {
        InstrumentRef::Symbol(symbol.symbol_id)
    }
}

/// Resolves instrument references to ids. Fails on an empty list or on any reference
/// that is not a number.
pub fn instrument_ids<I, R>(refs: I) -> Result<Vec<u64>>
where
    I: IntoIterator<Item = R>,
    R: Into<InstrumentRef>,
{
    let refs: Vec<InstrumentRef> = refs.into_iter().map(Into::into).collect();
    if refs.is_empty() {
        return Err(Error::Argument(
            "No arguments passed to instruments()".into(),
        ));
    }
    let ids: Option<Vec<u64>> = refs.iter().map(InstrumentRef::id).collect();
    ids.ok_or_else(|| {
        let given = refs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Error::Argument(format!(
            "Non-number arguments passed to instruments(): {given}"
        ))
    })
}

/// An 8 digit account number. Leading zeros are dropped before counting.
pub(crate) fn parse_account_number(number: &str) -> Result<u64> {
    parse_id(number)
        .filter(|id| id.to_string().len() == 8)
        .ok_or_else(|| Error::Argument("Invalid account number passed to accounts()".into()))
}

/// A non-negative whole number, written plainly or in decimal/exponent form (`1e7`, `42.0`).
fn parse_id(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Ok(id) = text.parse() {
        return Some(id);
    }
    let number: f64 = text.parse().ok()?;
    let whole = number.is_finite() && number >= 0.0 && number.fract() == 0.0;
    (whole && number < u64::MAX as f64).then_some(number as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn id_selector_paths() {
        assert_eq!(IdSelector::from(42u64).path("orders"), "orders/42");
        assert_eq!(IdSelector::from(vec![1u64, 2, 3]).path("orders"), "orders?ids=1,2,3");
    }

    #[test]
    fn numeric_text_is_a_symbol_id() {
        assert_eq!(SymbolQuery::from("8049"), SymbolQuery::Ids(IdSelector::One(8049)));
        assert_eq!(
            SymbolQuery::from("apple"),
            SymbolQuery::Description("apple".into())
        );
    }

    #[test]
    fn instrument_ids_accept_numbers_text_and_symbols() -> Result<()> {
        let symbol: Symbol = serde_json::from_value(json!({"symbol": "AAPL", "symbolId": 8049}))?;

        let ids = instrument_ids(vec![
            InstrumentRef::from(1u64),
            InstrumentRef::from("2"),
            InstrumentRef::from(&symbol),
        ])?;

        assert_eq!(ids, vec![1, 2, 8049]);
        Ok(())
    }

    #[test]
    fn instrument_ids_reject_non_numbers() {
        let result = instrument_ids(["1", "two", "3"]);
        assert!(matches!(
            result,
            Err(Error::Argument(message)) if message == "Non-number arguments passed to instruments(): 1,two,3"
        ));
    }

    #[test]
    fn instrument_ids_reject_empty_input() {
        let result = instrument_ids(Vec::<u64>::new());
        assert!(matches!(result, Err(Error::Argument(_))));
    }

    #[test]
    fn account_numbers_must_have_eight_digits() {
        assert_eq!(parse_account_number("12345678").ok(), Some(12345678));
        assert_eq!(parse_account_number("012345678").ok(), Some(12345678));
        assert!(parse_account_number("123").is_err());
        assert!(parse_account_number("123456789").is_err());
        assert!(parse_account_number("1234abcd").is_err());
        assert!(parse_account_number("1234567.8").is_err());
    }

    #[test]
    fn account_number_in_exponent_form() {
        assert_eq!(parse_account_number("1e7").ok(), Some(10000000));
        assert_eq!(parse_account_number("2.6598145e7").ok(), Some(26598145));
        assert!(parse_account_number("1e8").is_err());
        assert!(parse_account_number("inf").is_err());
    }
}
