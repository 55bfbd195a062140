// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::context::{RequestContext, field};
use crate::error::Result;
use crate::provider::selector::{InstrumentRef, OrderQuery, instrument_ids};
use crate::query::{ACCOUNTS, QueryOptions, build_query_string, with_query};
use crate::records::{Activity, Balances, Execution, Order, Position};

/// Endpoints of a single account, all resolved under `accounts/{number}/`.
#[derive(Clone, Debug)]
pub struct AccountProvider {
    context: RequestContext,
}

impl AccountProvider {
    pub(crate) fn new(context: RequestContext) -> Self {
        Self { context }
    }

    pub async fn activities(&self, options: QueryOptions) -> Result<Vec<Activity>> {
        let url = with_query("activities", &build_query_string(&options, &ACCOUNTS)?);
        self.context
            .get(&url, |entity| field(entity, "activities"))
            .await
    }

    pub async fn balances(&self) -> Result<Balances> {
        self.context
            .get("balances", |entity| Ok(serde_json::from_value(entity)?))
            .await
    }

    pub async fn executions(&self, options: QueryOptions) -> Result<Vec<Execution>> {
        let url = with_query("executions", &build_query_string(&options, &ACCOUNTS)?);
        self.context
            .get(&url, |entity| field(entity, "executions"))
            .await
    }

    /// Normalizes instrument references to ids. No request is issued.
    pub fn instruments<I, R>(&self, refs: I) -> Result<Vec<u64>>
    where
        I: IntoIterator<Item = R>,
        R: Into<InstrumentRef>,
    {
        instrument_ids(refs)
    }

    /// Orders by id (`orders/{id}`, `orders?ids=`) or filtered by [QueryOptions].
    pub async fn orders(&self, query: impl Into<OrderQuery>) -> Result<Vec<Order>> {
        let url = match query.into() {
            OrderQuery::Ids(ids) => ids.path("orders"),
            OrderQuery::Filter(options) => {
                with_query("orders", &build_query_string(&options, &ACCOUNTS)?)
            }
        };
        self.context
            .get(&url, |entity| field(entity, "orders"))
            .await
    }

    pub async fn positions(&self) -> Result<Vec<Position>> {
        self.context
            .get("positions", |entity| field(entity, "positions"))
            .await
    }
}
