// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Result, anyhow};
use questrade::{Provider, QueryOptions, StateFilter, adapters};

#[tokio::main]
async fn main() -> Result<()> {
    // Pass a refresh token issued from the Questrade API hub
    let refresh_token = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: list_accounts <refresh token>"))?;

    // Exchange it for an access token bound to an API server
    let token = questrade::refresh(refresh_token).await?;
    let provider = Provider::new(&token)?;

    println!("Server time: {}", provider.time().await?);
    println!("User: {}", provider.user().await?);

    for account in adapters::array::account(&provider.accounts().await?) {
        let Some(number) = account.id else {
            continue;
        };
        println!("{number} ({:?}, {:?})", account.type_, account.status);

        let open_orders = provider
            .account(&number)?
            .orders(QueryOptions::new().state(StateFilter::Open))
            .await?;
        println!("  open orders: {}", open_orders.len());
    }

    Ok(())
}
