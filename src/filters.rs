// Copyright (C) 2025 Agostinho Junior
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::records::Symbol;

/// Only symbols that can be traded. A symbol that does not say is treated as not tradable.
pub fn tradable_symbol(symbol: &Symbol) -> bool {
    symbol.is_tradable.unwrap_or(false)
}

pub mod array {
    use crate::records::Symbol;

    pub fn tradable_symbol(symbols: Vec<Symbol>) -> Vec<Symbol> {
        symbols.into_iter().filter(super::tradable_symbol).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn keeps_only_tradable_symbols() -> Result<()> {
        let symbols: Vec<Symbol> = serde_json::from_value(json!([
            {"symbol": "AAPL", "symbolId": 8049, "isTradable": true},
            {"symbol": "AAPL.IX", "symbolId": 8050, "isTradable": false},
            {"symbol": "AAPL.OLD", "symbolId": 8051}
        ]))?;

        let tradable = array::tradable_symbol(symbols);

        assert_eq!(tradable.len(), 1);
        assert_eq!(tradable[0].symbol_id, Some(8049));
        Ok(())
    }
}
