// src/stocks/definitions.rs
//! The fixed ticker universe the dashboard can show.
//
//! Nothing is discovered at runtime; every ticker the picker offers and
//! every column the loader fetches comes from `default_universe()`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type Symbol = String;

/// First trading date the loader asks the data source for.
pub fn history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid calendar date")
}

/// Immutable facts about a listed company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    /// NASDAQ / NYSE ticker (e.g. "AAPL").
    pub ticker: Symbol,
    /// Human-readable company name, shown in hover labels.
    pub company_name: String,
}

impl Stock {
    #[inline]
    pub fn new<T1: Into<String>, T2: Into<String>>(ticker: T1, company_name: T2) -> Self {
        Self {
            ticker: ticker.into(),
            company_name: company_name.into(),
        }
    }
}

/// The tech-giant universe. Order here is the column order of the loaded
/// price table and the order the picker lists tickers in.
pub fn default_universe() -> Vec<Stock> {
    vec![
        Stock::new("AAPL", "Apple Inc."),
        Stock::new("MSFT", "Microsoft Corporation"),
        Stock::new("GOOG", "Alphabet Inc."),
        Stock::new("AMZN", "Amazon.com, Inc."),
        Stock::new("META", "Meta Platforms, Inc."),
        Stock::new("TSLA", "Tesla, Inc."),
        Stock::new("NVDA", "NVIDIA Corporation"),
        Stock::new("INTC", "Intel Corporation"),
        Stock::new("ADBE", "Adobe Inc."),
        Stock::new("NFLX", "Netflix, Inc."),
        Stock::new("CSCO", "Cisco Systems, Inc."),
        Stock::new("PYPL", "PayPal Holdings, Inc."),
        Stock::new("AMD", "Advanced Micro Devices, Inc."),
        Stock::new("QCOM", "Qualcomm Incorporated"),
        Stock::new("AVGO", "Broadcom Inc."),
        Stock::new("CRM", "Salesforce, Inc."),
        Stock::new("ORCL", "Oracle Corporation"),
    ]
}

/// Tickers pre-checked in the picker before the user touches anything.
pub fn default_selection() -> Vec<Symbol> {
    ["AAPL", "GOOG", "AMZN", "META", "NVDA"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Looks a ticker up in the universe.
pub fn find_stock<'a>(universe: &'a [Stock], ticker: &str) -> Option<&'a Stock> {
    universe.iter().find(|s| s.ticker == ticker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_has_no_duplicate_tickers() {
        let universe = default_universe();
        let mut tickers: Vec<&str> = universe.iter().map(|s| s.ticker.as_str()).collect();
        tickers.sort();
        tickers.dedup();
        assert_eq!(tickers.len(), universe.len());
    }

    #[test]
    fn default_selection_is_subset_of_universe() {
        let universe = default_universe();
        for ticker in default_selection() {
            assert!(
                find_stock(&universe, &ticker).is_some(),
                "{ticker} not in universe"
            );
        }
    }

    #[test]
    fn selection_default_matches_picker_default() {
        assert_eq!(
            default_selection(),
            vec!["AAPL", "GOOG", "AMZN", "META", "NVDA"]
        );
    }
}
