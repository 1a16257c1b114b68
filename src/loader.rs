// src/loader.rs
//! Startup bulk fetch: daily adjusted closes for the whole universe from
//! the Yahoo Finance v8 chart API, merged into one `PriceTable`.
//
//! This runs exactly once, before the window opens. Any failure here is
//! fatal; the dashboard has nothing to show without its table.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::errors::LoaderError;
use crate::stocks::{Stock, Symbol};
use crate::table::PriceTable;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
// Yahoo rejects requests without a browser-looking agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36";

/// Blocking HTTP client over the v8 chart endpoint.
pub struct PriceLoader {
    client: reqwest::blocking::Client,
}

impl PriceLoader {
    pub fn new() -> Result<Self, LoaderError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches every ticker's history from `start` through today and joins
    /// the columns over the union of trading dates. A ticker that did not
    /// trade on one of those dates gets `NAN` there, so every column stays
    /// index-aligned with the shared date index.
    pub fn fetch(&self, universe: &[Stock], start: NaiveDate) -> Result<PriceTable, LoaderError> {
        let mut per_ticker: Vec<(Symbol, BTreeMap<NaiveDate, f64>)> =
            Vec::with_capacity(universe.len());

        for stock in universe {
            let rows = self.fetch_one(&stock.ticker, start)?;
            log::info!(
                "fetched {} rows for {} ({})",
                rows.len(),
                stock.ticker,
                stock.company_name
            );
            per_ticker.push((stock.ticker.clone(), rows.into_iter().collect()));
        }

        let index: BTreeSet<NaiveDate> = per_ticker
            .iter()
            .flat_map(|(_, rows)| rows.keys().copied())
            .collect();
        let dates: Vec<NaiveDate> = index.into_iter().collect();

        let columns = per_ticker
            .into_iter()
            .map(|(ticker, rows)| {
                let column = dates
                    .iter()
                    .map(|d| rows.get(d).copied().unwrap_or(f64::NAN))
                    .collect();
                (ticker, column)
            })
            .collect();

        Ok(PriceTable::from_columns(dates, columns)?)
    }

    fn fetch_one(
        &self,
        ticker: &str,
        start: NaiveDate,
    ) -> Result<Vec<(NaiveDate, f64)>, LoaderError> {
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc().timestamp())
            .unwrap_or(0);
        let period2 = Utc::now().timestamp();

        // query2 first, query1 as fallback, same as every other yahoo client.
        let urls = [
            format!("https://query2.finance.yahoo.com/v8/finance/chart/{ticker}"),
            format!("https://query1.finance.yahoo.com/v8/finance/chart/{ticker}"),
        ];

        let mut last_err = None;
        for url in &urls {
            let response = self
                .client
                .get(url)
                .query(&[
                    ("period1", period1.to_string()),
                    ("period2", period2.to_string()),
                    ("interval", "1d".to_string()),
                    ("events", "div,split".to_string()),
                ])
                .send();

            match response.and_then(|r| r.json::<Value>()) {
                Ok(payload) => return parse_chart_response(ticker, &payload),
                Err(e) => last_err = Some(LoaderError::Http(e)),
            }
        }
        Err(last_err.unwrap_or(LoaderError::NoData(ticker.to_string())))
    }
}

/// Pulls `(trading date, adjusted close)` rows out of a v8 chart payload.
///
/// Prefers the `adjclose` indicator and falls back to the raw `close`
/// column when the payload has no adjusted series. Null price entries
/// become `NAN` rows rather than disappearing, so the date index keeps
/// every timestamp the exchange reported.
pub fn parse_chart_response(
    ticker: &str,
    payload: &Value,
) -> Result<Vec<(NaiveDate, f64)>, LoaderError> {
    let malformed = |reason: &str| LoaderError::MalformedResponse {
        ticker: ticker.to_string(),
        reason: reason.to_string(),
    };

    let Some(result) = payload["chart"]["result"].get(0) else {
        // When the symbol is unknown yahoo answers with an error block.
        let reason = payload["chart"]["error"]["description"]
            .as_str()
            .unwrap_or("no chart result in payload");
        return Err(malformed(reason));
    };

    let timestamps = result["timestamp"]
        .as_array()
        .ok_or(LoaderError::NoData(ticker.to_string()))?;

    let indicators = &result["indicators"];
    let prices = indicators["adjclose"][0]["adjclose"]
        .as_array()
        .or_else(|| indicators["quote"][0]["close"].as_array())
        .ok_or_else(|| malformed("neither adjclose nor close present"))?;

    if prices.len() != timestamps.len() {
        return Err(malformed("price and timestamp arrays differ in length"));
    }

    let mut rows = Vec::with_capacity(timestamps.len());
    for (ts, price) in timestamps.iter().zip(prices) {
        let secs = ts
            .as_i64()
            .ok_or_else(|| malformed("non-integer timestamp"))?;
        let date = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| malformed("timestamp out of range"))?
            .date_naive();
        rows.push((date, price.as_f64().unwrap_or(f64::NAN)));
    }

    if rows.is_empty() {
        return Err(LoaderError::NoData(ticker.to_string()));
    }
    Ok(rows)
}
