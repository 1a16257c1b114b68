// src/table.rs
//! The in-memory price table: one row per trading date, one column per
//! ticker, loaded once at startup and never mutated afterwards.
//
//! A ticker that did not trade on a date another ticker traded carries
//! `f64::NAN` in its column, the same alignment a dataframe join would
//! produce. Renderers are expected to skip non-finite points.

use std::collections::HashMap;
use std::ops::Range;

use chrono::NaiveDate;

use crate::errors::TableError;
use crate::stocks::Symbol;

/// Daily adjusted closing prices for the whole ticker universe.
///
/// Immutable after construction; share it with `Arc` and hand out `&` to
/// readers. All queries are cheap: the date index is sorted, so interval
/// lookups are two binary searches.
#[derive(Debug, Clone)]
pub struct PriceTable {
    /// Strictly ascending trading dates.
    dates: Vec<NaiveDate>,
    /// Column order, as supplied at construction.
    tickers: Vec<Symbol>,
    /// ticker -> prices, each exactly `dates.len()` long.
    columns: HashMap<Symbol, Vec<f64>>,
}

impl PriceTable {
    /// Builds a table from a date index and `(ticker, prices)` columns.
    ///
    /// Fails if there are no columns, a column's length disagrees with the
    /// date index, or the dates are not strictly ascending. An empty date
    /// index with zero-length columns is fine (a table with nothing in it
    /// is still a table).
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        columns: Vec<(Symbol, Vec<f64>)>,
    ) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        if dates.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TableError::UnsortedDates);
        }
        for (ticker, prices) in &columns {
            if prices.len() != dates.len() {
                return Err(TableError::ColumnLengthMismatch {
                    ticker: ticker.clone(),
                    column_len: prices.len(),
                    row_count: dates.len(),
                });
            }
        }

        let tickers = columns.iter().map(|(t, _)| t.clone()).collect();
        Ok(Self {
            dates,
            tickers,
            columns: columns.into_iter().collect(),
        })
    }

    /// The full chronological date index.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Column order as loaded.
    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }

    /// One ticker's full price column, if the ticker is known.
    pub fn column(&self, ticker: &str) -> Option<&[f64]> {
        self.columns.get(ticker).map(Vec::as_slice)
    }

    /// Number of trading dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest trading date in the table.
    pub fn min_date(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Latest trading date in the table.
    pub fn max_date(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Row span whose dates fall in the closed interval `[start, end]`.
    ///
    /// An interval touching no rows, including an inverted one, yields an
    /// empty range rather than an error.
    pub fn row_range(&self, start: NaiveDate, end: NaiveDate) -> Range<usize> {
        let lo = self.dates.partition_point(|d| *d < start);
        let hi = self.dates.partition_point(|d| *d <= end);
        lo..hi.max(lo)
    }
}
