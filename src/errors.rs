// src/errors.rs

use crate::stocks::Symbol;
use thiserror::Error;

/// Failures while building a `PriceTable`.
#[derive(Debug, Error)]
pub enum TableError {
    /// A table with no ticker columns cannot be charted.
    #[error("price table has no ticker columns")]
    NoColumns,

    /// Every column must have one value per trading date.
    #[error("column {ticker} has {column_len} values for {row_count} dates")]
    ColumnLengthMismatch {
        ticker: Symbol,
        column_len: usize,
        row_count: usize,
    },

    /// The row index must be strictly ascending trading dates.
    #[error("date index is not strictly ascending")]
    UnsortedDates,
}

/// Failures of the filter-and-project operation.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A requested ticker has no column in the price table.
    #[error("ticker {0} not found in price table")]
    TickerNotFound(Symbol),
}

/// Failures while turning raw widget state into a `Selection`.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A date control yielded something that is not a calendar date.
    #[error("cannot parse {0:?} as a YYYY-MM-DD date")]
    InvalidDateFormat(String),
}

/// Failures during the startup bulk fetch. All of these are fatal:
/// the dashboard has nothing to show without its table.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("http request failed")]
    Http(#[from] reqwest::Error),

    /// The service answered, but not with the chart payload we expect.
    #[error("malformed response for {ticker}: {reason}")]
    MalformedResponse { ticker: Symbol, reason: String },

    /// The service knows the symbol but returned zero trading dates.
    #[error("no price data returned for {0}")]
    NoData(Symbol),

    #[error(transparent)]
    Table(#[from] TableError),
}
