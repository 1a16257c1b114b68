// src/types/selection.rs
//! What the user asked for at the moment of a submit click.

use chrono::NaiveDate;

use crate::errors::SelectionError;
use crate::stocks::Symbol;

/// A transient (tickers, start, end) tuple. Built fresh on every submit
/// and discarded once projected; `start <= end` is expected but not
/// enforced, an inverted interval simply projects to empty series.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Requested tickers, in the order the user picked them.
    pub tickers: Vec<Symbol>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Selection {
    pub fn new(tickers: Vec<Symbol>, start: NaiveDate, end: NaiveDate) -> Self {
        Self { tickers, start, end }
    }

    /// Builds a selection from raw date strings as a text control would
    /// yield them. Accepts `YYYY-MM-DD`, tolerating a trailing time part
    /// (only the first ten characters are read).
    pub fn parse(
        tickers: Vec<Symbol>,
        start: &str,
        end: &str,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            tickers,
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, SelectionError> {
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .map_err(|_| SelectionError::InvalidDateFormat(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_dates() {
        let sel = Selection::parse(vec!["AAPL".into()], "2020-01-02", "2020-01-04").unwrap();
        assert_eq!(sel.start, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(sel.end, NaiveDate::from_ymd_opt(2020, 1, 4).unwrap());
    }

    #[test]
    fn ignores_trailing_time_component() {
        let sel = Selection::parse(vec![], "2020-01-02T00:00:00", "2020-01-04 12:30").unwrap();
        assert_eq!(sel.start, NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
        assert_eq!(sel.end, NaiveDate::from_ymd_opt(2020, 1, 4).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        let err = Selection::parse(vec![], "not-a-date", "2020-01-04").unwrap_err();
        assert!(matches!(err, SelectionError::InvalidDateFormat(s) if s == "not-a-date"));

        let err = Selection::parse(vec![], "2020-01-02", "2020-13-99").unwrap_err();
        assert!(matches!(err, SelectionError::InvalidDateFormat(_)));
    }
}
