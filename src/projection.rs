// src/projection.rs
//! The filter-and-project engine: slice the price table down to a date
//! interval and a ticker subset, producing chart-ready series.
//
//! Pure reads over an immutable table. Same arguments in, same series out.

use chrono::NaiveDate;

use crate::errors::ProjectError;
use crate::stocks::Symbol;
use crate::table::PriceTable;
use crate::types::{PlotSeries, PlotSeriesSet};

/// Projects the table onto `[start, end]` for each requested ticker.
///
/// Series come back in the caller's ticker order, each pairing the
/// in-interval dates with that ticker's column values at those dates.
/// An interval touching no rows gives every series zero points; an empty
/// ticker list gives an empty set. Neither is an error. A ticker with no
/// column in the table is a lookup failure and fails the whole call.
pub fn project(
    table: &PriceTable,
    tickers: &[Symbol],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<PlotSeriesSet, ProjectError> {
    let rows = table.row_range(start, end);
    let dates = &table.dates()[rows.clone()];

    let mut series = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        let column = table
            .column(ticker)
            .ok_or_else(|| ProjectError::TickerNotFound(ticker.clone()))?;
        series.push(PlotSeries {
            ticker: ticker.clone(),
            dates: dates.to_vec(),
            prices: column[rows.clone()].to_vec(),
        });
    }
    Ok(PlotSeriesSet { series })
}

/// Render-what-you-can variant for the UI path: tickers missing from the
/// table are reported back instead of failing the series that do resolve.
pub fn project_available(
    table: &PriceTable,
    tickers: &[Symbol],
    start: NaiveDate,
    end: NaiveDate,
) -> (PlotSeriesSet, Vec<Symbol>) {
    let (found, missing): (Vec<Symbol>, Vec<Symbol>) = tickers
        .iter()
        .cloned()
        .partition(|t| table.column(t).is_some());

    let set = project(table, &found, start, end)
        .unwrap_or_default(); // every ticker in `found` has a column
    (set, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sym(s: &str) -> Symbol {
        s.to_string()
    }

    // The two-ticker, five-day fixture used throughout.
    fn week_table() -> PriceTable {
        let dates = (1..=5).map(|day| d(&format!("2020-01-0{day}"))).collect();
        PriceTable::from_columns(
            dates,
            vec![
                ("AAPL".into(), vec![1.0, 2.0, 3.0, 4.0, 5.0]),
                ("MSFT".into(), vec![10.0, 20.0, 30.0, 40.0, 50.0]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn inner_interval_slices_one_ticker() {
        let table = week_table();
        let set = project(&table, &[sym("AAPL")], d("2020-01-02"), d("2020-01-04")).unwrap();

        assert_eq!(set.len(), 1);
        let series = &set.series[0];
        assert_eq!(series.ticker, "AAPL");
        assert_eq!(
            series.dates,
            vec![d("2020-01-02"), d("2020-01-03"), d("2020-01-04")]
        );
        assert_eq!(series.prices, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn full_interval_returns_all_rows_for_both_tickers() {
        let table = week_table();
        let set = project(
            &table,
            &[sym("AAPL"), sym("MSFT")],
            d("2020-01-01"),
            d("2020-01-05"),
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.series[0].ticker, "AAPL");
        assert_eq!(set.series[0].prices, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(set.series[1].ticker, "MSFT");
        assert_eq!(set.series[1].prices, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        for series in set.iter() {
            assert_eq!(series.len(), 5);
        }
    }

    #[test]
    fn empty_ticker_list_gives_empty_set() {
        let table = week_table();
        let set = project(&table, &[], d("2020-01-01"), d("2020-01-05")).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn interval_past_table_end_gives_zero_point_series() {
        let table = week_table();
        let set = project(&table, &[sym("AAPL")], d("2020-01-06"), d("2020-01-07")).unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.series[0].ticker, "AAPL");
        assert!(set.series[0].is_empty());
    }

    #[test]
    fn inverted_interval_gives_zero_point_series_per_ticker() {
        let table = week_table();
        let set = project(
            &table,
            &[sym("AAPL"), sym("MSFT")],
            d("2020-01-05"),
            d("2020-01-01"),
        )
        .unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.iter().all(|s| s.is_empty()));
    }

    #[test]
    fn series_order_follows_the_request_not_the_table() {
        let table = week_table();
        let set = project(
            &table,
            &[sym("MSFT"), sym("AAPL")],
            d("2020-01-01"),
            d("2020-01-05"),
        )
        .unwrap();

        assert_eq!(set.series[0].ticker, "MSFT");
        assert_eq!(set.series[1].ticker, "AAPL");
    }

    #[test]
    fn projection_is_idempotent() {
        let table = week_table();
        let args = (&[sym("AAPL"), sym("MSFT")], d("2020-01-02"), d("2020-01-04"));

        let first = project(&table, args.0, args.1, args.2).unwrap();
        let second = project(&table, args.0, args.1, args.2).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_ticker_is_a_lookup_failure() {
        let table = week_table();
        let err = project(&table, &[sym("TSLA")], d("2020-01-01"), d("2020-01-05")).unwrap_err();
        assert!(matches!(err, ProjectError::TickerNotFound(t) if t == "TSLA"));
    }

    #[test]
    fn available_variant_renders_valid_and_reports_missing() {
        let table = week_table();
        let (set, missing) = project_available(
            &table,
            &[sym("AAPL"), sym("TSLA"), sym("MSFT")],
            d("2020-01-01"),
            d("2020-01-05"),
        );

        assert_eq!(missing, vec![sym("TSLA")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.series[0].ticker, "AAPL");
        assert_eq!(set.series[1].ticker, "MSFT");
    }

    #[test]
    fn nan_gaps_pass_through_untouched() {
        let dates = vec![d("2020-01-01"), d("2020-01-02"), d("2020-01-03")];
        let table = PriceTable::from_columns(
            dates,
            vec![("AAPL".into(), vec![1.0, f64::NAN, 3.0])],
        )
        .unwrap();

        let set = project(&table, &[sym("AAPL")], d("2020-01-01"), d("2020-01-03")).unwrap();
        let prices = &set.series[0].prices;
        assert_eq!(prices.len(), 3);
        assert!(prices[1].is_nan());
    }
}
