// src/types/series.rs
//! Renderer-ready output of the filter-and-project operation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stocks::Symbol;

/// One ticker's slice of history: dates and prices of equal length,
/// index-aligned, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    /// Legend / hover label.
    pub ticker: Symbol,
    pub dates: Vec<NaiveDate>,
    pub prices: Vec<f64>,
}

impl PlotSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Paired `(date, price)` walk over the series.
    pub fn points(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.prices.iter().copied())
    }
}

/// Ordered set of series, one per selected ticker. Recomputed from scratch
/// on every submit; it has no life beyond the figure currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotSeriesSet {
    pub series: Vec<PlotSeries>,
}

impl PlotSeriesSet {
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlotSeries> {
        self.series.iter()
    }
}
