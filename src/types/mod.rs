// src/types/mod.rs

pub mod selection;
pub mod series;

pub use selection::Selection;
pub use series::{PlotSeries, PlotSeriesSet};
