// src/lib.rs

// === 1. Declare all the top-level modules ===
pub mod errors;
pub mod loader;
pub mod projection;
pub mod stocks;
pub mod table;
pub mod types;

// === 2. Re-export the public-facing components to create a clean API ===

// --- From `stocks` ---
pub use stocks::{Stock, Symbol, default_selection, default_universe, find_stock, history_start};

// --- From `table` ---
pub use table::PriceTable;

// --- From `types` ---
pub use types::{PlotSeries, PlotSeriesSet, Selection};

// --- From `projection`, the core operation ---
pub use projection::{project, project_available};

// --- From `loader` ---
pub use loader::PriceLoader;

// --- From `errors` ---
pub use errors::{LoaderError, ProjectError, SelectionError, TableError};
