//! # CO2Vis-RS: World CO2 Emissions Dashboard
//!
//! A native dashboard over the OWID per-country-per-year CO2 dataset.
//! The architecture separates a pure data pipeline (filter, group,
//! aggregate, sort) from the eframe/egui frontend that renders it.
//!
//! ## Architecture
//!
//! - **Dataset**: One-shot CSV ingestion with fill-and-continue
//!   preprocessing; immutable for the rest of the session
//! - **Pipeline**: Four pure view computations, re-invoked explicitly
//!   when a parameter changes
//! - **Frontend**: Renders the views using eframe/egui with egui_plot,
//!   a sidebar year slider and per-view measure selectors
//!
//! ## Views
//!
//! 1. Time series of a CO2 measure per continent up to a year bound
//! 2. The same rows as a paginated table
//! 3. CO2 vs. GDP-per-capita scatter across countries for one year
//! 4. CO2 source (coal/oil/gas) totals per continent for one year
//!
//! ## Configuration
//!
//! Application state (recent datasets, preferences) is stored in the
//! platform-appropriate data directory under `dev.co2vis.co2vis-rs`:
//!
//! - **Linux**: `~/.local/share/dev.co2vis.co2vis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.co2vis.co2vis-rs/`
//! - **Windows**: `%APPDATA%\dev.co2vis.co2vis-rs\`
//!
//! ## Example
//!
//! ```ignore
//! use co2vis_rs::{config::AppState, dataset::Dataset, frontend::DashboardApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let app_state = AppState::load_or_default();
//!     let dataset = Dataset::from_path("owid-co2-data.csv").expect("dataset");
//!
//!     eframe::run_native(
//!         "World CO2 Emissions Dashboard",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, dataset, app_state)))),
//!     )
//! }
//! ```

pub mod app;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frontend;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use app::DashboardApp;
pub use config::AppState;
pub use dataset::{Dataset, Record};
pub use error::{DashboardError, Result};
pub use pipeline::{
    compute_gdp_scatter, compute_source_bar, compute_time_series, ScatterRow, SourceBarRow,
    TimeSeriesRow,
};
pub use types::{Co2Measure, Co2Source, Parameters};
