//! Frontend module for egui UI
//!
//! This module provides the dashboard UI using eframe/egui with
//! egui_plot for the charts.
//!
//! # Architecture
//!
//! The layout is fixed: a sidebar with the year slider and dataset
//! controls, and a 2x2 grid of view panes (time series, table, scatter,
//! source bar chart). Panes receive borrowed [`SharedState`] and return
//! [`AppAction`]s; the app applies the actions and recomputes the
//! affected views before the next frame.
//!
//! # Main Types
//!
//! - [`DashboardApp`] - Main application state implementing [`eframe::App`]
//! - [`ViewCache`] - Materialized rows for all four views
//!
//! # Submodules
//!
//! - `panes` - Individual pane render functions
//! - `sidebar` - The settings/dataset sidebar panel
//! - `plot` - Shared plot helpers (colors, legend)

pub mod app;
pub mod panes;
mod plot;
mod sidebar;
pub mod state;
pub mod views;

pub use app::DashboardApp;
pub use plot::series_color;
pub use state::{AppAction, SharedState};
pub use views::ViewCache;
