//! Shared state types for the frontend
//!
//! This module defines the shared state container and action types used
//! by the panes. Panes receive [`SharedState`] via borrowing and return
//! [`AppAction`]s instead of mutating state directly; the app applies the
//! actions and recomputes the affected views before the next frame.

use std::path::PathBuf;

use crate::config::AppState;
use crate::dataset::Dataset;
use crate::frontend::views::ViewCache;
use crate::types::{Co2Measure, Co2Source, Parameters};

/// Shared state accessible by all panes (borrowed, not owned).
pub struct SharedState<'a> {
    /// The loaded dataset (read-only after load).
    pub dataset: &'a Dataset,

    /// Current parameter values (panes read; changes go through actions).
    pub params: &'a Parameters,

    /// Materialized rows for all views.
    pub views: &'a ViewCache,

    /// Persistent app state (recent datasets, preferences).
    pub app_state: &'a mut AppState,

    /// Error display slot for the current render pass.
    pub last_error: &'a mut Option<String>,
}

/// Actions that any pane can emit
///
/// Panes return `Vec<AppAction>` instead of mutating state directly.
/// This keeps pane logic testable and centralizes recomputation: the
/// app knows exactly which views depend on which parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Change the selected year (bound for the time series/table, exact
    /// year for the scatter and bar chart). Recomputes all views.
    SetYear(i32),

    /// Change the CO2 measure column. Recomputes the time series/table.
    SetCo2Measure(Co2Measure),

    /// Change the CO2 source column. Recomputes the bar chart.
    SetCo2Source(Co2Source),

    /// Load a dataset from a CSV file and recompute all views.
    LoadDataset(PathBuf),

    /// Toggle the dark theme.
    SetDarkMode(bool),

    /// Toggle plot legends.
    SetShowLegend(bool),

    /// Dismiss the current error message.
    ClearError,
}
