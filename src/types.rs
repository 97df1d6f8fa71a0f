//! Core domain types for the CO2 dashboard
//!
//! This module defines the column selectors the user can switch between,
//! the fixed continent sets used to tell region-level rows apart from
//! individual-country rows, and the mutable parameter set that drives
//! every view recomputation.
//!
//! # Main Types
//!
//! - [`Co2Measure`] - Per-total vs. per-capita CO2 column selector
//! - [`Co2Source`] - Coal/oil/gas source column selector
//! - [`Parameters`] - The full user-controlled parameter set
//!
//! # Continent Filtering
//!
//! The source dataset stores aggregate rows ("World", "Asia", ...) and
//! individual countries in the same table, distinguished only by the
//! `country` string. Filtering is therefore plain string membership
//! against [`CONTINENTS`] / [`CONTINENTS_EXCL_WORLD`]; no type-level
//! distinction is introduced.

use serde::{Deserialize, Serialize};

/// Aggregate region names present in the dataset's `country` column.
///
/// Used by the time-series and table views ("keep only regions") and,
/// negated, by the GDP scatter ("keep only actual nations").
pub const CONTINENTS: [&str; 8] = [
    "World",
    "Asia",
    "Oceania",
    "Europe",
    "Africa",
    "North America",
    "South America",
    "Antarctica",
];

/// [`CONTINENTS`] without the "World" aggregate row.
///
/// The source bar chart compares continents against each other, so the
/// World total would double-count everything.
pub const CONTINENTS_EXCL_WORLD: [&str; 7] = [
    "Asia",
    "Oceania",
    "Europe",
    "Africa",
    "North America",
    "South America",
    "Antarctica",
];

/// Whether a `country` value names an aggregate region (World included).
pub fn is_continent(country: &str) -> bool {
    CONTINENTS.contains(&country)
}

/// Whether a `country` value names a continent other than World.
pub fn is_continent_excl_world(country: &str) -> bool {
    CONTINENTS_EXCL_WORLD.contains(&country)
}

// ==================== Year Bound ====================

/// Lowest selectable year.
pub const YEAR_MIN: i32 = 1750;

/// Highest selectable year.
pub const YEAR_MAX: i32 = 2020;

/// Year slider step.
pub const YEAR_STEP: i32 = 5;

/// Default year selection at startup.
pub const DEFAULT_YEAR: i32 = 1850;

// ==================== Measure Selectors ====================

/// CO2 measure plotted by the time-series view and listed in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Co2Measure {
    /// Total annual emissions in million tonnes (`co2` column).
    Co2,
    /// Annual emissions per person in tonnes (`co2_per_capita` column).
    Co2PerCapita,
}

impl Co2Measure {
    /// All selectable measures, in UI order.
    pub const ALL: [Co2Measure; 2] = [Co2Measure::Co2, Co2Measure::Co2PerCapita];

    /// The dataset column this measure reads.
    pub fn column_name(&self) -> &'static str {
        match self {
            Co2Measure::Co2 => "co2",
            Co2Measure::Co2PerCapita => "co2_per_capita",
        }
    }

    /// Human-readable label for widgets and axis titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Co2Measure::Co2 => "CO2",
            Co2Measure::Co2PerCapita => "CO2 per capita",
        }
    }
}

/// CO2 source column plotted by the bar-chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Co2Source {
    /// `coal_co2` column.
    Coal,
    /// `oil_co2` column.
    Oil,
    /// `gas_co2` column.
    Gas,
}

impl Co2Source {
    /// All selectable sources, in UI order.
    pub const ALL: [Co2Source; 3] = [Co2Source::Coal, Co2Source::Oil, Co2Source::Gas];

    /// The dataset column this source reads.
    pub fn column_name(&self) -> &'static str {
        match self {
            Co2Source::Coal => "coal_co2",
            Co2Source::Oil => "oil_co2",
            Co2Source::Gas => "gas_co2",
        }
    }

    /// Human-readable label for widgets and axis titles.
    pub fn display_name(&self) -> &'static str {
        match self {
            Co2Source::Coal => "Coal",
            Co2Source::Oil => "Oil",
            Co2Source::Gas => "Gas",
        }
    }
}

// ==================== Parameters ====================

/// The user-controlled parameter set.
///
/// There is exactly one owner of this state (the app); every view
/// computation takes the parameters it depends on as explicit arguments,
/// so recomputation is an explicit call on change rather than an implicit
/// dependency graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Inclusive upper bound for the time-series/table views, and the
    /// exact year for the scatter and bar-chart views.
    pub year: i32,

    /// Column plotted by the time-series/table views.
    pub co2_measure: Co2Measure,

    /// Column plotted by the source bar chart.
    pub co2_source: Co2Source,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            co2_measure: Co2Measure::Co2,
            co2_source: Co2Source::Coal,
        }
    }
}

impl Parameters {
    /// Clamp the year to the selectable range.
    pub fn clamp_year(&mut self) {
        self.year = self.year.clamp(YEAR_MIN, YEAR_MAX);
    }
}
