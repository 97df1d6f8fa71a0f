//! View computations for the dashboard
//!
//! Every view is a pure function of `(dataset, parameters)`: filter,
//! group, aggregate, sort. The app calls the function for a view again
//! whenever one of its parameters changes; there is no hidden dependency
//! graph and no state between calls. An empty filter result produces an
//! empty output, never an error.
//!
//! # Aggregation semantics
//!
//! The time-series view averages its measure within each (continent,
//! year) group because it compares rates across regions of very
//! different size. The source bar chart sums its column within each
//! (year, continent) group because it compares total contribution for
//! one snapshot year. Swapping the two aggregators produces
//! plausible-looking but wrong charts, so both are pinned by tests.
//!
//! # Ordering
//!
//! All outputs are sorted ascending by year with a stable sort, so rows
//! that share a year keep the order in which their groups were first
//! encountered in the dataset.

use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::types::{is_continent, is_continent_excl_world, Co2Measure, Co2Source};

// ==================== Row Types ====================

/// One (continent, year) aggregate for the time-series and table views.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesRow {
    pub country: String,
    pub year: i32,
    /// Arithmetic mean of the selected measure within the group.
    pub value: f64,
}

/// One country point for the CO2 vs. GDP-per-capita scatter view.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRow {
    pub country: String,
    pub year: i32,
    pub gdp_per_capita: f64,
    /// Mean of `co2` within the group (identity when keys are unique).
    pub co2: f64,
}

/// One (year, continent) aggregate for the source bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceBarRow {
    pub year: i32,
    pub country: String,
    /// Sum of the selected source column within the group.
    pub value: f64,
}

// ==================== View Computations ====================

/// Mean of `measure` per (continent, year), for all years up to and
/// including `year_bound`.
pub fn compute_time_series(
    dataset: &Dataset,
    year_bound: i32,
    measure: Co2Measure,
) -> Vec<TimeSeriesRow> {
    struct Group<'a> {
        country: &'a str,
        year: i32,
        sum: f64,
        count: u64,
    }

    let mut index: HashMap<(&str, i32), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in dataset.records() {
        if record.year > year_bound || !is_continent(&record.country) {
            continue;
        }
        let slot = *index
            .entry((record.country.as_str(), record.year))
            .or_insert_with(|| {
                groups.push(Group {
                    country: &record.country,
                    year: record.year,
                    sum: 0.0,
                    count: 0,
                });
                groups.len() - 1
            });
        groups[slot].sum += record.measure(measure);
        groups[slot].count += 1;
    }

    let mut rows: Vec<TimeSeriesRow> = groups
        .into_iter()
        .map(|g| TimeSeriesRow {
            country: g.country.to_string(),
            year: g.year,
            value: g.sum / g.count as f64,
        })
        .collect();
    rows.sort_by_key(|row| row.year);

    tracing::trace!(
        rows = rows.len(),
        year_bound,
        measure = measure.column_name(),
        "computed time series"
    );
    rows
}

/// Mean of `co2` per (country, year, gdp_per_capita), for individual
/// countries (non-continent rows) in exactly `year_exact`.
///
/// The grouping key is almost always unique per record, in which case
/// the mean degenerates to the record's own value.
pub fn compute_gdp_scatter(dataset: &Dataset, year_exact: i32) -> Vec<ScatterRow> {
    struct Group<'a> {
        country: &'a str,
        year: i32,
        gdp_per_capita: f64,
        sum: f64,
        count: u64,
    }

    // gdp_per_capita is keyed by bit pattern; it is always finite because
    // the loader guards the division, so NaN keys cannot occur.
    let mut index: HashMap<(&str, i32, u64), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in dataset.records() {
        if record.year != year_exact || is_continent(&record.country) {
            continue;
        }
        let key = (
            record.country.as_str(),
            record.year,
            record.gdp_per_capita.to_bits(),
        );
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                country: &record.country,
                year: record.year,
                gdp_per_capita: record.gdp_per_capita,
                sum: 0.0,
                count: 0,
            });
            groups.len() - 1
        });
        groups[slot].sum += record.co2;
        groups[slot].count += 1;
    }

    let mut rows: Vec<ScatterRow> = groups
        .into_iter()
        .map(|g| ScatterRow {
            country: g.country.to_string(),
            year: g.year,
            gdp_per_capita: g.gdp_per_capita,
            co2: g.sum / g.count as f64,
        })
        .collect();
    // All rows share year_exact; stable sort keeps encounter order.
    rows.sort_by_key(|row| row.year);

    tracing::trace!(rows = rows.len(), year_exact, "computed gdp scatter");
    rows
}

/// Sum of `source` per (year, continent), for continents excluding World
/// in exactly `year_exact`.
pub fn compute_source_bar(
    dataset: &Dataset,
    year_exact: i32,
    source: Co2Source,
) -> Vec<SourceBarRow> {
    struct Group<'a> {
        year: i32,
        country: &'a str,
        sum: f64,
    }

    let mut index: HashMap<(i32, &str), usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for record in dataset.records() {
        if record.year != year_exact || !is_continent_excl_world(&record.country) {
            continue;
        }
        let slot = *index
            .entry((record.year, record.country.as_str()))
            .or_insert_with(|| {
                groups.push(Group {
                    year: record.year,
                    country: &record.country,
                    sum: 0.0,
                });
                groups.len() - 1
            });
        groups[slot].sum += record.source(source);
    }

    let mut rows: Vec<SourceBarRow> = groups
        .into_iter()
        .map(|g| SourceBarRow {
            year: g.year,
            country: g.country.to_string(),
            value: g.sum,
        })
        .collect();
    rows.sort_by_key(|row| row.year);

    tracing::trace!(
        rows = rows.len(),
        year_exact,
        source = source.column_name(),
        "computed source bar"
    );
    rows
}

// ==================== Table Pagination ====================

/// Rows per table page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `len` rows (at least one).
pub fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of `rows` visible on `page` (zero-based, clamped).
pub fn page_rows<T>(rows: &[T], page: usize) -> &[T] {
    let page = page.min(page_count(rows.len()) - 1);
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start.min(rows.len())..end]
}
