//! Materialized view rows shared with the panes
//!
//! The app owns one [`ViewCache`] and recomputes exactly the views whose
//! parameters changed, synchronously, before the next frame renders.
//! Panes only ever read from the cache.

use crate::dataset::Dataset;
use crate::pipeline::{
    compute_gdp_scatter, compute_source_bar, compute_time_series, ScatterRow, SourceBarRow,
    TimeSeriesRow,
};
use crate::types::Parameters;

/// Most recently computed rows for all four views.
///
/// The table view shares `time_series` with the line plot; pagination is
/// purely presentational.
#[derive(Debug, Clone, Default)]
pub struct ViewCache {
    pub time_series: Vec<TimeSeriesRow>,
    pub scatter: Vec<ScatterRow>,
    pub source_bar: Vec<SourceBarRow>,
}

impl ViewCache {
    /// Recompute every view (dataset loaded or year changed).
    pub fn recompute_all(&mut self, dataset: &Dataset, params: &Parameters) {
        self.recompute_time_series(dataset, params);
        self.recompute_scatter(dataset, params);
        self.recompute_source_bar(dataset, params);
    }

    /// Recompute the time-series/table rows (year or measure changed).
    pub fn recompute_time_series(&mut self, dataset: &Dataset, params: &Parameters) {
        self.time_series = compute_time_series(dataset, params.year, params.co2_measure);
    }

    /// Recompute the scatter rows (year changed).
    pub fn recompute_scatter(&mut self, dataset: &Dataset, params: &Parameters) {
        self.scatter = compute_gdp_scatter(dataset, params.year);
    }

    /// Recompute the bar-chart rows (year or source changed).
    pub fn recompute_source_bar(&mut self, dataset: &Dataset, params: &Parameters) {
        self.source_bar = compute_source_bar(dataset, params.year, params.co2_source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use crate::types::{Co2Measure, Co2Source};

    fn make_record(country: &str, year: i32, co2: f64, coal: f64) -> Record {
        Record {
            country: country.to_string(),
            year,
            population: 0.0,
            gdp: 0.0,
            co2,
            co2_per_capita: co2 / 10.0,
            coal_co2: coal,
            oil_co2: 0.0,
            gas_co2: 0.0,
            gdp_per_capita: 0.0,
        }
    }

    #[test]
    fn test_recompute_all_fills_every_view() {
        let dataset = Dataset::from_records(vec![
            make_record("Asia", 1850, 5.0, 2.0),
            make_record("France", 1850, 1.0, 0.5),
        ]);
        let params = Parameters::default();

        let mut cache = ViewCache::default();
        cache.recompute_all(&dataset, &params);

        assert_eq!(cache.time_series.len(), 1);
        assert_eq!(cache.scatter.len(), 1);
        assert_eq!(cache.source_bar.len(), 1);
    }

    #[test]
    fn test_partial_recompute_only_touches_its_view() {
        let dataset = Dataset::from_records(vec![make_record("Asia", 1850, 5.0, 2.0)]);
        let mut params = Parameters::default();

        let mut cache = ViewCache::default();
        cache.recompute_all(&dataset, &params);
        assert_eq!(cache.time_series[0].value, 5.0);

        params.co2_measure = Co2Measure::Co2PerCapita;
        cache.recompute_time_series(&dataset, &params);
        assert_eq!(cache.time_series[0].value, 0.5);
        // The other views are untouched by a measure change.
        assert_eq!(cache.source_bar[0].value, 2.0);

        params.co2_source = Co2Source::Oil;
        cache.recompute_source_bar(&dataset, &params);
        assert_eq!(cache.source_bar[0].value, 0.0);
    }
}
