//! Dataset loading and preprocessing
//!
//! This module is the typed ingestion boundary between the raw OWID CSV
//! and the pipeline. Loading happens once per session; the resulting
//! [`Dataset`] is immutable and every downstream computation is a pure
//! projection over it.
//!
//! # Preprocessing
//!
//! Two things happen at load time, mirroring the published dataset's
//! recommended preparation:
//!
//! - Missing numeric fields are coerced to `0.0` (fill-and-continue).
//!   Early years have sparse coverage, so this deliberately depresses
//!   means for those years rather than dropping incomplete records.
//! - `gdp_per_capita` is derived as `gdp / population`, or `0.0` when
//!   the population is zero, so the value is always finite.
//!
//! Columns outside the typed set are ignored; the dashboard never writes
//! the dataset back.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result, ResultExt};
use crate::types::{Co2Measure, Co2Source};

/// Raw CSV row as serde sees it. Numeric columns are optional because the
/// source leaves them empty for years without coverage.
#[derive(Debug, Deserialize)]
struct RawRecord {
    country: String,
    year: i32,
    population: Option<f64>,
    gdp: Option<f64>,
    co2: Option<f64>,
    co2_per_capita: Option<f64>,
    coal_co2: Option<f64>,
    oil_co2: Option<f64>,
    gas_co2: Option<f64>,
}

/// One preprocessed dataset row.
///
/// All numeric fields are filled (never missing) and `gdp_per_capita`
/// is derived once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: String,
    pub year: i32,
    pub population: f64,
    pub gdp: f64,
    pub co2: f64,
    pub co2_per_capita: f64,
    pub coal_co2: f64,
    pub oil_co2: f64,
    pub gas_co2: f64,
    /// Derived: `gdp / population`, `0.0` when population is zero.
    pub gdp_per_capita: f64,
}

impl Record {
    /// Value of the selected CO2 measure column.
    pub fn measure(&self, measure: Co2Measure) -> f64 {
        match measure {
            Co2Measure::Co2 => self.co2,
            Co2Measure::Co2PerCapita => self.co2_per_capita,
        }
    }

    /// Value of the selected CO2 source column.
    pub fn source(&self, source: Co2Source) -> f64 {
        match source {
            Co2Source::Coal => self.coal_co2,
            Co2Source::Oil => self.oil_co2,
            Co2Source::Gas => self.gas_co2,
        }
    }
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        let population = raw.population.unwrap_or(0.0);
        let gdp = raw.gdp.unwrap_or(0.0);
        let gdp_per_capita = if population != 0.0 {
            gdp / population
        } else {
            0.0
        };

        Self {
            country: raw.country,
            year: raw.year,
            population,
            gdp,
            co2: raw.co2.unwrap_or(0.0),
            co2_per_capita: raw.co2_per_capita.unwrap_or(0.0),
            coal_co2: raw.coal_co2.unwrap_or(0.0),
            oil_co2: raw.oil_co2.unwrap_or(0.0),
            gas_co2: raw.gas_co2.unwrap_or(0.0),
            gdp_per_capita,
        }
    }
}

/// The full dataset: an ordered, immutable sequence of records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset directly from preprocessed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load and preprocess a CSV file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading dataset from {:?}", path);
        let file = std::fs::File::open(path)
            .map_err(DashboardError::from)
            .with_context(|| format!("Failed to open dataset at {}", path.display()))?;
        let dataset = Self::from_reader(file)
            .with_context(|| format!("Failed to parse dataset at {}", path.display()))?;
        tracing::info!("Loaded {} records", dataset.len());
        Ok(dataset)
    }

    /// Load and preprocess CSV data from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for raw in csv_reader.deserialize::<RawRecord>() {
            records.push(Record::from(raw?));
        }
        Ok(Self { records })
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inclusive (min, max) year across all records, if any.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut range: Option<(i32, i32)> = None;
        for record in &self.records {
            range = Some(match range {
                Some((min, max)) => (min.min(record.year), max.max(record.year)),
                None => (record.year, record.year),
            });
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
country,year,iso_code,population,gdp,co2,co2_per_capita,coal_co2,oil_co2,gas_co2
France,2000,FRA,60000000,1500000000000,400,6.6,50,200,100
Germany,2000,DEU,82000000,,500,6.1,,250,120
Asia,1800,,,,5,,1,2,
";

    #[test]
    fn test_missing_numerics_fill_with_zero() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let germany = &dataset.records()[1];
        assert_eq!(germany.gdp, 0.0);
        assert_eq!(germany.coal_co2, 0.0);

        let asia = &dataset.records()[2];
        assert_eq!(asia.population, 0.0);
        assert_eq!(asia.co2_per_capita, 0.0);
        assert_eq!(asia.gas_co2, 0.0);
    }

    #[test]
    fn test_gdp_per_capita_derivation() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let france = &dataset.records()[0];
        assert!((france.gdp_per_capita - 25_000.0).abs() < 1e-9);

        // Zero population (Asia row) must yield zero, not inf/NaN.
        let asia = &dataset.records()[2];
        assert_eq!(asia.gdp_per_capita, 0.0);
        assert!(asia.gdp_per_capita.is_finite());

        // Zero population with a nonzero gdp still yields zero.
        let record = Record::from(RawRecord {
            country: "Nowhere".to_string(),
            year: 1900,
            population: None,
            gdp: Some(1_000.0),
            co2: None,
            co2_per_capita: None,
            coal_co2: None,
            oil_co2: None,
            gas_co2: None,
        });
        assert_eq!(record.gdp_per_capita, 0.0);
    }

    #[test]
    fn test_unknown_columns_ignored() {
        // iso_code is present in the fixture but not in the typed record.
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].country, "France");
    }

    #[test]
    fn test_year_range() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(dataset.year_range(), Some((1800, 2000)));
        assert_eq!(Dataset::default().year_range(), None);
    }

    #[test]
    fn test_measure_and_source_accessors() {
        let dataset = Dataset::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
        let france = &dataset.records()[0];
        assert_eq!(france.measure(Co2Measure::Co2), 400.0);
        assert_eq!(france.measure(Co2Measure::Co2PerCapita), 6.6);
        assert_eq!(france.source(Co2Source::Oil), 200.0);
    }
}
