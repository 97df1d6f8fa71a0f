//! Property-based tests for the view pipeline
//!
//! Generates arbitrary datasets mixing continent and country rows and
//! checks the invariants that must hold for every input: filter bounds,
//! ordering, aggregate identities and purity.

mod common;

use common::builders::RecordBuilder;
use co2vis_rs::types::{is_continent, CONTINENTS};
use co2vis_rs::{
    compute_gdp_scatter, compute_source_bar, compute_time_series, Co2Measure, Co2Source, Dataset,
    Record,
};
use proptest::prelude::*;

fn arb_country() -> impl Strategy<Value = String> {
    prop_oneof![
        // Continent rows
        (0..CONTINENTS.len()).prop_map(|i| CONTINENTS[i].to_string()),
        // Country rows
        prop_oneof![
            Just("France".to_string()),
            Just("Germany".to_string()),
            Just("Japan".to_string()),
            Just("Brazil".to_string()),
        ],
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        arb_country(),
        1750i32..=2020,
        0.0f64..1e9,
        0.0f64..1e12,
        0.0f64..1e4,
        0.0f64..1e3,
    )
        .prop_map(|(country, year, population, gdp, co2, coal)| {
            RecordBuilder::new(&country, year)
                .population(population)
                .gdp(gdp)
                .co2(co2)
                .co2_per_capita(co2 / 100.0)
                .coal_co2(coal)
                .oil_co2(coal / 2.0)
                .gas_co2(coal / 4.0)
                .build()
        })
}

fn arb_dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(arb_record(), 0..60).prop_map(Dataset::from_records)
}

proptest! {
    #[test]
    fn time_series_respects_bound_and_continent_filter(
        dataset in arb_dataset(),
        bound in 1750i32..=2020,
    ) {
        let rows = compute_time_series(&dataset, bound, Co2Measure::Co2);
        for row in &rows {
            prop_assert!(row.year <= bound);
            prop_assert!(is_continent(&row.country));
        }
        prop_assert!(rows.windows(2).all(|w| w[0].year <= w[1].year));
    }

    #[test]
    fn scatter_excludes_continents_and_matches_year(
        dataset in arb_dataset(),
        year in 1750i32..=2020,
    ) {
        for row in compute_gdp_scatter(&dataset, year) {
            prop_assert_eq!(row.year, year);
            prop_assert!(!is_continent(&row.country));
            prop_assert!(row.gdp_per_capita.is_finite());
        }
    }

    #[test]
    fn source_bar_totals_match_a_direct_sum(
        dataset in arb_dataset(),
        year in 1750i32..=2020,
    ) {
        let rows = compute_source_bar(&dataset, year, Co2Source::Coal);
        let total: f64 = rows.iter().map(|r| r.value).sum();
        let expected: f64 = dataset
            .records()
            .iter()
            .filter(|r| r.year == year && is_continent(&r.country) && r.country != "World")
            .map(|r| r.coal_co2)
            .sum();
        prop_assert!((total - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }

    #[test]
    fn gdp_per_capita_zero_when_population_zero(
        gdp in 0.0f64..1e12,
        year in 1750i32..=2020,
    ) {
        let record = RecordBuilder::new("France", year).gdp(gdp).build();
        prop_assert_eq!(record.gdp_per_capita, 0.0);
    }

    #[test]
    fn all_views_are_pure(dataset in arb_dataset(), year in 1750i32..=2020) {
        prop_assert_eq!(
            compute_time_series(&dataset, year, Co2Measure::Co2PerCapita),
            compute_time_series(&dataset, year, Co2Measure::Co2PerCapita)
        );
        prop_assert_eq!(
            compute_gdp_scatter(&dataset, year),
            compute_gdp_scatter(&dataset, year)
        );
        prop_assert_eq!(
            compute_source_bar(&dataset, year, Co2Source::Gas),
            compute_source_bar(&dataset, year, Co2Source::Gas)
        );
    }
}
