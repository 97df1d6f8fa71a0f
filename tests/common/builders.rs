//! Test data builders for creating test objects

use co2vis_rs::Record;

/// Builder for creating test Records
///
/// All numeric fields default to 0.0; `gdp_per_capita` is derived from
/// gdp/population with the same zero-population rule the loader uses,
/// unless set explicitly.
pub struct RecordBuilder {
    country: String,
    year: i32,
    population: f64,
    gdp: f64,
    co2: f64,
    co2_per_capita: f64,
    coal_co2: f64,
    oil_co2: f64,
    gas_co2: f64,
    gdp_per_capita: Option<f64>,
}

impl RecordBuilder {
    pub fn new(country: &str, year: i32) -> Self {
        Self {
            country: country.to_string(),
            year,
            population: 0.0,
            gdp: 0.0,
            co2: 0.0,
            co2_per_capita: 0.0,
            coal_co2: 0.0,
            oil_co2: 0.0,
            gas_co2: 0.0,
            gdp_per_capita: None,
        }
    }

    pub fn population(mut self, population: f64) -> Self {
        self.population = population;
        self
    }

    pub fn gdp(mut self, gdp: f64) -> Self {
        self.gdp = gdp;
        self
    }

    pub fn co2(mut self, co2: f64) -> Self {
        self.co2 = co2;
        self
    }

    pub fn co2_per_capita(mut self, co2_per_capita: f64) -> Self {
        self.co2_per_capita = co2_per_capita;
        self
    }

    pub fn coal_co2(mut self, coal_co2: f64) -> Self {
        self.coal_co2 = coal_co2;
        self
    }

    pub fn oil_co2(mut self, oil_co2: f64) -> Self {
        self.oil_co2 = oil_co2;
        self
    }

    pub fn gas_co2(mut self, gas_co2: f64) -> Self {
        self.gas_co2 = gas_co2;
        self
    }

    pub fn gdp_per_capita(mut self, gdp_per_capita: f64) -> Self {
        self.gdp_per_capita = Some(gdp_per_capita);
        self
    }

    pub fn build(self) -> Record {
        let gdp_per_capita = self.gdp_per_capita.unwrap_or(if self.population != 0.0 {
            self.gdp / self.population
        } else {
            0.0
        });

        Record {
            country: self.country,
            year: self.year,
            population: self.population,
            gdp: self.gdp,
            co2: self.co2,
            co2_per_capita: self.co2_per_capita,
            coal_co2: self.coal_co2,
            oil_co2: self.oil_co2,
            gas_co2: self.gas_co2,
            gdp_per_capita,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RecordBuilder::new("France", 2000)
            .population(10.0)
            .gdp(250.0)
            .co2(400.0)
            .build();

        assert_eq!(record.country, "France");
        assert_eq!(record.year, 2000);
        assert_eq!(record.gdp_per_capita, 25.0);
    }
}
