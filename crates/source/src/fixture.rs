// Built-in mock dataset: cable inventory records
// Three hand-written entries plus a hundred generated ones. Generation
// is deterministic so exports and tests are reproducible run to run.

use pivotgrid_core::{Record, Value};

use crate::{DataSource, SourceError};

const COLORS: [&str; 4] = ["Black", "White", "Blue", "Red"];
const LOCATIONS: [&str; 4] = ["USA", "Germany", "China", "Japan"];
const GENERATED_COUNT: usize = 100;

pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        FixtureSource
    }
}

impl Default for FixtureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn load(&self) -> Result<Vec<Record>, SourceError> {
        let mut records = vec![
            cable("Coaxial", 10, "Black", 15.0, "CablePro", "USA"),
            cable("Fiber Optic", 50, "White", 120.0, "FiberMax", "Germany"),
            cable("Ethernet", 20, "Blue", 10.0, "NetConnect", "China"),
        ];

        for i in 1..=GENERATED_COUNT {
            records.push(cable(
                &format!("Cable Type {i}"),
                (i * 37) % 100,
                COLORS[(i - 1) % COLORS.len()],
                ((i * 53) % 10_000) as f64 / 100.0,
                &format!("Manufacturer {i}"),
                LOCATIONS[(i - 1) % LOCATIONS.len()],
            ));
        }

        Ok(records)
    }
}

fn cable(
    cable_type: &str,
    length_m: usize,
    color: &str,
    price_usd: f64,
    manufacturer: &str,
    location: &str,
) -> Record {
    Record::new(vec![
        ("cableType".into(), Value::Text(cable_type.into())),
        ("lengthM".into(), Value::Number(length_m as f64)),
        ("color".into(), Value::Text(color.into())),
        ("priceUsd".into(), Value::Number(price_usd)),
        ("manufacturer".into(), Value::Text(manufacturer.into())),
        ("location".into(), Value::Text(location.into())),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivotgrid_core::Matrix;

    #[test]
    fn loads_103_uniform_records() {
        let records = FixtureSource::new().load().unwrap();
        assert_eq!(records.len(), 3 + GENERATED_COUNT);

        let names: Vec<&str> = records[0].field_names().collect();
        assert_eq!(
            names,
            vec!["cableType", "lengthM", "color", "priceUsd", "manufacturer", "location"]
        );

        // Uniform shape: the transformer accepts the whole set
        let matrix = Matrix::from_records(&records, true).unwrap();
        assert_eq!(matrix.len(), records.len() + 1);
        assert_eq!(
            matrix.header(),
            &[
                "Cable Type".to_string(),
                "Length M".to_string(),
                "Color".to_string(),
                "Price Usd".to_string(),
                "Manufacturer".to_string(),
                "Location".to_string(),
            ]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let a = FixtureSource::new().load().unwrap();
        let b = FixtureSource::new().load().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn hand_written_rows_first() {
        let records = FixtureSource::new().load().unwrap();
        assert_eq!(
            records[0].get("cableType"),
            Some(&Value::Text("Coaxial".into()))
        );
        assert_eq!(records[1].get("priceUsd"), Some(&Value::Number(120.0)));
    }
}
