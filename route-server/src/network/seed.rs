//! Loading a rail network from a JSON seed file.
//!
//! The seed is read once at start-up; nothing is ever written back.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::domain::{City, CityId, TrainLink, TravelTime};

use super::{NetworkError, RailNetwork};

/// A city entry in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct CitySeed {
    pub id: CityId,
    pub name: String,
}

/// A train entry in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainSeed {
    pub name: String,
    pub from_city: CityId,
    pub to_city: CityId,
    pub travel_time: u32,
}

/// Contents of a seed file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSeed {
    #[serde(default)]
    pub cities: Vec<CitySeed>,

    #[serde(default)]
    pub trains: Vec<TrainSeed>,
}

impl NetworkSeed {
    /// Parse a seed from JSON text.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl RailNetwork {
    /// Build a network from seed data, applying the usual validation.
    pub fn from_seed(seed: NetworkSeed) -> Result<Self, NetworkError> {
        let mut network = RailNetwork::new();

        for city in seed.cities {
            network.insert_city(City::new(city.id, &city.name)?)?;
        }
        for train in seed.trains {
            let travel_time = TravelTime::new(train.travel_time)?;
            let link = TrainLink::new(&train.name, train.from_city, train.to_city, travel_time)?;
            network.add_train(link)?;
        }

        Ok(network)
    }

    /// Load a network from a JSON seed file.
    pub fn load(path: &Path) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_seed(NetworkSeed::from_json(&json)?)?;

        info!(
            path = %path.display(),
            cities = network.city_count(),
            trains = network.train_count(),
            "Loaded rail network"
        );

        Ok(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "cities": [
            { "id": 1, "name": "A" },
            { "id": 2, "name": "B" },
            { "id": 3, "name": "C" }
        ],
        "trains": [
            { "name": "t1", "from_city": 1, "to_city": 2, "travel_time": 9 },
            { "name": "t3", "from_city": 1, "to_city": 3, "travel_time": 7 },
            { "name": "t4", "from_city": 3, "to_city": 2, "travel_time": 6 }
        ]
    }"#;

    #[test]
    fn from_seed() {
        let network = RailNetwork::from_seed(NetworkSeed::from_json(SAMPLE).unwrap()).unwrap();
        assert_eq!(network.city_count(), 3);
        assert_eq!(network.train_count(), 3);
        assert_eq!(network.trains()[1].name, "t3");
    }

    #[test]
    fn empty_seed() {
        let network = RailNetwork::from_seed(NetworkSeed::from_json("{}").unwrap()).unwrap();
        assert_eq!(network.city_count(), 0);
    }

    #[test]
    fn seed_rejects_self_loop() {
        let json = r#"{
            "cities": [{ "id": 1, "name": "A" }],
            "trains": [{ "name": "t1", "from_city": 1, "to_city": 1, "travel_time": 5 }]
        }"#;
        let err = RailNetwork::from_seed(NetworkSeed::from_json(json).unwrap()).unwrap_err();
        assert!(matches!(err, NetworkError::Domain(_)));
    }

    #[test]
    fn seed_rejects_zero_travel_time() {
        let json = r#"{
            "cities": [{ "id": 1, "name": "A" }, { "id": 2, "name": "B" }],
            "trains": [{ "name": "t1", "from_city": 1, "to_city": 2, "travel_time": 0 }]
        }"#;
        let err = RailNetwork::from_seed(NetworkSeed::from_json(json).unwrap()).unwrap_err();
        assert!(matches!(err, NetworkError::Domain(_)));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            NetworkSeed::from_json("{ not json"),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let network = RailNetwork::load(file.path()).unwrap();
        assert_eq!(network.train_count(), 3);
    }

    #[test]
    fn bundled_sample_network_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/network.json");
        let network = RailNetwork::load(&path).unwrap();
        assert_eq!(network.city_count(), 5);
        assert_eq!(network.train_count(), 9);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RailNetwork::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }
}
