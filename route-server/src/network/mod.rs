//! In-memory rail network registry.
//!
//! Holds the known cities and the train links between them, enforcing the
//! rules that keep the route graph clean: unique city names, unique train
//! names, and no two trains serving the same hop in the same time. Route
//! search reads a fresh snapshot of the links for every request.

mod error;
mod seed;

pub use error::NetworkError;
pub use seed::{CitySeed, NetworkSeed, TrainSeed};

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{City, CityId, TrainLink};

/// Cities and train links.
#[derive(Debug, Clone, Default)]
pub struct RailNetwork {
    cities: BTreeMap<CityId, City>,
    trains: Vec<TrainLink>,
}

impl RailNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a city under the next free id.
    pub fn add_city(&mut self, name: &str) -> Result<City, NetworkError> {
        let next = self
            .cities
            .keys()
            .next_back()
            .map_or(1, |id| id.get().saturating_add(1));
        let city = City::new(CityId::new(next), name)?;
        self.insert_city(city.clone())?;
        Ok(city)
    }

    /// Add a city with a caller-chosen id.
    pub fn insert_city(&mut self, city: City) -> Result<(), NetworkError> {
        if self.cities.contains_key(&city.id) {
            return Err(NetworkError::DuplicateCityId(city.id));
        }
        if self.cities.values().any(|c| c.name == city.name) {
            return Err(NetworkError::DuplicateCity(city.name));
        }
        debug!(id = %city.id, name = %city.name, "Added city");
        self.cities.insert(city.id, city);
        Ok(())
    }

    /// Add a train link between two known cities.
    pub fn add_train(&mut self, link: TrainLink) -> Result<(), NetworkError> {
        for id in [link.from, link.to] {
            if !self.cities.contains_key(&id) {
                return Err(NetworkError::UnknownCity(id));
            }
        }
        if self.trains.iter().any(|t| t.name == link.name) {
            return Err(NetworkError::DuplicateTrainName(link.name));
        }
        if let Some(existing) = self.trains.iter().find(|t| t.same_service(&link)) {
            return Err(NetworkError::DuplicateLink {
                existing: existing.name.clone(),
                from: link.from,
                to: link.to,
                minutes: link.travel_time.minutes(),
            });
        }
        debug!(
            name = %link.name,
            from = %link.from,
            to = %link.to,
            minutes = link.travel_time.minutes(),
            "Added train"
        );
        self.trains.push(link);
        Ok(())
    }

    /// Look up a city by id.
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.get(&id)
    }

    /// Whether a city exists.
    pub fn contains_city(&self, id: CityId) -> bool {
        self.cities.contains_key(&id)
    }

    /// All cities, ordered by id.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    /// All train links, in insertion order.
    pub fn trains(&self) -> &[TrainLink] {
        &self.trains
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of train links.
    pub fn train_count(&self) -> usize {
        self.trains.len()
    }
}

/// Thread-safe handle to a rail network.
///
/// Clones share the same underlying network.
#[derive(Debug, Clone, Default)]
pub struct SharedNetwork {
    inner: Arc<RwLock<RailNetwork>>,
}

impl SharedNetwork {
    /// Wrap a network for shared access.
    pub fn new(network: RailNetwork) -> Self {
        Self {
            inner: Arc::new(RwLock::new(network)),
        }
    }

    /// Snapshot of all cities.
    pub async fn cities(&self) -> Vec<City> {
        let guard = self.inner.read().await;
        guard.cities().cloned().collect()
    }

    /// Snapshot of all train links.
    pub async fn trains(&self) -> Vec<TrainLink> {
        let guard = self.inner.read().await;
        guard.trains().to_vec()
    }

    /// Look up a city by id.
    pub async fn city(&self, id: CityId) -> Option<City> {
        let guard = self.inner.read().await;
        guard.city(id).cloned()
    }

    /// Run a closure against the network under the read lock.
    pub async fn read<T>(&self, f: impl FnOnce(&RailNetwork) -> T) -> T {
        let guard = self.inner.read().await;
        f(&guard)
    }

    /// Add a city under the next free id.
    pub async fn add_city(&self, name: &str) -> Result<City, NetworkError> {
        let mut guard = self.inner.write().await;
        guard.add_city(name)
    }

    /// Add a train link.
    pub async fn add_train(&self, link: TrainLink) -> Result<(), NetworkError> {
        let mut guard = self.inner.write().await;
        guard.add_train(link)
    }
}
