//! Train links between cities.

use serde::Serialize;

use super::city::CityId;
use super::error::DomainError;
use super::name::validate_name;
use super::time::TravelTime;
use crate::graph::Edge;

/// A named train running directly from one city to another.
///
/// A link never starts and ends in the same city. Links are only built
/// through [`TrainLink::new`], so there is no `Deserialize` impl.
///
/// # Examples
///
/// ```
/// use route_server::domain::{CityId, TrainLink, TravelTime};
///
/// let a = CityId::new(1);
/// let b = CityId::new(2);
/// let time = TravelTime::new(9).unwrap();
///
/// let link = TrainLink::new("t1", a, b, time).unwrap();
/// assert_eq!(link.from, a);
///
/// // A train must go somewhere
/// assert!(TrainLink::new("t2", a, a, time).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainLink {
    pub name: String,
    pub from: CityId,
    pub to: CityId,
    pub travel_time: TravelTime,
}

impl TrainLink {
    /// Create a train link, validating the name and endpoints.
    pub fn new(
        name: &str,
        from: CityId,
        to: CityId,
        travel_time: TravelTime,
    ) -> Result<Self, DomainError> {
        if from == to {
            return Err(DomainError::SameCity(from));
        }
        let name = validate_name(name)?;
        Ok(Self {
            name,
            from,
            to,
            travel_time,
        })
    }

    /// The graph edge this link contributes.
    pub fn edge(&self) -> Edge<CityId> {
        Edge::new(self.from, self.to, self.travel_time.minutes())
    }

    /// Whether this link serves the same hop with the same travel time.
    pub fn same_service(&self, other: &TrainLink) -> bool {
        self.from == other.from && self.to == other.to && self.travel_time == other.travel_time
    }
}
