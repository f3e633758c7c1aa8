//! City identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::name::validate_name;

/// Opaque identifier of a city.
///
/// Route search treats cities purely by identity: two cities are the same
/// node of the rail graph if and only if their ids are equal.
///
/// # Examples
///
/// ```
/// use route_server::domain::CityId;
///
/// let id = CityId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u32);

impl CityId {
    /// Create a city id from its raw value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CityId({})", self.0)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
}

impl City {
    /// Create a city, trimming and validating its name.
    pub fn new(id: CityId, name: &str) -> Result<Self, DomainError> {
        let name = validate_name(name)?;
        Ok(Self { id, name })
    }
}
