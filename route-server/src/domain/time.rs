//! Travel time handling.
//!
//! Train links carry their travel time as a whole number of minutes. Route
//! search sums these minutes, so the type stays a plain integer and only
//! converts to a `chrono::Duration` for display.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A strictly positive travel time in minutes.
///
/// # Examples
///
/// ```
/// use route_server::domain::TravelTime;
///
/// let t = TravelTime::new(125).unwrap();
/// assert_eq!(t.minutes(), 125);
/// assert_eq!(t.to_string(), "2h 05m");
///
/// assert!(TravelTime::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TravelTime(u32);

impl TravelTime {
    /// Create a travel time, rejecting zero.
    pub fn new(minutes: u32) -> Result<Self, DomainError> {
        if minutes == 0 {
            return Err(DomainError::InvalidTravelTime(minutes));
        }
        Ok(Self(minutes))
    }

    /// Returns the travel time in minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }

    /// Returns the travel time as a Duration.
    pub fn as_duration(self) -> Duration {
        Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<u32> for TravelTime {
    type Error = DomainError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<TravelTime> for u32 {
    fn from(time: TravelTime) -> Self {
        time.0
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_minutes(self.as_duration()))
    }
}

/// Format a duration as "Xh YYm", or "Ym" when under an hour.
pub(crate) fn format_minutes(duration: Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() - hours * 60;
    if hours > 0 {
        format!("{hours}h {mins:02}m")
    } else {
        format!("{mins}m")
    }
}
