//! Domain types for the route finder.
//!
//! This module contains the validated rail data the route finder works with:
//! cities, travel times and the train links between cities. All types enforce
//! their invariants at construction time, so code that receives these types
//! can trust their validity.

mod city;
mod error;
mod link;
mod name;
mod time;

pub use city::{City, CityId};
pub use error::DomainError;
pub use link::TrainLink;
pub use name::{MAX_NAME_LEN, validate_name};
pub use time::TravelTime;
pub(crate) use time::format_minutes;
