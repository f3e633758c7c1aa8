//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from registry and API errors.

use super::CityId;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A train link starts and ends in the same city
    #[error("train cannot depart from and arrive at the same city ({0})")]
    SameCity(CityId),

    /// Travel time must be a positive number of minutes
    #[error("travel time must be positive, got {0}")]
    InvalidTravelTime(u32),

    /// Name is empty or too long
    #[error("invalid name: {0}")]
    InvalidName(&'static str),
}
