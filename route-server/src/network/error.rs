//! Rail network registry error types.

use std::path::PathBuf;

use crate::domain::{CityId, DomainError};

/// Errors that can occur when changing or loading the rail network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Invalid city or train data
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A city with this name already exists
    #[error("city {0:?} already exists")]
    DuplicateCity(String),

    /// A city with this id already exists
    #[error("city id {0} is already taken")]
    DuplicateCityId(CityId),

    /// A train with this name already exists
    #[error("train {0:?} already exists")]
    DuplicateTrainName(String),

    /// Another train already serves this hop with the same travel time
    #[error("train {existing:?} already runs {from} -> {to} in {minutes} min; change the travel time")]
    DuplicateLink {
        existing: String,
        from: CityId,
        to: CityId,
        minutes: u32,
    },

    /// Referenced city does not exist
    #[error("unknown city {0}")]
    UnknownCity(CityId),

    /// Seed file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON
    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::DuplicateCity("A".into());
        assert_eq!(err.to_string(), "city \"A\" already exists");

        let err = NetworkError::DuplicateLink {
            existing: "t1".into(),
            from: CityId::new(1),
            to: CityId::new(2),
            minutes: 9,
        };
        assert_eq!(
            err.to_string(),
            "train \"t1\" already runs 1 -> 2 in 9 min; change the travel time"
        );

        let err = NetworkError::UnknownCity(CityId::new(8));
        assert_eq!(err.to_string(), "unknown city 8");

        let err = NetworkError::from(DomainError::InvalidTravelTime(0));
        assert_eq!(err.to_string(), "travel time must be positive, got 0");
    }
}
