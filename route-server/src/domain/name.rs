//! Name rules shared by cities and trains.

use super::error::DomainError;

/// Maximum length of a city or train name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Trim a name and check it is non-empty and not too long.
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidName("must not be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::InvalidName("must be at most 50 characters"));
    }
    Ok(name.to_string())
}
