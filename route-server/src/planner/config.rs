//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of cities a graph may contain.
    /// Larger graphs are refused before any traversal starts.
    pub max_cities: usize,

    /// Maximum number of candidate paths to enumerate.
    /// Enumeration stops here and the outcome is marked truncated.
    pub max_candidates: usize,

    /// Maximum number of path extensions the depth-first search may make.
    /// Bounds the work of a search whether or not any path is found.
    pub max_explored: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_cities: usize, max_candidates: usize, max_explored: usize) -> Self {
        Self {
            max_cities,
            max_candidates,
            max_explored,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_cities: 1_000,
            max_candidates: 10_000,
            max_explored: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();

        assert_eq!(config.max_cities, 1_000);
        assert_eq!(config.max_candidates, 10_000);
        assert_eq!(config.max_explored, 100_000);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::new(20, 5, 300);

        assert_eq!(config.max_cities, 20);
        assert_eq!(config.max_candidates, 5);
        assert_eq!(config.max_explored, 300);
    }
}
