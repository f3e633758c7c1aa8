//! Application state for the web layer.

use std::sync::Arc;

use crate::network::{RailNetwork, SharedNetwork};
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Cities and train links
    pub network: SharedNetwork,

    /// Route search configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(network: RailNetwork, config: SearchConfig) -> Self {
        Self {
            network: SharedNetwork::new(network),
            config: Arc::new(config),
        }
    }
}
