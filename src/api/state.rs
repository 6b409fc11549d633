//! Application state for the EOSB engine API.

use std::sync::Arc;

use crate::config::RuleRepository;

/// Shared application state.
///
/// The rule repository is loaded once at startup and read concurrently by
/// every handler without locking.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<RuleRepository>,
}

impl AppState {
    /// Creates a new application state around a loaded rule repository.
    pub fn new(repository: RuleRepository) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Returns the rule repository.
    pub fn repository(&self) -> &RuleRepository {
        &self.repository
    }
}
