use mongodb::Database;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// The database handle is the only process-wide resource; handlers keep no
/// other state between requests.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Deployment settings; handlers currently only need the db handle.
    #[allow(dead_code)]
    pub config: Config,
}
