use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; aggregation itself is stateless, so the pool and
/// configuration are all a handler needs.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pulse_db::DbPool,
    /// Server configuration (JWT validation, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
