use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::ImageStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`). The pool is owned here and passed explicitly to repositories --
/// there is no ambient global connection handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: stonegate_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the external image hosting collaborator.
    pub image_store: Arc<dyn ImageStore>,
}
