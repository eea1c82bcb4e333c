//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct holding everything handlers
//! need. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction. Every field is
//! immutable and cheap to clone, so no synchronization is involved.

use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{DatabaseModule, DemoDataset},
};

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Immutable demo records served by every endpoint.
    pub dataset: Arc<DemoDataset>,

    /// Optional database collaborator.
    ///
    /// `None` when no integration is bundled, which is the normal state of
    /// the demo build. Only the diagnostics endpoint looks at it.
    pub database: Option<DatabaseModule>,

    /// Whether `DATABASE_URL` was present in the environment at startup.
    pub database_url_set: bool,

    /// Whether `DATABASE_NAME` was present in the environment at startup.
    pub database_name_set: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `dataset` - Startup-built demo dataset
    /// - `database` - Optional database collaborator
    /// - `config` - Application configuration, read for env-var presence
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        dataset: Arc<DemoDataset>,
        database: Option<DatabaseModule>,
        config: &Config,
    ) -> Self {
        Self {
            dataset,
            database,
            database_url_set: config.database_url.is_some(),
            database_name_set: config.database_name.is_some(),
        }
    }
}
