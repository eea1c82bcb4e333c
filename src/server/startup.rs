use std::sync::Arc;

use crate::server::{
    config::Config,
    data::{DatabaseModule, DemoDataset},
    error::AppError,
};

/// Builds the immutable demo dataset served by every endpoint.
///
/// Construction validates the leaderboard ordering and the summary index
/// against the user collection. A violation aborts startup; the records are
/// compiled in and cannot be corrected at runtime.
///
/// # Returns
/// - `Ok(Arc<DemoDataset>)` - Validated dataset ready to share across handlers
/// - `Err(AppError)` - A construction invariant does not hold
pub fn build_dataset() -> Result<Arc<DemoDataset>, AppError> {
    let dataset = DemoDataset::demo()?;

    tracing::info!(
        users = dataset.users.len(),
        badges = dataset.badges.len(),
        leaderboard = dataset.leaderboard.len(),
        "Demo dataset ready"
    );

    Ok(Arc::new(dataset))
}

/// Locates the optional database collaborator.
///
/// The demo build bundles no database integration, so this resolves to
/// `None` and the diagnostics endpoint reports the module as missing. A
/// deployment that ships an integration constructs its [`DatabaseModule`]
/// here before the router starts serving.
pub fn detect_database(config: &Config) -> Option<DatabaseModule> {
    if config.database_url.is_some() {
        tracing::debug!("DATABASE_URL is set but no database module is bundled");
    }

    None
}
