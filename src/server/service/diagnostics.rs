//! Database connectivity diagnostics.
//!
//! Assembles the report served by the `/test` endpoint. The endpoint exists
//! for observability, so every failure mode of the probe is folded into the
//! report's strings and assembly itself cannot fail.

use crate::model::api::DiagnosticsDto;
use crate::server::data::DatabaseModule;

/// Longest error excerpt embedded in a report.
const ERROR_EXCERPT_CHARS: usize = 50;

/// Most collection names listed in a report.
const MAX_COLLECTIONS: usize = 10;

/// Service assembling the database connectivity report.
pub struct DiagnosticsService<'a> {
    database: Option<&'a DatabaseModule>,
    database_url_set: bool,
    database_name_set: bool,
}

impl<'a> DiagnosticsService<'a> {
    /// Creates a new DiagnosticsService instance.
    ///
    /// # Arguments
    /// - `database` - The installed database collaborator, if any
    /// - `database_url_set` - Whether `DATABASE_URL` was present at startup
    /// - `database_name_set` - Whether `DATABASE_NAME` was present at startup
    pub fn new(
        database: Option<&'a DatabaseModule>,
        database_url_set: bool,
        database_name_set: bool,
    ) -> Self {
        Self {
            database,
            database_url_set,
            database_name_set,
        }
    }

    /// Assembles the connectivity report.
    ///
    /// Probes the collaborator when one is installed, enumerating up to
    /// [`MAX_COLLECTIONS`] collection names through a live handle. The
    /// environment flags are reported independently of the probe, so a
    /// missing module never masks a configured environment.
    pub fn report(&self) -> DiagnosticsDto {
        let (database, connection_status, collections) = match self.database {
            None => (
                "❌ Database module not found".to_string(),
                "Not Connected".to_string(),
                Vec::new(),
            ),
            Some(module) => match &module.handle {
                None => (
                    "⚠️  Available but not initialized".to_string(),
                    "Not Connected".to_string(),
                    Vec::new(),
                ),
                Some(handle) => {
                    tracing::debug!(name = ?handle.name(), "Probing database handle");

                    match handle.list_collection_names() {
                        Ok(names) => (
                            "✅ Connected & Working".to_string(),
                            "Connected".to_string(),
                            names.into_iter().take(MAX_COLLECTIONS).collect(),
                        ),
                        Err(err) => (
                            format!("⚠️  Connected but Error: {}", excerpt(&err.to_string())),
                            "Connected".to_string(),
                            Vec::new(),
                        ),
                    }
                }
            },
        };

        DiagnosticsDto {
            backend: "✅ Running".to_string(),
            database,
            database_url: presence(self.database_url_set),
            database_name: presence(self.database_name_set),
            connection_status,
            collections,
        }
    }
}

fn presence(set: bool) -> String {
    if set {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

/// First [`ERROR_EXCERPT_CHARS`] characters of an error message.
fn excerpt(message: &str) -> String {
    message.chars().take(ERROR_EXCERPT_CHARS).collect()
}
