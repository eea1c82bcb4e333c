//! Optional database collaborator seam.
//!
//! The demo build ships without a database. Deployments that bundle an
//! integration provide it as an injected [`DatabaseModule`]; absence is a
//! normal, representable state rather than an error path. The diagnostics
//! endpoint is the only consumer and never requires the module to exist.

use std::sync::Arc;

use thiserror::Error;

/// Errors a collaborator may surface while enumerating its containers.
#[derive(Error, Debug)]
pub enum HandleError {
    /// The collaborator failed or rejected the enumeration call.
    #[error("{0}")]
    Enumeration(String),
}

/// Live connection handle exposed by a database collaborator.
pub trait DatabaseHandle: Send + Sync {
    /// Identity of the underlying database, when the collaborator knows it.
    fn name(&self) -> Option<String>;

    /// Enumerates the collection names visible through this handle.
    fn list_collection_names(&self) -> Result<Vec<String>, HandleError>;
}

/// An installed database collaborator.
///
/// Covers the two observable states of an installed integration: initialized
/// with a live handle, or present with `handle` unset. A build without the
/// integration carries no `DatabaseModule` at all.
#[derive(Clone, Default)]
pub struct DatabaseModule {
    pub handle: Option<Arc<dyn DatabaseHandle>>,
}
