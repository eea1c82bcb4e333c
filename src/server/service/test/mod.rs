use std::sync::Arc;

use crate::model::api::AwardDto;
use crate::server::data::demo::DemoDataset;
use crate::server::data::probe::{DatabaseHandle, DatabaseModule, HandleError};
use crate::server::error::AppError;
use crate::server::service::demo::DemoService;
use crate::server::service::diagnostics::DiagnosticsService;

/// Handle double that lists a fixed set of collections.
struct StaticHandle {
    name: &'static str,
    collections: Vec<String>,
}

impl DatabaseHandle for StaticHandle {
    fn name(&self) -> Option<String> {
        Some(self.name.to_string())
    }

    fn list_collection_names(&self) -> Result<Vec<String>, HandleError> {
        Ok(self.collections.clone())
    }
}

/// Handle double whose enumeration always fails with the given message.
struct FailingHandle {
    message: String,
}

impl DatabaseHandle for FailingHandle {
    fn name(&self) -> Option<String> {
        None
    }

    fn list_collection_names(&self) -> Result<Vec<String>, HandleError> {
        Err(HandleError::Enumeration(self.message.clone()))
    }
}
