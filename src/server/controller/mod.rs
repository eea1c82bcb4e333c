//! HTTP request handlers.
//!
//! Controllers extract request parameters, call into the service layer and
//! serialize the result as JSON. Each handler carries a `utoipa` annotation
//! feeding the generated OpenAPI document.

pub mod demo;
pub mod diagnostics;
pub mod meta;
