//! Server-side API backend for the gamification demo.
//!
//! This module contains the complete backend implementation: API endpoints,
//! the fixed demo dataset they serve, and the supporting infrastructure. The
//! backend uses Axum as the web framework and serves only immutable,
//! compiled-in records; there is no persistence layer.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO serialization
//! - **Service Layer** (`service/`) - Lookup logic and diagnostics assembly
//! - **Data Layer** (`data/`) - The startup-built demo dataset and the optional
//!   database collaborator seam
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state cloned into each handler
//! - **Startup** (`startup`) - Dataset construction and collaborator detection
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives an HTTP request and routes it to a controller
//! 2. **Controller** extracts parameters and calls into a service
//! 3. **Service** resolves the request against the immutable dataset
//! 4. **Controller** serializes the result (or the not-found error) as JSON
//!
//! Every handler is read-only, so state is shared without synchronization.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
