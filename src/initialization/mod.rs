//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - HTTP client (redirects disabled)
//! - Logger
//!
//! The trust store pool is opened through [`TrustStore::open`](crate::TrustStore::open).

mod client;
mod logger;

// Re-export public API
pub use client::init_redirect_client;
pub use logger::init_logger_with;
