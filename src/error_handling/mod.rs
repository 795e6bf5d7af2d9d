//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, persistence and input validation
//! - Categorization of transport failures for diagnostic logging
//!
//! Resolution failures are not errors: they are reported as
//! [`Outcome`](crate::Outcome) values. The types here cover the
//! infrastructure around the resolver.

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{DatabaseError, InitializationError, InputError, NetworkErrorKind};
