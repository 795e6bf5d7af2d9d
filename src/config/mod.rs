//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (database path, URL limits, redirect statuses)
//! - The preview host table
//! - Library configuration and option enums shared with the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
