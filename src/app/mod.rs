//! Command-line application support.
//!
//! This module provides input validation, report rendering and the command
//! runners used by the `deshortener` binary.

pub mod commands;
pub mod exit;
pub mod output;
pub mod url;

// Re-export public API
pub use commands::{run_resolve, run_trust, ResolveSummary};
pub use exit::{exit_code, EXIT_FAILURE, EXIT_OK, EXIT_REJECTED_INPUT};
pub use output::{init_color, ResolutionReport};
pub use self::url::validate_and_normalize_url;
