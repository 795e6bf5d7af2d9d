//! Process exit status policy for the `resolve` command.
//!
//! A failed resolution is an outcome, not a process failure. Only inputs
//! rejected before any request was made change the status.

use crate::app::commands::ResolveSummary;

/// Every input was accepted (whatever each resolution produced).
pub const EXIT_OK: i32 = 0;
/// Initialization, database or other infrastructure failure.
pub const EXIT_FAILURE: i32 = 1;
/// Some inputs were not valid short links; the valid ones were still resolved.
pub const EXIT_REJECTED_INPUT: i32 = 2;

/// Exit status for a completed `resolve` run.
pub fn exit_code(summary: &ResolveSummary) -> i32 {
    if summary.rejected.is_empty() {
        EXIT_OK
    } else {
        EXIT_REJECTED_INPUT
    }
}
