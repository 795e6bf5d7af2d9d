//! Rendering of resolution reports.

use colored::*;
use serde::Serialize;
use url::Url;

use crate::config::OutputFormat;
use crate::gate::Decision;
use crate::resolve::OutcomeKind;

/// Turns ANSI coloring off when stdout is not a terminal.
///
/// `colored` already honors `NO_COLOR` and `CLICOLOR_FORCE`; this covers
/// output redirected to a file or a pipe.
pub fn init_color(stdout_is_terminal: bool) {
    if !stdout_is_terminal {
        colored::control::set_override(false);
    }
}

/// One line of `resolve` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub short_uri: String,
    pub outcome: OutcomeKind,
    pub deshortened_uri: Option<String>,
    pub trusted: bool,
    pub action: &'static str,
}

impl ResolutionReport {
    pub fn new(short: &Url, trusted: bool, decision: &Decision) -> Self {
        let (outcome, action) = match decision {
            Decision::OpenAutomatically(_) => (OutcomeKind::Success, "open"),
            Decision::Confirm { .. } => (OutcomeKind::Success, "confirm"),
            Decision::Fallback { reason, .. } => (*reason, "fallback"),
        };
        Self {
            short_uri: short.to_string(),
            outcome,
            deshortened_uri: decision.target().map(|target| target.as_str().to_string()),
            trusted,
            action,
        }
    }

    /// Formats the report as a single line without a trailing newline.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => {
                serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Plain => self.render_plain(),
        }
    }

    fn render_plain(&self) -> String {
        match &self.deshortened_uri {
            Some(target) => {
                let note = if self.trusted { " (trusted)" } else { "" };
                format!(
                    "{} {} {}{}",
                    self.short_uri,
                    "->".green(),
                    target.bold(),
                    note
                )
            }
            None => format!(
                "{} {} {}",
                self.short_uri,
                "!!".red(),
                describe_failure(self.outcome)
            ),
        }
    }
}

fn describe_failure(outcome: OutcomeKind) -> &'static str {
    match outcome {
        OutcomeKind::NetworkError => "network error, the short link could not be reached",
        OutcomeKind::ShowsPreview => {
            "this shortener shows a preview page, open the short link to see it"
        }
        OutcomeKind::Success | OutcomeKind::CannotDeshorten => {
            "no redirect, the link cannot be deshortened"
        }
    }
}
