//! Command runners behind the `deshortener` subcommands.

use anyhow::{Context, Result};
use log::{info, warn};
use url::{Host, Url};

use crate::app::output::ResolutionReport;
use crate::app::url::validate_and_normalize_url;
use crate::cli::TrustCommand;
use crate::config::Config;
use crate::error_handling::InputError;
use crate::gate::{decide, record_trust, Decision, TrustChoice};
use crate::resolve::Deshortener;
use crate::storage::TrustStore;

/// Everything a `resolve` invocation produced.
#[derive(Debug, Default)]
pub struct ResolveSummary {
    /// One report per accepted input, in input order.
    pub reports: Vec<ResolutionReport>,
    /// Inputs rejected before any request was made.
    pub rejected: Vec<(String, InputError)>,
}

/// Resolves every input in order, one background task at a time.
///
/// Trust is read before each request. With `trust` set, successful
/// resolutions that were not yet trusted are recorded afterwards.
pub async fn run_resolve(
    config: &Config,
    inputs: &[String],
    trust: Option<TrustChoice>,
) -> Result<ResolveSummary> {
    let resolver =
        Deshortener::from_config(config).context("Failed to initialize HTTP client")?;
    let store = TrustStore::open(&config.db_path)
        .await
        .context("Failed to open trust store")?;

    let summary = resolve_all(&resolver, &store, inputs, trust).await;
    store.close().await;
    summary
}

/// [`run_resolve`] with the resolver and store supplied by the caller.
pub async fn resolve_all(
    resolver: &Deshortener,
    store: &TrustStore,
    inputs: &[String],
    trust: Option<TrustChoice>,
) -> Result<ResolveSummary> {
    let mut summary = ResolveSummary::default();

    for input in inputs {
        let short = match validate_and_normalize_url(input) {
            Ok(short) => short,
            Err(e) => {
                warn!("Skipping {input:?}: {e}");
                summary.rejected.push((input.clone(), e));
                continue;
            }
        };

        let trusted = store
            .is_trusted(&short)
            .await
            .context("Failed to check trust")?;

        let outcome = resolver
            .spawn_resolve(short.clone())
            .await
            .context("Resolution task panicked")?;
        info!("{short} resolved to {}", outcome.kind());

        let decision = decide(&short, trusted, outcome);
        if let (Decision::Confirm { .. }, Some(choice)) = (&decision, trust) {
            record_trust(store, &short, choice)
                .await
                .context("Failed to record trust")?;
        }

        summary
            .reports
            .push(ResolutionReport::new(&short, trusted, &decision));
    }

    Ok(summary)
}

/// Runs a `trust` subcommand and returns the lines to print.
pub async fn run_trust(config: &Config, command: TrustCommand) -> Result<Vec<String>> {
    let store = TrustStore::open(&config.db_path)
        .await
        .context("Failed to open trust store")?;
    let lines = apply_trust_command(&store, command).await;
    store.close().await;
    lines
}

/// [`run_trust`] against an already opened store.
pub async fn apply_trust_command(store: &TrustStore, command: TrustCommand) -> Result<Vec<String>> {
    let lines = match command {
        TrustCommand::List => {
            let mut lines = Vec::new();
            for domain in store.domains().await? {
                lines.push(format!("domain\t{domain}"));
            }
            for uri in store.uris().await? {
                lines.push(format!("uri\t{uri}"));
            }
            lines
        }
        TrustCommand::AddDomain { domain } => {
            let domain = normalize_domain(&domain)?;
            let added = store.add_domain(&domain).await?;
            vec![changed_line(added, "Trusted", "Already trusted", &domain)]
        }
        TrustCommand::RemoveDomain { domain } => {
            let domain = normalize_domain(&domain)?;
            let removed = store.remove_domain(&domain).await?;
            vec![changed_line(removed, "Removed", "Not trusted", &domain)]
        }
        TrustCommand::AddUri { uri } => {
            let uri = validate_and_normalize_url(&uri)?;
            let added = store.add_uri(&uri).await?;
            vec![changed_line(added, "Trusted", "Already trusted", uri.as_str())]
        }
        TrustCommand::RemoveUri { uri } => {
            let uri = validate_and_normalize_url(&uri)?;
            let removed = store.remove_uri(&uri).await?;
            vec![changed_line(removed, "Removed", "Not trusted", uri.as_str())]
        }
        TrustCommand::ClearDomains => {
            let count = store.remove_all_domains().await?;
            vec![format!("Removed {count} trusted domain(s)")]
        }
        TrustCommand::ClearUris => {
            let count = store.remove_all_uris().await?;
            vec![format!("Removed {count} trusted uri(s)")]
        }
        TrustCommand::Clear => {
            let (domains, uris) = store.clear().await?;
            vec![format!(
                "Removed {domains} trusted domain(s) and {uris} trusted uri(s)"
            )]
        }
    };
    Ok(lines)
}

/// Lowercases and validates a bare host so it compares equal to
/// [`Url::host_str`] of the links it should match.
fn normalize_domain(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let host = Host::parse(trimmed)?;
    // Reuse Url's serialization so IPv6 hosts keep their brackets
    let url = Url::parse(&format!("http://{host}/"))?;
    url.host_str()
        .map(str::to_string)
        .ok_or(InputError::MissingHost)
}

fn changed_line(changed: bool, yes: &str, no: &str, subject: &str) -> String {
    if changed {
        format!("{yes} {subject}")
    } else {
        format!("{no} {subject}")
    }
}
