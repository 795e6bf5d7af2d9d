//! Single-hop redirect resolution.
//!
//! A short link is requested once with redirect following disabled. A 301,
//! 302 or 303 answer yields its `Location` header as the deshortened URI;
//! every other answer, and every transport failure, maps to one of the
//! failure variants of [`Outcome`]. Nothing here retries or follows chains.

mod outcome;
mod preview;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use log::{debug, error, warn};
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::StatusCode;
use tokio::task::JoinHandle;
use url::Url;

use crate::config::{Config, REDIRECT_STATUS_CODES};
use crate::error_handling::{categorize_reqwest_error, InitializationError};
use crate::initialization::init_redirect_client;

pub use outcome::{Deshortened, Outcome, OutcomeKind};
pub use preview::PreviewHosts;

/// Resolves short links to their redirect target.
///
/// Cloning is cheap: the HTTP client is reference counted internally and the
/// preview registry is shared.
#[derive(Debug, Clone)]
pub struct Deshortener {
    client: reqwest::Client,
    preview_hosts: Arc<PreviewHosts>,
}

impl Deshortener {
    /// Wraps an existing client. The client must not follow redirects,
    /// otherwise every short link resolves to `CannotDeshorten`.
    pub fn new(client: reqwest::Client, preview_hosts: PreviewHosts) -> Self {
        Self {
            client,
            preview_hosts: Arc::new(preview_hosts),
        }
    }

    /// Builds a resolver with a redirect-less client and the default preview
    /// registry.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_redirect_client(config)?;
        Ok(Self::new(client, PreviewHosts::default()))
    }

    pub fn preview_hosts(&self) -> &PreviewHosts {
        &self.preview_hosts
    }

    /// Deshortens `uri`.
    ///
    /// Never fails: transport errors become [`Outcome::NetworkError`] and are
    /// logged with the attempted URI.
    pub async fn resolve(&self, uri: &Url) -> Outcome {
        if let Some(host) = uri.host_str() {
            if self.preview_hosts.is_preview_host(host) {
                debug!("{host} shows a preview page, not requesting {uri}");
                return Outcome::ShowsPreview;
            }
        }

        let response = match self.client.get(uri.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    "Unable to communicate to shortened url {uri} ({}): {e}",
                    categorize_reqwest_error(&e)
                );
                return Outcome::NetworkError;
            }
        };

        let status = response.status();
        debug!("{uri} answered {status}");
        match redirect_target(uri, status, response.headers()) {
            Some(target) => Outcome::Success(target),
            None => Outcome::CannotDeshorten,
        }
    }

    /// Runs one resolution on a background task.
    ///
    /// The request is not cancellable: dropping the handle detaches the task,
    /// it does not abort it.
    pub fn spawn_resolve(&self, uri: Url) -> JoinHandle<Outcome> {
        let resolver = self.clone();
        tokio::spawn(async move { resolver.resolve(&uri).await })
    }
}

/// Extracts the deshortened URI from a response head.
///
/// Returns `None` unless `status` is one of [`REDIRECT_STATUS_CODES`] and a
/// non-empty `Location` parses. A relative `Location` is joined onto `base`;
/// an absolute one is kept as sent.
pub fn redirect_target(
    base: &Url,
    status: StatusCode,
    headers: &HeaderMap,
) -> Option<Deshortened> {
    if !REDIRECT_STATUS_CODES.contains(&status.as_u16()) {
        return None;
    }

    let Some(value) = headers.get(LOCATION) else {
        warn!("Redirect status {status} for {base} but no Location header");
        return None;
    };

    let location = match value.to_str() {
        Ok(location) => location.trim(),
        Err(_) => {
            warn!("Location header of {base} is not valid UTF-8");
            return None;
        }
    };
    if location.is_empty() {
        warn!("Redirect status {status} for {base} with empty Location header");
        return None;
    }

    match Deshortened::parse(base, location) {
        Ok(target) => Some(target),
        Err(e) => {
            warn!("Unparsable Location header {location:?} for {base}: {e}");
            None
        }
    }
}
