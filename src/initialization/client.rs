//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for deshortening.
///
/// Creates a `reqwest::Client` with redirects disabled so the first response
/// of a short link is observed as-is. No timeout is set; the client default
/// applies.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_redirect_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(config.user_agent.clone())
        .build()
}
