//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including defaults for the CLI and the fixed lookup tables of the resolver.

/// Default location of the trust store database.
pub const DB_PATH: &str = "./deshortener.db";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("deshortener/", env!("CARGO_PKG_VERSION"));

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Scheme prepended to input that carries none.
pub const DEFAULT_SCHEME: &str = "http";

/// Status codes whose `Location` header is reported as the deshortened URL.
///
/// 307 and 308 are deliberately absent: only 301 (Moved Permanently),
/// 302 (Found) and 303 (See Other) count as a deshortening redirect.
pub const REDIRECT_STATUS_CODES: &[u16] = &[301, 302, 303];

/// Shortening services that render an interstitial preview page instead of
/// redirecting. Short links on these hosts are never requested.
///
/// To add a host, extend this array.
pub const PREVIEW_HOSTS: &[&str] = &["cli.gs"];
