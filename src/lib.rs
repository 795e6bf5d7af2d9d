//! deshortener library: single-hop resolution of shortened URLs
//!
//! A short link is requested exactly once with redirect following disabled.
//! A 301, 302 or 303 answer yields its `Location` header as the deshortened
//! URI; anything else is reported as one of the failure outcomes. Around the
//! resolver sits a SQLite trust store that decides whether a resolved target
//! may open without confirmation.
//!
//! # Example
//!
//! ```no_run
//! use deshortener::{Config, Deshortener, Outcome};
//! use url::Url;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = Deshortener::from_config(&Config::default())?;
//! let short = Url::parse("http://goo.gl/fbsS")?;
//!
//! match resolver.resolve(&short).await {
//!     Outcome::Success(target) => println!("{short} -> {target}"),
//!     other => println!("{short}: {}", other.kind()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod app;
pub mod cli;
pub mod config;
pub mod error_handling;
pub mod gate;
pub mod initialization;
mod resolve;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{DatabaseError, InitializationError, InputError};
pub use gate::{decide, Decision, TrustChoice};
pub use resolve::{
    redirect_target, Deshortened, Deshortener, Outcome, OutcomeKind, PreviewHosts,
};
pub use storage::{run_migrations, TrustStore};
