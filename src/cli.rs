//! Command-line interface definition.
//!
//! Lives in the library so the argument grammar can be tested without
//! spawning the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, LogFormat, LogLevel, OutputFormat, DB_PATH, DEFAULT_USER_AGENT};
use crate::gate::TrustChoice;

/// Deshortens short links with a single non-following request.
#[derive(Debug, Parser)]
#[command(name = "deshortener", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Trust store database (SQLite file)
    #[arg(long, global = true, default_value = DB_PATH)]
    pub db_path: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Report format on stdout
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve one or more short links
    Resolve(ResolveArgs),
    /// Inspect or edit the trusted domains and URIs
    #[command(subcommand)]
    Trust(TrustCommand),
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Short links to resolve
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Trust the host of every successfully resolved link
    #[arg(long, conflicts_with = "trust_uri")]
    pub trust_domain: bool,

    /// Trust every successfully resolved short link
    #[arg(long)]
    pub trust_uri: bool,
}

impl ResolveArgs {
    pub fn trust_choice(&self) -> Option<TrustChoice> {
        if self.trust_domain {
            Some(TrustChoice::Domain)
        } else if self.trust_uri {
            Some(TrustChoice::Uri)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum TrustCommand {
    /// List trusted domains and URIs
    List,
    /// Trust every short link on a host
    AddDomain { domain: String },
    /// Stop trusting a host
    RemoveDomain { domain: String },
    /// Trust a single short link
    AddUri { uri: String },
    /// Stop trusting a single short link
    RemoveUri { uri: String },
    /// Remove all trusted domains
    ClearDomains,
    /// Remove all trusted URIs
    ClearUris,
    /// Remove all trusted domains and URIs
    Clear,
}

impl From<&GlobalArgs> for Config {
    fn from(args: &GlobalArgs) -> Self {
        Config {
            db_path: args.db_path.clone(),
            log_level: args.log_level.clone(),
            log_format: args.log_format.clone(),
            user_agent: args.user_agent.clone(),
            output: args.output,
        }
    }
}
