//! Trust gating applied after a resolution.
//!
//! The resolver only reports where a short link points. Whether that target
//! may open without asking is decided here, from the trust state of the short
//! link captured before the request was made.

use url::Url;

use crate::error_handling::DatabaseError;
use crate::resolve::{Deshortened, Outcome, OutcomeKind};
use crate::storage::TrustStore;

/// What the front end should do with a finished resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The short link is trusted: open the target right away.
    OpenAutomatically(Deshortened),
    /// Show the target and offer to trust the short link's host or the link itself.
    Confirm {
        target: Deshortened,
        domain: Option<String>,
    },
    /// Nothing was resolved; offer the original short link instead.
    Fallback { original: Url, reason: OutcomeKind },
}

impl Decision {
    pub fn target(&self) -> Option<&Deshortened> {
        match self {
            Decision::OpenAutomatically(target) | Decision::Confirm { target, .. } => Some(target),
            Decision::Fallback { .. } => None,
        }
    }
}

/// Maps an outcome to a [`Decision`].
pub fn decide(short: &Url, trusted: bool, outcome: Outcome) -> Decision {
    let reason = outcome.kind();
    match outcome.into_deshortened_uri() {
        Some(target) if trusted => Decision::OpenAutomatically(target),
        Some(target) => Decision::Confirm {
            target,
            domain: short.host_str().map(str::to_string),
        },
        None => Decision::Fallback {
            original: short.clone(),
            reason,
        },
    }
}

/// Which allow-list a user approval lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrustChoice {
    /// Trust every short link on the same host. Supersedes [`TrustChoice::Uri`].
    Domain,
    /// Trust this one short link.
    Uri,
}

/// Records a user approval of `short`. Returns `false` when nothing changed,
/// either because it was already trusted or because a domain choice was made
/// for a link without a host.
pub async fn record_trust(
    store: &TrustStore,
    short: &Url,
    choice: TrustChoice,
) -> Result<bool, DatabaseError> {
    match choice {
        TrustChoice::Domain => match short.host_str() {
            Some(host) => store.add_domain(host).await,
            None => Ok(false),
        },
        TrustChoice::Uri => store.add_uri(short).await,
    }
}
