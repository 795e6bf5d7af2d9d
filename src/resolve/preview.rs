//! Preview host registry.

use std::collections::HashSet;

use crate::config::PREVIEW_HOSTS;

/// Hosts whose short links render an interstitial preview page instead of
/// redirecting.
///
/// Read-only once built. The default registry holds [`PREVIEW_HOSTS`].
#[derive(Debug, Clone)]
pub struct PreviewHosts {
    hosts: HashSet<String>,
}

impl PreviewHosts {
    /// Builds a registry from an explicit list of hostnames.
    pub fn from_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            hosts: hosts.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn is_preview_host(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl Default for PreviewHosts {
    fn default() -> Self {
        Self::from_hosts(PREVIEW_HOSTS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contains_cli_gs() {
        let hosts = PreviewHosts::default();
        assert!(hosts.is_preview_host("cli.gs"));
        assert_eq!(hosts.len(), 1);
    }

    #[test]
    fn test_membership_is_exact() {
        let hosts = PreviewHosts::default();
        assert!(!hosts.is_preview_host("CLI.GS"));
        assert!(!hosts.is_preview_host("www.cli.gs"));
        assert!(!hosts.is_preview_host("cli.gs."));
        assert!(!hosts.is_preview_host("goo.gl"));
        assert!(!hosts.is_preview_host(""));
    }

    #[test]
    fn test_from_hosts() {
        let hosts = PreviewHosts::from_hosts(["preview.example", "interstitial.test"]);
        assert!(hosts.is_preview_host("preview.example"));
        assert!(hosts.is_preview_host("interstitial.test"));
        assert!(!hosts.is_preview_host("cli.gs"));

        assert!(PreviewHosts::from_hosts(Vec::<String>::new()).is_empty());
    }
}
