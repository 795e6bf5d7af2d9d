// Shared test helpers for resolver and trust store setup.

use deshortener::{Config, Deshortener, PreviewHosts, TrustStore};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A resolver with the default client settings and preview registry.
#[allow(dead_code)] // Used by other test files
pub fn default_resolver() -> Deshortener {
    Deshortener::from_config(&Config {
        user_agent: "deshortener_test/1.0".to_string(),
        ..Default::default()
    })
    .expect("Failed to build resolver")
}

/// A resolver with a custom preview registry.
#[allow(dead_code)] // Used by other test files
pub fn resolver_with_preview_hosts(hosts: &[&str]) -> Deshortener {
    let client = deshortener::initialization::init_redirect_client(&Config::default())
        .expect("Failed to build client");
    Deshortener::new(client, PreviewHosts::from_hosts(hosts.iter().copied()))
}

/// Creates an in-memory trust store with migrations applied.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_store() -> TrustStore {
    TrustStore::open_in_memory()
        .await
        .expect("Failed to create test trust store")
}

/// Mounts a GET route answering `status`, with `Location` when given.
#[allow(dead_code)] // Used by other test files
pub async fn mount_route(server: &MockServer, route: &str, status: u16, location: Option<&str>) {
    let mut template = ResponseTemplate::new(status);
    if let Some(location) = location {
        template = template.insert_header("Location", location);
    }
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Absolute URL of `route` on the mock server.
#[allow(dead_code)] // Used by other test files
pub fn url_on(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("Mock server URL must parse")
}
