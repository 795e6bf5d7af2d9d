// Resolve module tests.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use url::Url;

use super::{redirect_target, Deshortened, Deshortener, Outcome, PreviewHosts};

fn base() -> Url {
    Url::parse("http://goo.gl/fbsS").unwrap()
}

fn headers_with(name: &str, value: &[u8]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
    let header_value = HeaderValue::from_bytes(value)
        .unwrap_or_else(|_| panic!("Invalid header value in test: {:?}", value));
    headers.insert(header_name, header_value);
    headers
}

#[test]
fn test_redirect_target_for_each_redirect_status() {
    let headers = headers_with("Location", b"http://www.google.com/");
    for status in [
        StatusCode::MOVED_PERMANENTLY,
        StatusCode::FOUND,
        StatusCode::SEE_OTHER,
    ] {
        let target = redirect_target(&base(), status, &headers);
        assert_eq!(
            target.as_ref().map(Deshortened::as_str),
            Some("http://www.google.com/"),
            "status {status} should deshorten"
        );
    }
}

#[test]
fn test_redirect_target_ignores_other_statuses() {
    let headers = headers_with("Location", b"http://www.google.com/");
    for status in [
        StatusCode::OK,
        StatusCode::NOT_MODIFIED,
        StatusCode::TEMPORARY_REDIRECT,
        StatusCode::PERMANENT_REDIRECT,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        assert!(
            redirect_target(&base(), status, &headers).is_none(),
            "status {status} must not deshorten"
        );
    }
}

#[test]
fn test_redirect_target_missing_location() {
    assert!(redirect_target(&base(), StatusCode::FOUND, &HeaderMap::new()).is_none());
}

#[test]
fn test_redirect_target_empty_location() {
    let headers = headers_with("Location", b"   ");
    assert!(redirect_target(&base(), StatusCode::FOUND, &headers).is_none());
}

#[test]
fn test_redirect_target_non_utf8_location() {
    let headers = headers_with("Location", &[0x68, 0x74, 0xff, 0xfe]);
    assert!(redirect_target(&base(), StatusCode::MOVED_PERMANENTLY, &headers).is_none());
}

#[test]
fn test_redirect_target_relative_location_joins_base() {
    let headers = headers_with("Location", b"/landing?id=7");
    let target = redirect_target(&base(), StatusCode::FOUND, &headers).unwrap();
    assert_eq!(target.as_str(), "http://goo.gl/landing?id=7");
}

#[test]
fn test_redirect_target_reports_location_as_sent() {
    let headers = headers_with("Location", b"http://www.google.com");
    let target = redirect_target(&base(), StatusCode::MOVED_PERMANENTLY, &headers).unwrap();
    assert_eq!(target.as_str(), "http://www.google.com");
    assert_eq!(target.url().as_str(), "http://www.google.com/");
}

#[test]
fn test_redirect_target_header_name_case_insensitive() {
    // HeaderName normalizes to lowercase, so any spelling is found
    let headers = headers_with("LOCATION", b"https://example.com/long/path");
    let target = redirect_target(&base(), StatusCode::SEE_OTHER, &headers).unwrap();
    assert_eq!(target.as_str(), "https://example.com/long/path");
}

#[test]
fn test_redirect_target_keeps_query_verbatim() {
    let long = "http://maps.google.com/maps?f=d&saddr=New+York+Penn+Station&daddr=9th+Ave+%26+14th+St,+New+York,+NY&hl=en";
    let headers = headers_with("Location", long.as_bytes());
    let target = redirect_target(&base(), StatusCode::MOVED_PERMANENTLY, &headers).unwrap();
    assert_eq!(target.as_str(), long);
}

#[tokio::test]
async fn test_preview_host_short_circuits() {
    // Port 1 is closed: reaching the network would produce NetworkError
    let resolver = Deshortener::new(
        reqwest::Client::new(),
        PreviewHosts::from_hosts(["127.0.0.1"]),
    );
    let uri = Url::parse("http://127.0.0.1:1/6fwxm69").unwrap();
    assert_eq!(resolver.resolve(&uri).await, Outcome::ShowsPreview);
}

#[tokio::test]
async fn test_default_preview_host_cli_gs() {
    let resolver = Deshortener::from_config(&crate::Config::default()).unwrap();
    let uri = Url::parse("http://cli.gs/6fwxm69").unwrap();
    assert_eq!(resolver.resolve(&uri).await, Outcome::ShowsPreview);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let resolver = Deshortener::from_config(&crate::Config::default()).unwrap();
    let uri = Url::parse("http://127.0.0.1:1/abc").unwrap();
    assert_eq!(resolver.resolve(&uri).await, Outcome::NetworkError);
}

#[tokio::test]
async fn test_spawn_resolve_runs_in_background() {
    let resolver = Deshortener::from_config(&crate::Config::default()).unwrap();
    let uri = Url::parse("http://cli.gs/6fwxm69").unwrap();
    let outcome = resolver.spawn_resolve(uri).await.unwrap();
    assert_eq!(outcome, Outcome::ShowsPreview);
}
