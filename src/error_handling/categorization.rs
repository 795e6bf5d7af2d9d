//! Error categorization.

use super::types::NetworkErrorKind;

/// Categorizes a `reqwest::Error` into a [`NetworkErrorKind`].
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> NetworkErrorKind {
    if error.is_builder() {
        NetworkErrorKind::Builder
    } else if error.is_timeout() {
        NetworkErrorKind::Timeout
    } else if error.is_connect() {
        NetworkErrorKind::Connect
    } else if error.is_request() {
        NetworkErrorKind::Request
    } else if error.is_body() {
        NetworkErrorKind::Body
    } else if error.is_decode() {
        NetworkErrorKind::Decode
    } else {
        NetworkErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_connection_refused() {
        // Port 1 on loopback is not listening in any sane test environment
        let client = reqwest::Client::new();
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("nothing listens on port 1");
        assert_eq!(categorize_reqwest_error(&err), NetworkErrorKind::Connect);
    }

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client
            .get("not a url")
            .send()
            .await
            .expect_err("relative URL cannot be sent");
        assert_eq!(categorize_reqwest_error(&err), NetworkErrorKind::Builder);
    }
}
