//! Resolution outcome model.

use std::fmt;

use serde::{Serialize, Serializer};
use strum_macros::{EnumIter, IntoStaticStr};
use url::{ParseError, Url};

/// A deshortened URI.
///
/// Keeps the `Location` value exactly as the server sent it next to its
/// parsed form. `Url` normalizes (trailing slash, host case, escaping), so
/// reports use [`as_str`](Self::as_str) and only navigation uses [`url`](Self::url).
/// A relative `Location` has no meaningful raw form and is reported joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deshortened {
    location: String,
    url: Url,
}

impl Deshortened {
    /// Parses a `Location` value, joining it onto `base` when it is relative.
    pub fn parse(base: &Url, location: &str) -> Result<Self, ParseError> {
        match Url::parse(location) {
            Ok(url) => Ok(Self {
                location: location.to_string(),
                url,
            }),
            Err(ParseError::RelativeUrlWithoutBase) => Ok(base.join(location)?.into()),
            Err(e) => Err(e),
        }
    }

    /// The URI as read from the `Location` header.
    pub fn as_str(&self) -> &str {
        &self.location
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl From<Url> for Deshortened {
    fn from(url: Url) -> Self {
        Self {
            location: url.to_string(),
            url,
        }
    }
}

impl fmt::Display for Deshortened {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

/// Result of one deshortening attempt.
///
/// Only `Success` carries a URI; the failure variants carry nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The short link answered 301/302/303; holds the `Location` value.
    Success(Deshortened),
    /// The request could not be completed (DNS, connect, timeout, protocol).
    NetworkError,
    /// The host shows an interstitial preview page, so it was not requested.
    ShowsPreview,
    /// The server answered, but not with a usable redirect.
    CannotDeshorten,
}

/// Payload-free discriminant of an [`Outcome`], with stable snake_case labels
/// for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    NetworkError,
    ShowsPreview,
    CannotDeshorten,
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Success(_) => OutcomeKind::Success,
            Outcome::NetworkError => OutcomeKind::NetworkError,
            Outcome::ShowsPreview => OutcomeKind::ShowsPreview,
            Outcome::CannotDeshorten => OutcomeKind::CannotDeshorten,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The resolved target, present only for `Success`.
    pub fn deshortened_uri(&self) -> Option<&Deshortened> {
        match self {
            Outcome::Success(uri) => Some(uri),
            _ => None,
        }
    }

    /// Consumes the outcome, yielding the resolved target if there is one.
    pub fn into_deshortened_uri(self) -> Option<Deshortened> {
        match self {
            Outcome::Success(uri) => Some(uri),
            _ => None,
        }
    }
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OutcomeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn success() -> Outcome {
        Outcome::Success(Url::parse("http://www.google.com/").unwrap().into())
    }

    fn base() -> Url {
        Url::parse("http://goo.gl/fbsS").unwrap()
    }

    #[test]
    fn test_only_success_carries_uri() {
        assert_eq!(
            success().deshortened_uri().map(Deshortened::as_str),
            Some("http://www.google.com/")
        );
        for outcome in [
            Outcome::NetworkError,
            Outcome::ShowsPreview,
            Outcome::CannotDeshorten,
        ] {
            assert!(!outcome.is_success());
            assert!(outcome.deshortened_uri().is_none());
            assert!(outcome.into_deshortened_uri().is_none());
        }
    }

    #[test]
    fn test_kind_labels() {
        let labels: Vec<&str> = OutcomeKind::iter().map(|k| k.as_str()).collect();
        assert_eq!(
            labels,
            vec!["success", "network_error", "shows_preview", "cannot_deshorten"]
        );
        assert_eq!(success().kind(), OutcomeKind::Success);
        assert_eq!(Outcome::ShowsPreview.kind().to_string(), "shows_preview");
        assert_eq!(
            serde_json::to_string(&OutcomeKind::CannotDeshorten).unwrap(),
            "\"cannot_deshorten\""
        );
    }

    #[test]
    fn test_deshortened_keeps_absolute_location_verbatim() {
        for location in [
            "http://www.google.com",
            "http://canurl.com",
            "http://EXAMPLE.com/a|b c",
        ] {
            let target = Deshortened::parse(&base(), location).unwrap();
            assert_eq!(target.as_str(), location);
            assert_eq!(target.to_string(), location);
        }

        let target = Deshortened::parse(&base(), "http://EXAMPLE.com/a|b c").unwrap();
        assert_eq!(target.url().as_str(), "http://example.com/a|b%20c");
    }

    #[test]
    fn test_deshortened_relative_location_is_joined() {
        let target = Deshortened::parse(&base(), "/landing?id=7").unwrap();
        assert_eq!(target.as_str(), "http://goo.gl/landing?id=7");
        assert_eq!(target.into_url().as_str(), "http://goo.gl/landing?id=7");
    }

    #[test]
    fn test_deshortened_rejects_unparsable_location() {
        assert!(Deshortened::parse(&base(), "http://[::1").is_err());
    }
}
