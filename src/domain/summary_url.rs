//! Validated absolute HTTP(S) URL submitted for summarization.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrl {
    /// The string is not an absolute URL at all.
    #[error("input should be a valid URL: {0}")]
    Malformed(#[from] url::ParseError),

    /// Only `http` and `https` URLs can be summarized.
    #[error("URL scheme should be 'http' or 'https', got '{0}'")]
    UnsupportedScheme(String),

    /// `http:` URLs without an authority, e.g. `http:/path`.
    #[error("URL host is required")]
    MissingHost,
}

/// An absolute `http`/`https` URL with a host.
///
/// Deserializes from a JSON string and rejects anything else, so request
/// payloads carrying a `SummaryUrl` are validated before a handler runs.
/// The stored form is the parsed URL's normalized serialization, e.g.
/// `https://Example.com` becomes `https://example.com/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SummaryUrl(Url);

impl SummaryUrl {
    /// Parses and validates `input`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrl`] when `input` is not absolute, uses a scheme
    /// other than `http`/`https`, or has no host.
    pub fn parse(input: &str) -> Result<Self, InvalidUrl> {
        let url = Url::parse(input.trim())?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(InvalidUrl::UnsupportedScheme(other.to_string())),
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidUrl::MissingHost);
        }
        Ok(Self(url))
    }

    /// Returns the normalized URL text that gets persisted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for SummaryUrl {
    type Error = InvalidUrl;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SummaryUrl> for String {
    fn from(url: SummaryUrl) -> Self {
        url.0.into()
    }
}

impl fmt::Display for SummaryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
