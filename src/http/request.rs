//! Target extraction from the inbound request.
//!
//! # Responsibilities
//! - Strip the leading path segment (`/proxy/`, or any other)
//! - Re-attach query and fragment to rebuild the target URL
//! - Validate the `http` prefix and parse into a `RelayTarget`
//!
//! # Design Decisions
//! - Works on the raw, still percent-encoded path so the target is
//!   forwarded byte-for-byte
//! - Extraction is lossless; validation happens afterwards

use std::fmt;

use axum::http::Uri;
use url::Url;

use crate::http::error::RelayError;

/// Paths that serve the landing page instead of relaying.
pub const LANDING_PATHS: [&str; 2] = ["/", "/proxy/"];

/// Returns true if the path is served by the landing page.
pub fn is_landing_path(path: &str) -> bool {
    LANDING_PATHS.contains(&path)
}

/// Rebuild the target URL string from an inbound path, query and fragment.
///
/// Everything after the first `/` that follows position 0 is kept. A path
/// with no such `/` is returned whole, which later fails validation.
/// Empty query or fragment components are dropped.
pub fn extract_target(path: &str, query: Option<&str>, fragment: Option<&str>) -> String {
    let remainder = match path.get(1..).and_then(|rest| rest.find('/')) {
        Some(idx) => &path[idx + 2..],
        None => path,
    };

    let mut target = String::with_capacity(path.len() + 2);
    target.push_str(remainder);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    if let Some(fragment) = fragment.filter(|f| !f.is_empty()) {
        target.push('#');
        target.push_str(fragment);
    }
    target
}

/// A validated absolute http(s) URL to forward to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayTarget {
    url: Url,
}

impl RelayTarget {
    /// Extract and parse the target from an inbound request URI.
    ///
    /// Servers never see the fragment, so only path and query are used.
    pub fn from_uri(uri: &Uri) -> Result<Self, RelayError> {
        Self::parse(&extract_target(uri.path(), uri.query(), None))
    }

    /// Validate a candidate target string.
    pub fn parse(candidate: &str) -> Result<Self, RelayError> {
        if candidate.is_empty() || !candidate.starts_with("http") {
            return Err(RelayError::InvalidTargetSyntax);
        }

        let url = Url::parse(candidate)?;
        match url.scheme() {
            "http" | "https" => Ok(Self { url }),
            other => Err(RelayError::UnsupportedScheme(other.to_string())),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl fmt::Display for RelayTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
