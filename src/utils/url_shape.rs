//! Syntactic URL checks.
//!
//! A candidate passes when it looks like `scheme://[www.]host.tld[...]` with an
//! `http` or `https` scheme and parses as an absolute URL with a host.

use regex::Regex;
use std::sync::LazyLock;
use url::{Host, Url};

/// Longest candidate accepted, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

static URL_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=!$,;*']*)$",
    )
    .expect("URL shape pattern compiles")
});

/// Errors that can occur during the shape check.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("URL is empty")]
    Empty,

    #[error("URL exceeds {} bytes", MAX_URL_LENGTH)]
    TooLong,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Where an accepted URL points, for existence checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    pub host: String,
    pub port: u16,
}

/// Checks the shape of `input` and extracts the host and port it targets.
///
/// # Rules
///
/// 1. Non-empty and at most [`MAX_URL_LENGTH`] bytes
/// 2. Parses as an absolute URL
/// 3. Scheme is `http` or `https`
/// 4. Matches the `scheme://[www.]host.tld[...]` pattern
/// 5. Has a host; the port defaults to 80/443
///
/// # Errors
///
/// Returns [`ShapeError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`ShapeError::InvalidFormat`] for everything else that is malformed.
pub fn check_shape(input: &str) -> Result<UrlTarget, ShapeError> {
    if input.is_empty() {
        return Err(ShapeError::Empty);
    }
    if input.len() > MAX_URL_LENGTH {
        return Err(ShapeError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| ShapeError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(ShapeError::UnsupportedProtocol),
    }

    if !URL_SHAPE_REGEX.is_match(input) {
        return Err(ShapeError::InvalidFormat(
            "does not look like scheme://host.tld".to_string(),
        ));
    }

    let host = match url.host() {
        Some(Host::Domain(domain)) => domain.to_string(),
        Some(Host::Ipv4(ip)) => ip.to_string(),
        Some(Host::Ipv6(ip)) => ip.to_string(),
        None => return Err(ShapeError::InvalidFormat("missing host".to_string())),
    };

    let port = url
        .port_or_known_default()
        .ok_or_else(|| ShapeError::InvalidFormat("missing port".to_string()))?;

    Ok(UrlTarget { host, port })
}
