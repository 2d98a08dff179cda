//! URL acceptance checks run before any registration work.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tokio::net::{TcpStream, lookup_host};
use tokio::time::timeout;
use tracing::debug;

use crate::utils::url_shape::{ShapeError, UrlTarget, check_shape};

/// How far the validator goes beyond the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Shape check only. No network access.
    #[default]
    Syntax,
    /// Shape check, then the host must resolve via DNS.
    Resolve,
    /// Shape check, then a TCP connection to the host must succeed.
    Probe,
}

impl FromStr for ValidationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "syntax" => Ok(Self::Syntax),
            "resolve" => Ok(Self::Resolve),
            "probe" => Ok(Self::Probe),
            other => Err(format!(
                "unknown validation policy '{other}', expected syntax, resolve or probe"
            )),
        }
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Syntax => "syntax",
            Self::Resolve => "resolve",
            Self::Probe => "probe",
        };
        f.write_str(name)
    }
}

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Malformed,
    UnsupportedScheme,
    Unresolvable,
    Unreachable,
    TimedOut,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Malformed => "malformed",
            Self::UnsupportedScheme => "unsupported scheme",
            Self::Unresolvable => "host does not resolve",
            Self::Unreachable => "host unreachable",
            Self::TimedOut => "existence check timed out",
        };
        f.write_str(reason)
    }
}

impl From<ShapeError> for RejectReason {
    fn from(e: ShapeError) -> Self {
        match e {
            ShapeError::UnsupportedProtocol => Self::UnsupportedScheme,
            ShapeError::Empty | ShapeError::TooLong | ShapeError::InvalidFormat(_) => {
                Self::Malformed
            }
        }
    }
}

/// Outcome of [`UrlValidator::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Classifies submitted strings as acceptable original URLs.
///
/// Never fails: network errors and timeouts become [`Verdict::Rejected`].
/// Holds no shared state, so slow existence checks never block registrations
/// of other URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    policy: ValidationPolicy,
    check_timeout: Duration,
}

impl UrlValidator {
    /// Creates a validator.
    ///
    /// `check_timeout` bounds each DNS lookup or connection attempt; it is
    /// ignored under [`ValidationPolicy::Syntax`].
    pub fn new(policy: ValidationPolicy, check_timeout: Duration) -> Self {
        Self {
            policy,
            check_timeout,
        }
    }

    /// Validator that performs the shape check only.
    pub fn syntax_only() -> Self {
        Self::new(ValidationPolicy::Syntax, Duration::from_secs(3))
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Classifies `candidate` under the configured policy.
    pub async fn validate(&self, candidate: &str) -> Verdict {
        let target = match check_shape(candidate) {
            Ok(target) => target,
            Err(e) => {
                debug!(candidate, error = %e, "URL failed shape check");
                return Verdict::Rejected(e.into());
            }
        };

        match self.policy {
            ValidationPolicy::Syntax => Verdict::Accepted,
            ValidationPolicy::Resolve => self.resolve_host(&target).await,
            ValidationPolicy::Probe => self.probe_reachable(&target).await,
        }
    }

    async fn resolve_host(&self, target: &UrlTarget) -> Verdict {
        match timeout(
            self.check_timeout,
            lookup_host((target.host.as_str(), target.port)),
        )
        .await
        {
            Ok(Ok(mut addrs)) => {
                if addrs.next().is_some() {
                    Verdict::Accepted
                } else {
                    Verdict::Rejected(RejectReason::Unresolvable)
                }
            }
            Ok(Err(e)) => {
                debug!(host = %target.host, error = %e, "DNS lookup failed");
                Verdict::Rejected(RejectReason::Unresolvable)
            }
            Err(_) => {
                debug!(host = %target.host, "DNS lookup timed out");
                Verdict::Rejected(RejectReason::TimedOut)
            }
        }
    }

    async fn probe_reachable(&self, target: &UrlTarget) -> Verdict {
        match timeout(
            self.check_timeout,
            TcpStream::connect((target.host.as_str(), target.port)),
        )
        .await
        {
            Ok(Ok(_stream)) => Verdict::Accepted,
            Ok(Err(e)) => {
                debug!(host = %target.host, port = target.port, error = %e, "Probe connection failed");
                Verdict::Rejected(RejectReason::Unreachable)
            }
            Err(_) => {
                debug!(host = %target.host, port = target.port, "Probe connection timed out");
                Verdict::Rejected(RejectReason::TimedOut)
            }
        }
    }
}
