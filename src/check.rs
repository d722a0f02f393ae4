//! Core availability checking logic for Twitch usernames.

use std::fmt;
use std::time::Duration;

use log::{debug, trace};
use serde::Serialize;
use ureq::Agent;

/// The passport endpoint Twitch's own signup form queries for a username.
///
/// HEAD `{DEFAULT_PROBE_URL}/{username}` answers 200 when the name exists,
/// 204 when it does not, and 403 while the caller is being rate limited.
pub const DEFAULT_PROBE_URL: &str = "https://passport.twitch.tv/usernames";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The outcome of probing a single username.
///
/// Produced once per candidate by [`check_name`] and immutable afterwards.
/// `taken` is true only for a 200 answer; every other status -- including
/// transient server errors -- reads as "not taken", but only a 204 counts
/// as confirmed available (see [`is_available`](CheckResult::is_available)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct CheckResult {
    /// The candidate that was probed.
    pub username: String,
    /// Whether the endpoint confirmed the name exists (HTTP 200).
    pub taken: bool,
    /// The final HTTP status observed, after any rate-limit retries.
    pub status_code: u16,
}

impl CheckResult {
    /// True when the endpoint confirmed the name is free (HTTP 204).
    ///
    /// Not simply `!taken`: a 404 or 500 also yields `taken == false`
    /// without confirming anything.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status_code == 204
    }
}

/// Errors that can occur when probing a username.
///
/// Returned as the error case of [`check_name`]. Implements
/// [`std::error::Error`] with proper [`source`](std::error::Error::source)
/// chaining.
#[derive(Debug)]
#[non_exhaustive]
pub enum CheckError {
    /// A transport-level failure (DNS, refused connection, timeout)
    /// prevented completing the probe.
    Probe(Box<ureq::Error>),
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probe(e) => write!(f, "probe request failed: {e}"),
        }
    }
}

impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Probe(e) => Some(e.as_ref()),
        }
    }
}

impl From<ureq::Error> for CheckError {
    fn from(e: ureq::Error) -> Self {
        Self::Probe(Box::new(e))
    }
}

/// An HTTP client configured for username probes.
///
/// Wraps the underlying HTTP agent to insulate callers from the specific
/// HTTP library version used internally. The agent keeps no idle
/// connections, so every probe opens a fresh connection.
///
/// # Example
///
/// ```no_run
/// use twitch_avail::check::Client;
///
/// let client = Client::new();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    agent: Agent,
    base_url: String,
}

impl Client {
    /// Create a new client probing the real Twitch endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_PROBE_URL)
    }

    /// Create a client probing `base_url` instead of the Twitch endpoint.
    ///
    /// The probe URL becomes `{base_url}/{username}`. Intended for tests
    /// that stand up a local stub server.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .max_idle_connections(0)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
                " (",
                env!("CARGO_PKG_REPOSITORY"),
                ")"
            ))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.into(),
        }
    }

    /// Issue one HEAD probe and return the raw status code.
    fn probe(&self, username: &str) -> Result<u16, CheckError> {
        let url = format!("{}/{username}", self.base_url);
        let response = self
            .agent
            .head(&url)
            .header("Connection", "close")
            .call()?;
        let status = response.status().as_u16();
        trace!("HEAD {url} -> {status}");
        Ok(status)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

/// Check whether a username is available on Twitch.
///
/// Issues a header-only probe and classifies the final status code:
/// 200 means taken, 204 means available, anything else is reported as not
/// available without confirmation either way.
///
/// While the endpoint answers 403 the identical request is repeated
/// immediately, with no delay and no retry cap; the call does not return
/// until a non-403 status arrives. Under sustained rate limiting this loop
/// keeps hammering the endpoint and can block indefinitely. Retries are
/// invisible in the result: only the final status is recorded.
///
/// # Errors
///
/// Returns [`CheckError::Probe`] when the request cannot complete at the
/// transport level (DNS failure, refused connection, timeout).
///
/// # Example
///
/// ```no_run
/// use twitch_avail::check::{Client, check_name};
///
/// let client = Client::new();
/// let result = check_name(&client, "ninja")?;
/// println!("{}: HTTP {}", result.username, result.status_code);
/// # Ok::<(), twitch_avail::check::CheckError>(())
/// ```
pub fn check_name(client: &Client, username: &str) -> Result<CheckResult, CheckError> {
    let mut status = client.probe(username)?;

    while status == 403 {
        debug!("{username}: rate limited (403), retrying");
        status = client.probe(username)?;
    }

    Ok(CheckResult {
        username: username.to_owned(),
        taken: status == 200,
        status_code: status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status_code: u16) -> CheckResult {
        CheckResult {
            username: "ninja".to_owned(),
            taken: status_code == 200,
            status_code,
        }
    }

    #[test]
    fn only_204_counts_as_available() {
        assert!(result(204).is_available());
        assert!(!result(200).is_available());
        assert!(!result(404).is_available());
        assert!(!result(500).is_available());
    }

    #[test]
    fn only_200_counts_as_taken() {
        assert!(result(200).taken);
        assert!(!result(204).taken);
        assert!(!result(404).taken);
    }

    #[test]
    fn refused_connection_is_a_probe_error() {
        let client = Client::with_base_url("http://127.0.0.1:1/usernames");
        // nothing listens on port 1, so the probe must fail at transport level
        match check_name(&client, "ninja") {
            Err(CheckError::Probe(_)) => {}
            other => panic!("expected Probe error, got {other:?}"),
        }
    }

    #[test]
    fn check_error_display_mentions_probe() {
        let client = Client::with_base_url("http://127.0.0.1:1/usernames");
        let err = check_name(&client, "ninja").unwrap_err();
        assert!(err.to_string().starts_with("probe request failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    // Auto-trait compile-time tests
    #[test]
    fn check_result_is_send_sync_unpin() {
        fn assert_normal<T: Sized + Send + Sync + Unpin>() {}
        assert_normal::<CheckResult>();
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_normal<T: Sized + Send + Sync>() {}
        assert_normal::<Client>();
    }

    #[test]
    #[ignore = "requires network access; run with: cargo test -- --ignored"]
    fn famous_name_is_taken() {
        let client = Client::new();
        let result = check_name(&client, "twitch").expect("probe should succeed");
        assert!(result.taken, "expected 200, got {}", result.status_code);
    }
}
