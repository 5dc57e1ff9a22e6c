//! Retry policy applied by the transport.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Default lower bound between retries.
const DEFAULT_MIN_BACKOFF: Duration = Duration::from_secs(1);

/// Default upper bound between retries.
const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Retry count used by [`RetryPolicy::auto`].
const AUTO_MAX_RETRIES: u32 = 4;

/// How transient failures are retried.
///
/// Disabled by default: a request is sent once and any failure is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct RetryPolicy {
    max_retries: u32,
    min_backoff: Duration,
    max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::disabled()
    }
}

impl RetryPolicy {
    /// Creates a policy. `max_backoff` below `min_backoff` is raised to it.
    #[must_use]
    pub fn new(max_retries: u32, min_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_retries,
            min_backoff,
            max_backoff: max_backoff.max(min_backoff),
        }
    }

    /// No retries.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            max_retries: 0,
            min_backoff: DEFAULT_MIN_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }

    /// Four retries with exponential backoff between 1s and 30s.
    #[must_use]
    pub const fn auto() -> Self {
        Self {
            max_retries: AUTO_MAX_RETRIES,
            min_backoff: DEFAULT_MIN_BACKOFF,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }

    /// Maximum number of retries after the first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Lower bound between retries.
    #[must_use]
    pub const fn min_backoff(&self) -> Duration {
        self.min_backoff
    }

    /// Upper bound between retries.
    #[must_use]
    pub const fn max_backoff(&self) -> Duration {
        self.max_backoff
    }

    /// Returns a copy with a different retry count.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Returns a copy with a different lower bound.
    #[must_use]
    pub fn with_min_backoff(self, min_backoff: Duration) -> Self {
        Self::new(self.max_retries, min_backoff, self.max_backoff)
    }

    /// Returns a copy with a different upper bound.
    #[must_use]
    pub fn with_max_backoff(self, max_backoff: Duration) -> Self {
        Self::new(self.max_retries, self.min_backoff, max_backoff)
    }

    /// Whether another attempt is allowed after `attempt` (0-based) failed.
    pub(crate) const fn can_retry(&self, attempt: u32) -> bool {
        attempt < self.max_retries
    }

    /// Statuses worth retrying: 429 and 5xx except 501.
    pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
        status == StatusCode::TOO_MANY_REQUESTS
            || (status.is_server_error() && status != StatusCode::NOT_IMPLEMENTED)
    }

    /// Transport errors worth retrying.
    pub(crate) fn is_retryable_error(err: &reqwest::Error) -> bool {
        err.is_connect() || err.is_timeout()
    }

    /// Delay before the retry following `attempt` (0-based).
    ///
    /// Exponential from `min_backoff`, capped at `max_backoff`. A server
    /// supplied `Retry-After` replaces the computed delay, within the same bounds.
    pub(crate) fn backoff(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let delay = retry_after.unwrap_or_else(|| {
            let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
            self.min_backoff.saturating_mul(factor)
        });
        delay.max(self.min_backoff).min(self.max_backoff)
    }
}

/// Parses a numeric `Retry-After` header (seconds).
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn test_default_is_disabled() {
        // Arrange & Act
        let policy = RetryPolicy::default();

        // Assert
        assert_eq!(policy.max_retries(), 0);
        assert!(!policy.can_retry(0));
    }

    #[test]
    fn test_auto_policy() {
        // Arrange & Act
        let policy = RetryPolicy::auto();

        // Assert
        assert_eq!(policy.max_retries(), 4);
        assert_eq!(policy.min_backoff(), Duration::from_secs(1));
        assert_eq!(policy.max_backoff(), Duration::from_secs(30));
        assert!(policy.can_retry(3));
        assert!(!policy.can_retry(4));
    }

    #[test]
    fn test_new_raises_max_to_min() {
        // Arrange & Act
        let policy = RetryPolicy::new(2, Duration::from_secs(5), Duration::from_secs(1));

        // Assert
        assert_eq!(policy.max_backoff(), Duration::from_secs(5));
    }

    #[test]
    fn test_backoff_is_exponential_and_capped() {
        // Arrange
        let policy = RetryPolicy::new(10, Duration::from_millis(100), Duration::from_secs(1));

        // Act & Assert
        assert_eq!(policy.backoff(0, None), Duration::from_millis(100));
        assert_eq!(policy.backoff(1, None), Duration::from_millis(200));
        assert_eq!(policy.backoff(3, None), Duration::from_millis(800));
        assert_eq!(policy.backoff(4, None), Duration::from_secs(1));
        assert_eq!(policy.backoff(40, None), Duration::from_secs(1));
    }

    #[test]
    fn test_backoff_honors_retry_after_within_bounds() {
        // Arrange
        let policy = RetryPolicy::new(3, Duration::from_millis(500), Duration::from_secs(10));

        // Act & Assert
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(3))),
            Duration::from_secs(3)
        );
        assert_eq!(
            policy.backoff(0, Some(Duration::from_secs(60))),
            Duration::from_secs(10)
        );
        assert_eq!(
            policy.backoff(0, Some(Duration::ZERO)),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn test_retryable_statuses() {
        // Arrange & Act & Assert
        assert!(RetryPolicy::is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(RetryPolicy::is_retryable_status(StatusCode::SERVICE_UNAVAILABLE));
        assert!(RetryPolicy::is_retryable_status(StatusCode::BAD_GATEWAY));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_IMPLEMENTED));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::NOT_FOUND));
        assert!(!RetryPolicy::is_retryable_status(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_retry_after_header() {
        // Arrange
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));

        // Act
        let parsed = retry_after(&headers);

        // Assert
        assert_eq!(parsed, Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_retry_after_http_date_is_ignored() {
        // Arrange
        let mut headers = HeaderMap::new();
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );

        // Act & Assert
        assert_eq!(retry_after(&headers), None);
        assert_eq!(retry_after(&HeaderMap::new()), None);
    }
}
