//! Retry policies for upstream content providers
//!
//! Upstreams here are best-effort community APIs, so every call site retries
//! a bounded number of times with a flat delay between attempts. The policy
//! is an explicit value threaded into each call rather than a literal
//! scattered per call site.

use std::time::Duration;

/// Configuration for HTTP retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts (first try included). Always at least 1.
    pub max_attempts: u32,
    /// Flat delay between attempts. No jitter, no exponential growth.
    pub backoff: Duration,
    /// Independent timeout applied to every attempt.
    pub timeout: Duration,
}

impl RetryPolicy {
    /// Policy for metadata and listing calls.
    pub fn api() -> Self {
        Self {
            max_attempts: 2,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(20),
        }
    }

    /// Policy for the binary cover proxy: a single short attempt, since the
    /// client treats a missing image as a normal condition.
    pub fn media() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
        }
    }

    /// Custom policy. `max_attempts` is clamped to at least one attempt.
    pub fn new(max_attempts: u32, backoff: Duration, timeout: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
            timeout,
        }
    }
}
