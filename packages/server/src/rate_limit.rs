//! In-process submission rate limiting.
//!
//! Fixed window per client key: the first call opens a window with an
//! expiry one window-length later; calls within the window count against
//! the cap, and once the expiry passes the next call starts a fresh
//! window with a count of 1. Entries are never evicted — the map grows
//! with the number of distinct client keys, an accepted tradeoff at this
//! scale.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Maximum accepted submissions per window.
pub const MAX_SUBMISSIONS_PER_WINDOW: u32 = 10;

/// Length of the rate-limit window.
pub const SUBMISSION_WINDOW: Duration = Duration::from_secs(60 * 60);

/// Key used when no client address can be determined. All address-less
/// clients share this bucket.
pub const UNKNOWN_CLIENT: &str = "unknown";

struct Window {
    count: u32,
    expires_at: Instant,
}

/// Fixed-window rate limiter keyed by client address.
///
/// Owned by the application state rather than living in a process-wide
/// static, so tests can construct isolated instances and drive the clock
/// through [`RateLimiter::allow_at`].
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// A limiter with the submission defaults: 10 per hour.
    #[must_use]
    pub fn submissions() -> Self {
        Self::new(MAX_SUBMISSIONS_PER_WINDOW, SUBMISSION_WINDOW)
    }

    /// Records a call for `key` and returns whether it is within quota.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn allow(&self, key: &str) -> bool {
        self.allow_at(key, Instant::now())
    }

    /// Clock-injectable variant of [`RateLimiter::allow`].
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn allow_at(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");

        let entry = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            expires_at: now + self.window,
        });

        if now >= entry.expires_at {
            entry.count = 0;
            entry.expires_at = now + self.window;
        }

        entry.count += 1;
        entry.count <= self.max_requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_cap_within_a_window() {
        let limiter = RateLimiter::submissions();
        let now = Instant::now();

        for attempt in 1..=MAX_SUBMISSIONS_PER_WINDOW {
            assert!(limiter.allow_at("1.2.3.4", now), "attempt {attempt}");
        }
        assert!(!limiter.allow_at("1.2.3.4", now));
    }

    #[test]
    fn window_expiry_resets_the_counter() {
        let limiter = RateLimiter::submissions();
        let start = Instant::now();

        for _ in 0..=MAX_SUBMISSIONS_PER_WINDOW {
            limiter.allow_at("1.2.3.4", start);
        }
        assert!(!limiter.allow_at("1.2.3.4", start));

        let after_window = start + SUBMISSION_WINDOW + Duration::from_secs(1);
        assert!(limiter.allow_at("1.2.3.4", after_window));

        // The counter restarted at 1, so another nine calls fit.
        for attempt in 2..=MAX_SUBMISSIONS_PER_WINDOW {
            assert!(limiter.allow_at("1.2.3.4", after_window), "attempt {attempt}");
        }
        assert!(!limiter.allow_at("1.2.3.4", after_window));
    }

    #[test]
    fn keys_are_tracked_independently() {
        let limiter = RateLimiter::new(1, SUBMISSION_WINDOW);
        let now = Instant::now();

        assert!(limiter.allow_at("1.2.3.4", now));
        assert!(!limiter.allow_at("1.2.3.4", now));
        assert!(limiter.allow_at("5.6.7.8", now));
    }

    #[test]
    fn the_window_does_not_slide_on_later_calls() {
        let limiter = RateLimiter::new(2, Duration::from_secs(60));
        let start = Instant::now();

        assert!(limiter.allow_at("k", start));
        assert!(limiter.allow_at("k", start + Duration::from_secs(59)));
        // Still inside the window opened by the first call.
        assert!(!limiter.allow_at("k", start + Duration::from_secs(59)));
        // Past the expiry measured from the first call.
        assert!(limiter.allow_at("k", start + Duration::from_secs(61)));
    }
}
