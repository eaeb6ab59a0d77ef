//! Clock abstraction so expiry-dependent logic is testable without sleeping.

use chrono::{DateTime, Utc};

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Frozen clock for deterministic tests.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct MockClock {
    now: std::sync::Arc<std::sync::Mutex<DateTime<Utc>>>,
}

#[cfg(test)]
impl MockClock {
    pub(crate) fn at(rfc3339: &str) -> Self {
        let now = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid RFC 3339")
            .with_timezone(&Utc);
        Self {
            now: std::sync::Arc::new(std::sync::Mutex::new(now)),
        }
    }

    pub(crate) fn advance(&self, duration: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += duration;
    }
}

#[cfg(test)]
impl Clock for MockClock {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
