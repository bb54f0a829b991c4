//! Wall-clock source for line stamps and day rotation

use chrono::{Duration, Local, NaiveDateTime};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current local date and time.
///
/// The dispatcher reads the clock once per message; the same reading
/// decides rotation, names the daily file, and stamps the line.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// The machine's local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to. Clones share the same time.
///
/// # Example
///
/// ```
/// use scribe::{Clock, ManualClock};
/// use chrono::{Duration, NaiveDate};
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(23, 0, 0).unwrap();
/// let clock = ManualClock::new(start);
/// clock.advance(Duration::hours(2));
/// assert_eq!(clock.now().date(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<NaiveDateTime>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn set(&self, at: NaiveDateTime) {
        *self.now.lock() = at;
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_manual_clock_is_shared_between_clones() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock = ManualClock::new(start);
        let other = clock.clone();

        other.advance(Duration::days(1));
        assert_eq!(clock.now(), start + Duration::days(1));

        clock.set(start);
        assert_eq!(other.now(), start);
    }

    #[test]
    fn test_system_clock_is_close_to_local_now() {
        let before = Local::now().naive_local();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
