//! Time provider abstraction
//!
//! This module provides a [`Clock`] trait that abstracts over time sources,
//! allowing production code to use the local wall clock while tests can pin
//! photo timestamps to known days.
//!
//! # Example
//!
//! ```
//! use photoroll::{Clock, FixedClock};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let clock = FixedClock::new(day);
//! assert_eq!(clock.now(), day);
//! ```

use std::fmt::Debug;
use std::sync::Mutex;

use chrono::{Local, NaiveDateTime, TimeDelta};

/// A time provider for stamping newly created photos.
///
/// Timestamps are local and zone-less, matching how photo dates are stored
/// and compared (at day granularity) throughout the library.
pub trait Clock: Send + Sync + Debug {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Production clock using the local wall clock.
///
/// This is the default clock used by [`crate::UserStore::open`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Test clock pinned to a fixed instant.
///
/// The clock never moves on its own; use [`FixedClock::set`] or
/// [`FixedClock::advance`] to step it between operations.
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Create a new fixed clock at the given instant.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Set the current time.
    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    /// Move the clock forward (or backward, for a negative delta).
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.lock();
        *now += delta;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        // A poisoned clock still holds a valid timestamp
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        // 2024-01-01 00:00:00
        Self::new(NaiveDateTime::default() + TimeDelta::days(19723))
    }
}

impl Debug for FixedClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedClock")
            .field("now", &*self.lock())
            .finish()
    }
}
