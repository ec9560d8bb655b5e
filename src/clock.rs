use chrono::{Local, NaiveDateTime};

/// Clock abstracts access to the current wall-clock time so tasks stay
/// deterministic in tests.
pub trait Clock {
    /// Returns the current local timestamp without a zone.
    fn now(&self) -> NaiveDateTime;
}

/// Real-time clock backed by the system local time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
