use jiff::{Timestamp, civil::Date, tz};
#[cfg(feature = "mock-time")]
use std::sync::{Arc, Mutex};

/// Offset of the villas' local time (WITA) from UTC.
const LOCAL_UTC_OFFSET_HOURS: i8 = 8;

#[derive(Clone)]
pub struct TimeSource {
    #[cfg(feature = "mock-time")]
    time: Arc<Mutex<Timestamp>>,
}

impl TimeSource {
    #[allow(clippy::new_without_default)]
    #[cfg(not(feature = "mock-time"))]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(feature = "mock-time")]
    pub fn new(initial_time: Timestamp) -> Self {
        Self {
            time: Arc::new(Mutex::new(initial_time)),
        }
    }

    #[cfg(not(feature = "mock-time"))]
    pub fn now(&self) -> Timestamp {
        Timestamp::now()
    }

    #[cfg(feature = "mock-time")]
    pub fn now(&self) -> Timestamp {
        *self.time.lock().unwrap()
    }

    #[cfg(feature = "mock-time")]
    pub fn advance(&self, duration: jiff::Span) {
        *self.time.lock().unwrap() += duration;
    }

    #[cfg(feature = "mock-time")]
    pub fn set(&self, time: Timestamp) {
        *self.time.lock().unwrap() = time;
    }

    /// The current calendar day where the villas are.
    pub fn today(&self) -> Date {
        let local = tz::TimeZone::fixed(tz::offset(LOCAL_UTC_OFFSET_HOURS));
        self.now().to_zoned(local).date()
    }
}

#[cfg(all(test, feature = "mock-time"))]
mod tests {
    use super::*;

    #[test]
    fn today_rolls_over_at_local_midnight() {
        let time = TimeSource::new("2025-03-01T15:59:59Z".parse().unwrap());
        assert_eq!(time.today(), jiff::civil::date(2025, 3, 1));
        time.advance(jiff::Span::new().seconds(1));
        assert_eq!(time.today(), jiff::civil::date(2025, 3, 2));
    }
}
