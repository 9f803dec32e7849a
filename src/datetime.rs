//! Date/time helpers.

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};

/// Precision helpers for date/time values.
pub trait DateTimeExt: Sized {
    /// The same instant truncated to whole seconds, preserving the timezone.
    fn remove_milliseconds(self) -> Self;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn remove_milliseconds(self) -> Self {
        // Zero nanoseconds is always a valid fraction for an existing instant.
        self.with_nanosecond(0).unwrap_or(self)
    }
}

impl DateTimeExt for NaiveDateTime {
    fn remove_milliseconds(self) -> Self {
        self.with_nanosecond(0).unwrap_or(self)
    }
}
