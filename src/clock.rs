//! Source of "today" for past-date checks.

use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

use crate::CalendarDate;

/// Supplies the current calendar date.
///
/// The rental calendar disables every day before `today()`.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

/// Reads the system clock and returns the visitor's calendar day.
///
/// By default the local UTC offset is looked up on every call. When the
/// platform cannot report it, the UTC day is used instead. Hosts that know
/// the visitor's offset can pin it with [`SystemClock::with_offset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock {
    offset: Option<UtcOffset>,
}

impl SystemClock {
    pub const fn new() -> Self {
        Self { offset: None }
    }

    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let now = match self.offset {
            Some(offset) => OffsetDateTime::now_utc().to_offset(offset),
            None => OffsetDateTime::now_local().unwrap_or_else(|err| {
                debug!(error = %err, "local offset unavailable, using UTC");
                OffsetDateTime::now_utc()
            }),
        };
        local_date(now)
    }
}

/// The calendar day of `moment` in its own offset
fn local_date(moment: OffsetDateTime) -> CalendarDate {
    let date = moment.date();
    u16::try_from(date.year())
        .ok()
        .and_then(|year| CalendarDate::new(year, u8::from(date.month()), date.day()).ok())
        .unwrap_or(CalendarDate::EPOCH)
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(CalendarDate);

impl FixedClock {
    pub const fn new(today: CalendarDate) -> Self {
        Self(today)
    }

    /// Moves the frozen day
    pub const fn set(&mut self, today: CalendarDate) {
        self.0 = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
