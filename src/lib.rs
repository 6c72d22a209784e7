//! Interactive core of a rental marketplace storefront.
//!
//! Two self-contained state machines do the real work:
//!
//! | Module | Role |
//! |--------|------|
//! | [`calendar`] | Rental calendar: month paging, start/end selection, pricing |
//! | [`wizard`] | Listing wizard: steps, field validation, photos, preview |
//! | [`storefront`] | Page widgets: buy/sell mode, placeholders, gallery |
//!
//! Both components are plain values owned by the host page. Every user event
//! is a method call that mutates the component and returns an outcome the
//! view can render; nothing here touches a DOM.

mod clock;
mod consts;
mod money;
mod prelude;
mod range;
mod types;

pub mod calendar;
pub mod storefront;
pub mod wizard;

#[cfg(test)]
pub(crate) mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use money::Money;
pub use range::{DateRange, RangeError};
pub use time::UtcOffset;
pub use types::{Day, Month, Weekday, Year, YearMonth};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A calendar day with no time-of-day component.
///
/// Ordering is chronological. Arithmetic goes through a day number counted
/// from 1970-01-01, so differences are exact whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Date arithmetic left the supported range")]
    OutOfRange,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// 1970-01-01, the origin of day numbers
    pub const EPOCH: Self = Self::from_parts(Year::EPOCH, Month::JANUARY, Day::FIRST);

    /// Creates a date from raw components, validating each.
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range for the others.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Compile-time constructor for constants; out-of-range parts are clamped
    pub(crate) const fn clamped(year: u16, month: u8, day: u8) -> Self {
        let year = Year::clamped(year);
        let month = Month::clamped(month);
        Self::from_parts(year, month, Day::clamped(day, year, month))
    }

    /// Assembles a date from components that are already validated together
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// The month this date falls in
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }

    /// Days since 1970-01-01 (negative before)
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year.get(), self.month.get(), self.day.get())
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` outside years `1..=MAX_YEAR`.
    pub fn from_day_number(days: i64) -> Result<Self, DateError> {
        let (y, m, d) = civil_from_days(days).ok_or(DateError::OutOfRange)?;
        Self::new(y, m, d)
    }

    /// Shifts the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result leaves the supported years.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let target = self.day_number().checked_add(days).ok_or(DateError::OutOfRange)?;
        Self::from_day_number(target)
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Formats as `MM/DD/YYYY`, the form shown in booking confirmations
    pub fn to_month_first(&self) -> String {
        format!(
            "{:02}{sep}{:02}{sep}{:04}",
            self.month.get(),
            self.day.get(),
            self.year.get(),
            sep = MONTH_FIRST_SEPARATOR
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let has_hyphen = trimmed.contains(DATE_SEPARATOR);
        let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

        if has_hyphen && has_slash {
            return Err(DateError::InvalidFormat(format!(
                "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
            )));
        }

        let (separator, order) = if has_hyphen {
            (DATE_SEPARATOR, FieldOrder::YearFirst)
        } else if has_slash {
            (MONTH_FIRST_SEPARATOR, FieldOrder::MonthFirst)
        } else {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        };

        let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(format!(
                "Expected 2 {separator} separators, found {}",
                parts.len() - 1
            )));
        }

        let (year, month, day) = match order {
            FieldOrder::YearFirst => (
                parse_u16(parts[0])?,
                parse_u8(parts[1])?,
                parse_u8(parts[2])?,
            ),
            FieldOrder::MonthFirst => (
                parse_u16(parts[2])?,
                parse_u8(parts[0])?,
                parse_u8(parts[1])?,
            ),
        };
        Self::new(year, month, day)
    }
}

enum FieldOrder {
    YearFirst,
    MonthFirst,
}

fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
