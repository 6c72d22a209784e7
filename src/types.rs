use crate::consts::{
    CENTURY_CYCLE, CIVIL_EPOCH_OFFSET, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_ERA, DAYS_PER_WEEK,
    DECEMBER, EPOCH_WEEKDAY, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MONTH_NAMES,
};
use crate::{CalendarDate, DateError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};
use std::str::FromStr;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(NonZeroU16);

impl Year {
    pub(crate) const EPOCH: Self = match NonZeroU16::new(1970) {
        Some(v) => Self(v),
        None => Self(NonZeroU16::MIN),
    };

    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Compile-time constructor for constants; clamps into `1..=MAX_YEAR`
    pub(crate) const fn clamped(value: u16) -> Self {
        let value = if value > MAX_YEAR { MAX_YEAR } else { value };
        match NonZeroU16::new(value) {
            Some(v) => Self(v),
            None => Self(NonZeroU16::MIN),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(NonZeroU8);

impl Month {
    pub(crate) const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Compile-time constructor for constants; clamps into `1..=MAX_MONTH`
    pub(crate) const fn clamped(value: u8) -> Self {
        let value = if value > MAX_MONTH { MAX_MONTH } else { value };
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => Self(NonZeroU8::MIN),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Upper-case English name, as shown in calendar headers
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value guaranteed to exist in its year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    pub(crate) const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(non_zero))
    }

    /// Compile-time constructor for constants; clamps into the month's length
    pub(crate) const fn clamped(value: u8, year: Year, month: Month) -> Self {
        let max = days_in_month(year.get(), month.get());
        let value = if value > max { max } else { value };
        match NonZeroU8::new(value) {
            Some(v) => Self(v),
            None => Self::FIRST,
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month of a specific year; the unit the rental calendar pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: Year,
    month: Month,
}

impl YearMonth {
    /// # Errors
    /// Returns `DateError` if the year or month is out of range.
    pub fn new(year: u16, month: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Compile-time constructor for constants; see [`Year::clamped`]
    pub(crate) const fn clamped(year: u16, month: u8) -> Self {
        Self::from_parts(Year::clamped(year), Month::clamped(month))
    }

    pub const fn year(self) -> Year {
        self.year
    }

    pub const fn month(self) -> Month {
        self.month
    }

    /// Number of days in this month
    pub const fn len_days(self) -> u8 {
        days_in_month(self.year.get(), self.month.get())
    }

    /// The first day of the month
    pub fn first_day(self) -> CalendarDate {
        CalendarDate::from_parts(self.year, self.month, Day::FIRST)
    }

    /// Every day of the month in order
    pub fn days(self) -> impl Iterator<Item = CalendarDate> {
        (MIN_DAY..=self.len_days()).filter_map(move |d| {
            NonZeroU8::new(d).map(|day| CalendarDate::from_parts(self.year, self.month, Day(day)))
        })
    }

    /// Moves by `delta` months; `None` if the result leaves `1..=MAX_YEAR`.
    pub fn offset(self, delta: i32) -> Option<Self> {
        let index = i64::from(self.year.get()) * i64::from(MAX_MONTH)
            + i64::from(self.month.get() - JANUARY);
        let shifted = index + i64::from(delta);
        let year = u16::try_from(shifted.div_euclid(i64::from(MAX_MONTH))).ok()?;
        let month = u8::try_from(shifted.rem_euclid(i64::from(MAX_MONTH))).ok()? + JANUARY;
        Self::new(year, month).ok()
    }

    pub fn next(self) -> Option<Self> {
        self.offset(1)
    }

    pub fn prev(self) -> Option<Self> {
        self.offset(-1)
    }

    /// Header text such as `FEBRUARY 2026`
    pub fn title(self) -> String {
        format!("{} {}", self.month.name(), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year.get(), self.month.get())
    }
}

impl FromStr for YearMonth {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }
        let (year, month) = trimmed
            .split_once(DATE_SEPARATOR)
            .ok_or_else(|| DateError::InvalidFormat(s.to_owned()))?;
        let year = year
            .trim()
            .parse::<u16>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
        let month = month
            .trim()
            .parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week counted from Sunday = 0, matching the column order of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weekday(u8);

impl Weekday {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Weekday of a day number counted from 1970-01-01
    pub(crate) fn from_day_number(days: i64) -> Self {
        // rem_euclid(7) always fits in u8
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (days + EPOCH_WEEKDAY).rem_euclid(DAYS_PER_WEEK) as u8;
        Self(index)
    }

    /// Column index, Sunday = 0
    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn short_name(self) -> &'static str {
        ["SU", "MO", "TU", "WE", "TH", "FR", "SA"][self.0 as usize]
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
pub(crate) fn days_from_civil(year: u16, month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let y = i64::from(year) - i64::from(m <= i64::from(FEBRUARY));
    let era = y.div_euclid(i64::from(GREGORIAN_CYCLE));
    let yoe = y - era * i64::from(GREGORIAN_CYCLE);
    let mp = (m + 9) % i64::from(MAX_MONTH);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - CIVIL_EPOCH_OFFSET
}

/// Inverse of [`days_from_civil`]; `None` outside `1..=MAX_YEAR`.
pub(crate) fn civil_from_days(days: i64) -> Option<(u16, u8, u8)> {
    let z = days + CIVIL_EPOCH_OFFSET;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * i64::from(GREGORIAN_CYCLE) + i64::from(month <= i64::from(FEBRUARY));

    let year = u16::try_from(year).ok()?;
    if year == 0 || year > MAX_YEAR {
        return None;
    }
    debug_assert!((i64::from(JANUARY)..=i64::from(DECEMBER)).contains(&month));
    Some((year, u8::try_from(month).ok()?, u8::try_from(day).ok()?))
}
