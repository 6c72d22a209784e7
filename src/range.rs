use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, DateError, RANGE_SEPARATOR, prelude::*};

/// A rental period from a start day to a strictly later end day.
///
/// The length of the period is counted in nights: 2026-02-01/2026-02-03 is two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// End date is not after the start date.
    #[error("Invalid date range: end ({end}) must be after start ({start})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing or shifting a date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a range, requiring `start < end`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `end <= start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if end <= start {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range of `nights` nights beginning on `start`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` for zero nights and
    /// `RangeError::Date` if the end leaves the supported years.
    pub fn from_start(start: CalendarDate, nights: u32) -> Result<Self, RangeError> {
        let end = start.add_days(i64::from(nights))?;
        Self::new(start, end)
    }

    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Whole days between start and end; always at least one
    pub fn nights(&self) -> u32 {
        u32::try_from(self.start.days_until(&self.end)).unwrap_or(u32::MAX)
    }

    /// Start and end inclusive
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Strictly between start and end
    pub fn is_interior(&self, date: &CalendarDate) -> bool {
        self.start < *date && *date < self.end
    }

    /// Whether two periods share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) =
                    trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                        RangeError::InvalidFormat(format!(
                            "Separator '{RANGE_SEPARATOR}' not found despite count == 1"
                        ))
                    })?;
                let start = start_str.trim().parse::<CalendarDate>()?;
                let end = end_str.trim().parse::<CalendarDate>()?;
                Self::new(start, end)
            }
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start: CalendarDate,
            end: CalendarDate,
            should_succeed: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start: date(2026, 2, 1),
                end: date(2026, 2, 3),
                should_succeed: true,
                description: "end after start",
            },
            TestCase {
                start: date(2026, 2, 3),
                end: date(2026, 2, 1),
                should_succeed: false,
                description: "end before start",
            },
            TestCase {
                start: date(2026, 2, 1),
                end: date(2026, 2, 1),
                should_succeed: false,
                description: "same day has no nights",
            },
        ];

        for case in &cases {
            let range = DateRange::new(case.start, case.end);
            if case.should_succeed {
                assert!(range.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert!(
                    matches!(range, Err(RangeError::InvalidRange { .. })),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_nights() {
        let range = DateRange::new(date(2026, 2, 1), date(2026, 2, 3)).expect("two-night range");
        assert_eq!(range.nights(), 2);

        let across =
            DateRange::new(date(2026, 2, 27), date(2026, 3, 2)).expect("month-crossing range");
        assert_eq!(across.nights(), 3);
    }

    #[test]
    fn test_from_start() {
        let range = DateRange::from_start(date(2026, 2, 1), 3).expect("three nights");
        assert_eq!(range.dates(), (date(2026, 2, 1), date(2026, 2, 4)));
        assert_eq!(range.nights(), 3);

        assert!(matches!(
            DateRange::from_start(date(2026, 2, 1), 0),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!(
            DateRange::from_start(date(9999, 12, 30), 5),
            Err(RangeError::Date(DateError::OutOfRange))
        ));
    }

    #[test]
    fn test_contains_and_interior() {
        let range =
            DateRange::new(date(2026, 2, 1), date(2026, 2, 4)).expect("range for membership test");

        assert!(range.contains(&date(2026, 2, 1)));
        assert!(range.contains(&date(2026, 2, 4)));
        assert!(!range.contains(&date(2026, 2, 5)));

        assert!(!range.is_interior(&date(2026, 2, 1)));
        assert!(range.is_interior(&date(2026, 2, 2)));
        assert!(range.is_interior(&date(2026, 2, 3)));
        assert!(!range.is_interior(&date(2026, 2, 4)));
    }

    #[test]
    fn test_overlaps() {
        let a = DateRange::new(date(2026, 2, 1), date(2026, 2, 5)).expect("first range");
        let b = DateRange::new(date(2026, 2, 5), date(2026, 2, 9)).expect("touching range");
        let c = DateRange::new(date(2026, 2, 10), date(2026, 2, 12)).expect("disjoint range");

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_display_and_parse() {
        let range =
            DateRange::new(date(2026, 2, 1), date(2026, 2, 3)).expect("range for display test");
        assert_eq!(range.to_string(), "2026-02-01/2026-02-03");

        let parsed = "2026-02-01 / 2026-02-03".parse::<DateRange>().expect("parse range");
        assert_eq!(parsed, range);
    }

    #[test]
    fn test_parse_failures() {
        let err = "2026-02-01".parse::<DateRange>().expect_err("missing separator");
        assert!(err.to_string().contains("No range separator found"));

        let err = "2026-02-01/2026-02-03/2026-02-05"
            .parse::<DateRange>()
            .expect_err("too many separators");
        assert!(err.to_string().contains("expected 1, found 2"));

        assert!(matches!(
            "2026-02-03/2026-02-01".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!(
            "2026-02-30/2026-03-01".parse::<DateRange>(),
            Err(RangeError::Date(_))
        ));
    }

    #[test]
    fn test_ordering() {
        let a = DateRange::new(date(2026, 2, 1), date(2026, 2, 3)).expect("first range");
        let b = DateRange::new(date(2026, 2, 1), date(2026, 2, 5)).expect("same start, later end");
        let c = DateRange::new(date(2026, 2, 2), date(2026, 2, 3)).expect("later start");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde_string_format() {
        let range =
            DateRange::new(date(2026, 3, 10), date(2026, 3, 14)).expect("range for serde test");
        let json = serde_json::to_string(&range).expect("serialize range");
        assert_eq!(json, r#""2026-03-10/2026-03-14""#);

        let parsed: DateRange = serde_json::from_str(&json).expect("deserialize range");
        assert_eq!(parsed, range);
    }
}
