//! The start/end selection state machine.

use crate::calendar::SelectOutcome;
use crate::prelude::*;
use crate::{CalendarDate, DateRange};

/// What the renter has picked so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    Empty,
    /// A start day waiting for its end
    Start(CalendarDate),
    /// A committed period
    Range(DateRange),
}

/// A proposed end day that leaves fewer nights than the minimum stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(
    fmt = "Minimum rental period is {minimum} days. Please select at least {minimum} days \
           between your start and end dates."
)]
pub struct StayTooShort {
    pub start: CalendarDate,
    pub end: CalendarDate,
    pub nights: u32,
    pub minimum: u32,
}

impl Selection {
    pub const fn start(&self) -> Option<CalendarDate> {
        match self {
            Self::Empty => None,
            Self::Start(start) => Some(*start),
            Self::Range(range) => Some(range.start()),
        }
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        match self {
            Self::Range(range) => Some(range.end()),
            Self::Empty | Self::Start(_) => None,
        }
    }

    pub const fn range(&self) -> Option<DateRange> {
        match self {
            Self::Range(range) => Some(*range),
            Self::Empty | Self::Start(_) => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// Applies one day click to a selection.
///
/// An empty or completed selection starts over at `date`. A pending start
/// accepts a later `date` as its end when the stay is long enough; a stay
/// that is too short is rejected and `date` becomes the new start. A `date`
/// on or before the pending start replaces it.
pub fn select_day(
    selection: Selection,
    date: CalendarDate,
    minimum_nights: u32,
) -> (Selection, SelectOutcome) {
    let start = match selection {
        Selection::Empty | Selection::Range(_) => {
            return (Selection::Start(date), SelectOutcome::Started(date));
        }
        Selection::Start(start) => start,
    };

    if date <= start {
        return (Selection::Start(date), SelectOutcome::Restarted(date));
    }

    let nights = u32::try_from(start.days_until(&date)).unwrap_or(u32::MAX);
    if nights < minimum_nights {
        let rejected = StayTooShort {
            start,
            end: date,
            nights,
            minimum: minimum_nights,
        };
        return (Selection::Start(date), SelectOutcome::Rejected(rejected));
    }

    match DateRange::new(start, date) {
        Ok(range) => (Selection::Range(range), SelectOutcome::Completed(range)),
        Err(_) => (Selection::Start(date), SelectOutcome::Restarted(date)),
    }
}
