//! Date-range rental calendar.
//!
//! [`RangeCalendar`] owns the visible month, the renter's selection and the
//! pricing policy. Each user event is one method call; the view redraws from
//! [`RangeCalendar::month_view`].
//!
//! ```
//! use storefront_widgets::calendar::{CalendarConfig, RangeCalendar};
//! use storefront_widgets::{CalendarDate, FixedClock};
//!
//! let today = CalendarDate::new(2026, 2, 1)?;
//! let mut calendar = RangeCalendar::new(CalendarConfig::default(), FixedClock::new(today))?;
//!
//! calendar.select_day(CalendarDate::new(2026, 2, 1)?);
//! calendar.select_day(CalendarDate::new(2026, 2, 3)?);
//!
//! let quote = calendar.compute_price().ok_or("incomplete selection")?;
//! assert_eq!(quote.nights, 2);
//! assert_eq!(quote.total.to_string(), "€90");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod booking;
mod selection;
mod view;

pub use booking::{BookingRequest, BookingSink};
pub use selection::{Selection, StayTooShort, select_day};
pub use view::{DayCell, DayTag, MonthView};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    CALENDAR_FIRST_MONTH, CALENDAR_LAST_MONTH, CALENDAR_YEAR, CalendarDate, Clock,
    DEFAULT_DAILY_RATE, DateRange, MIN_RENTAL_DAYS, Money, QUICK_SELECT_DAY, RangeError,
    SystemClock, YearMonth,
};

/// Listing context for one calendar instance.
///
/// `daily_rate` is in minor units when read from JSON, like every other
/// serialized [`Money`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub daily_rate: Money,
    pub minimum_stay_days: u32,
    pub initial_month: YearMonth,
    pub first_month: YearMonth,
    pub last_month: YearMonth,
    /// Anchor day for the quick-duration buttons
    pub quick_select_start: CalendarDate,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            daily_rate: Money::from_units(DEFAULT_DAILY_RATE),
            minimum_stay_days: MIN_RENTAL_DAYS,
            initial_month: YearMonth::clamped(CALENDAR_YEAR, CALENDAR_FIRST_MONTH),
            first_month: YearMonth::clamped(CALENDAR_YEAR, CALENDAR_FIRST_MONTH),
            last_month: YearMonth::clamped(CALENDAR_YEAR, CALENDAR_LAST_MONTH),
            quick_select_start: CalendarDate::clamped(
                CALENDAR_YEAR,
                CALENDAR_FIRST_MONTH,
                QUICK_SELECT_DAY,
            ),
        }
    }
}

impl CalendarConfig {
    /// Reads a config from JSON; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` for malformed JSON or an
    /// inconsistent navigation window.
    pub fn from_json(json: &str) -> Result<Self, CalendarError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalendarError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if the window is inverted or
    /// does not contain the initial month.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.first_month > self.last_month {
            return Err(CalendarError::InvalidConfig(format!(
                "first month {} is after last month {}",
                self.first_month, self.last_month
            )));
        }
        if self.initial_month < self.first_month || self.initial_month > self.last_month {
            return Err(CalendarError::InvalidConfig(format!(
                "initial month {} is outside {}..={}",
                self.initial_month, self.first_month, self.last_month
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Please select both start and end dates")]
    NoSelection,

    #[error("Minimum rental period is {minimum} days, selected {nights}")]
    BelowMinimum { nights: u32, minimum: u32 },

    #[error("Quick duration must be at least one day, got {0}")]
    InvalidDuration(u32),

    #[error("Invalid calendar config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// A press of the previous or next month button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStep {
    Previous,
    Next,
}

impl MonthStep {
    pub const fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// What a day click did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A fresh selection began on this day
    Started(CalendarDate),
    /// A pending start was replaced by an earlier or equal day
    Restarted(CalendarDate),
    Completed(DateRange),
    /// The stay was too short; the clicked day is now the pending start
    Rejected(StayTooShort),
    /// The day is before today and cannot be selected
    IgnoredPast(CalendarDate),
}

/// Derived price of a complete selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub nights: u32,
    pub total: Money,
}

/// The rental calendar widget state.
#[derive(Debug, Clone)]
pub struct RangeCalendar<C: Clock = SystemClock> {
    config: CalendarConfig,
    clock: C,
    visible: YearMonth,
    selection: Selection,
}

impl<C: Clock> RangeCalendar<C> {
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `config` fails validation.
    pub fn new(config: CalendarConfig, clock: C) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self {
            visible: config.initial_month,
            config,
            clock,
            selection: Selection::Empty,
        })
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub const fn visible_month(&self) -> YearMonth {
        self.visible
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// Whether paging one month in `step`'s direction stays inside the window.
    pub fn can_navigate(&self, step: MonthStep) -> bool {
        self.visible
            .offset(step.delta())
            .is_some_and(|target| {
                target >= self.config.first_month && target <= self.config.last_month
            })
    }

    /// Pages the visible month by one; returns `false` and changes nothing
    /// when the target lies outside the window.
    pub fn navigate_month(&mut self, step: MonthStep) -> bool {
        if !self.can_navigate(step) {
            debug!(visible = %self.visible, ?step, "month navigation outside window ignored");
            return false;
        }
        if let Some(target) = self.visible.offset(step.delta()) {
            self.visible = target;
        }
        true
    }

    /// Applies a day click.
    ///
    /// Days before today are ignored. Everything else goes through
    /// [`select_day`] with the configured minimum stay.
    pub fn select_day(&mut self, date: CalendarDate) -> SelectOutcome {
        if date < self.clock.today() {
            debug!(%date, "past day ignored");
            return SelectOutcome::IgnoredPast(date);
        }

        let (next, outcome) = select_day(self.selection, date, self.config.minimum_stay_days);
        self.selection = next;

        match &outcome {
            SelectOutcome::Started(start) | SelectOutcome::Restarted(start) => {
                debug!(%start, "selection started");
            }
            SelectOutcome::Completed(range) => {
                info!(%range, nights = range.nights(), "selection completed");
            }
            SelectOutcome::Rejected(rejected) => {
                warn!(
                    start = %rejected.start,
                    end = %rejected.end,
                    nights = rejected.nights,
                    minimum = rejected.minimum,
                    "stay below minimum, restarting selection"
                );
            }
            SelectOutcome::IgnoredPast(_) => {}
        }
        outcome
    }

    /// Selects `days` nights from the quick-select anchor.
    ///
    /// The minimum stay and the past-day rule are not applied here.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDuration` for zero days and
    /// `CalendarError::Range` if the end date is out of range.
    pub fn select_quick_duration(&mut self, days: u32) -> Result<DateRange, CalendarError> {
        if days == 0 {
            return Err(CalendarError::InvalidDuration(days));
        }
        let range = DateRange::from_start(self.config.quick_select_start, days)?;
        self.selection = Selection::Range(range);
        info!(%range, days, "quick duration selected");
        Ok(range)
    }

    /// Price of the current selection, if it has both ends.
    pub fn compute_price(&self) -> Option<PriceQuote> {
        self.selection.range().map(|range| {
            let nights = range.nights();
            PriceQuote {
                nights,
                total: self.config.daily_rate.times(u64::from(nights)),
            }
        })
    }

    /// Total for display; zero while the selection is incomplete.
    pub fn total_price(&self) -> Money {
        self.compute_price().map_or(Money::ZERO, |quote| quote.total)
    }

    /// Hands the current selection to checkout.
    ///
    /// # Errors
    /// Returns `CalendarError::NoSelection` when either end is missing and
    /// `CalendarError::BelowMinimum` when the stay is too short.
    pub fn confirm_selection<S: BookingSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<BookingRequest, CalendarError> {
        let quote = self.compute_price().ok_or(CalendarError::NoSelection)?;
        let range = self.selection.range().ok_or(CalendarError::NoSelection)?;

        if quote.nights < self.config.minimum_stay_days {
            return Err(CalendarError::BelowMinimum {
                nights: quote.nights,
                minimum: self.config.minimum_stay_days,
            });
        }

        let request = BookingRequest {
            start_date: range.start(),
            end_date: range.end(),
            duration_days: quote.nights,
            total_price: quote.total,
        };
        sink.request_rental(&request);
        info!(%range, total = %request.total_price, "rental requested");
        Ok(request)
    }

    /// Render model for the visible month.
    pub fn month_view(&self) -> MonthView {
        view::build(
            self.visible,
            &self.selection,
            self.clock.today(),
            self.can_navigate(MonthStep::Previous),
            self.can_navigate(MonthStep::Next),
        )
    }
}
