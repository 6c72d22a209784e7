//! The payload handed to checkout once a period is confirmed.

use serde::Serialize;

use crate::{CalendarDate, Money};

/// A confirmed rental request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub duration_days: u32,
    pub total_price: Money,
}

impl BookingRequest {
    /// Human-readable confirmation text
    pub fn summary(&self) -> String {
        format!(
            "Start Date: {}\nEnd Date: {}\nDuration: {} days\nTotal: {}",
            self.start_date.to_month_first(),
            self.end_date.to_month_first(),
            self.duration_days,
            self.total_price
        )
    }
}

/// Receives confirmed bookings; checkout lives behind this.
pub trait BookingSink {
    fn request_rental(&mut self, request: &BookingRequest);
}

impl BookingSink for Vec<BookingRequest> {
    fn request_rental(&mut self, request: &BookingRequest) {
        self.push(request.clone());
    }
}
