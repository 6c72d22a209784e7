//! Render model for one month of the rental calendar.

use serde::Serialize;

use crate::calendar::Selection;
use crate::{CalendarDate, YearMonth};

/// How a single day cell is drawn.
///
/// Past days are disabled and never carry a selection tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayTag {
    Past,
    Start,
    End,
    InRange,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    pub tag: DayTag,
}

impl DayCell {
    pub fn is_selectable(&self) -> bool {
        self.tag != DayTag::Past
    }

    /// The day-of-month number printed in the cell
    pub const fn label(&self) -> u8 {
        self.date.day().get()
    }
}

/// Everything the view needs to redraw the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub month: YearMonth,
    /// Header such as `FEBRUARY 2026`
    pub title: String,
    /// Empty cells before day 1, Sunday-first
    pub leading_blanks: u8,
    pub cells: Vec<DayCell>,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl MonthView {
    pub fn cell(&self, date: &CalendarDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == *date)
    }
}

pub(crate) fn tag_for(date: CalendarDate, selection: &Selection, today: CalendarDate) -> DayTag {
    if date < today {
        return DayTag::Past;
    }
    match selection {
        Selection::Start(start) if *start == date => DayTag::Start,
        Selection::Range(range) if range.start() == date => DayTag::Start,
        Selection::Range(range) if range.end() == date => DayTag::End,
        Selection::Range(range) if range.is_interior(&date) => DayTag::InRange,
        _ => DayTag::Plain,
    }
}

pub(crate) fn build(
    month: YearMonth,
    selection: &Selection,
    today: CalendarDate,
    can_go_back: bool,
    can_go_forward: bool,
) -> MonthView {
    let cells = month
        .days()
        .map(|date| DayCell {
            date,
            tag: tag_for(date, selection, today),
        })
        .collect();

    MonthView {
        month,
        title: month.title(),
        leading_blanks: month.first_day().weekday().index(),
        cells,
        can_go_back,
        can_go_forward,
    }
}
