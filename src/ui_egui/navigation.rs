use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::ui::{CalendarCell, ViewMode};
use crate::utils::date::{
    month_cells, shift_months, start_of_week, week_cells, week_days, DAYS_PER_WEEK,
};

/// Cursor date plus view mode; grids are re-derived from these on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewNavigator {
    cursor: NaiveDate,
    mode: ViewMode,
}

impl ViewNavigator {
    pub fn new(cursor: NaiveDate, mode: ViewMode) -> Self {
        Self { cursor, mode }
    }

    pub fn today(mode: ViewMode) -> Self {
        Self::new(Local::now().date_naive(), mode)
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Changes only the grid shape; the cursor stays put.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: i32) {
        self.cursor = match self.mode {
            ViewMode::Week => self.cursor + Duration::weeks(direction as i64),
            ViewMode::Month => shift_months(self.cursor, direction),
        };
        log::debug!("navigated {} view to {}", self.mode.label(), self.cursor);
    }

    pub fn jump_to_today(&mut self) {
        self.jump_to(Local::now().date_naive());
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    /// Grid rows for the current mode, each exactly seven cells.
    pub fn rows(&self, today: NaiveDate) -> Vec<Vec<CalendarCell>> {
        match self.mode {
            ViewMode::Week => vec![week_cells(start_of_week(self.cursor), today)],
            ViewMode::Month => month_cells(self.cursor.year(), self.cursor.month(), today),
        }
    }

    /// First and last real day shown.
    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        match self.mode {
            ViewMode::Week => {
                let days = week_days(start_of_week(self.cursor));
                (days[0], days[DAYS_PER_WEEK - 1])
            }
            ViewMode::Month => {
                let first = self.cursor.with_day(1).unwrap_or(self.cursor);
                let last = shift_months(first, 1).pred_opt().unwrap_or(first);
                (first, last)
            }
        }
    }

    pub fn title(&self) -> String {
        let (first, last) = self.visible_range();
        match self.mode {
            ViewMode::Month => self.cursor.format("%B %Y").to_string(),
            ViewMode::Week if first.year() != last.year() => format!(
                "{} – {}",
                first.format("%b %-d, %Y"),
                last.format("%b %-d, %Y")
            ),
            ViewMode::Week if first.month() != last.month() => format!(
                "{} – {}, {}",
                first.format("%b %-d"),
                last.format("%b %-d"),
                last.year()
            ),
            ViewMode::Week => format!(
                "{} – {}, {}",
                first.format("%b %-d"),
                last.format("%-d"),
                last.year()
            ),
        }
    }
}
