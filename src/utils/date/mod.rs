// Date utility functions
// Monday-first week and month grid arithmetic

use chrono::{
    DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone,
};

use crate::models::ui::CalendarCell;

pub const DAYS_PER_WEEK: usize = 7;

/// A month grid row; `None` marks a padding cell.
pub type GridWeek = [Option<NaiveDate>; DAYS_PER_WEEK];

/// Map a naive local wall-clock time onto the local zone.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times inside
/// a DST gap are pushed forward by whole hours until they exist.
pub fn resolve_local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => (1..=3)
            .find_map(|hours| Local.from_local_datetime(&(naive + Duration::hours(hours))).earliest()),
    }
}

pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(resolve_local)
        .unwrap_or(date)
}

/// Column of `date` in a Monday-first week (Monday = 0, Sunday = 6).
pub fn monday_column(date: NaiveDate) -> usize {
    // Sunday-zero numbering shifted so Sunday lands in the last column
    ((date.weekday().num_days_from_sunday() + 6) % 7) as usize
}

/// The Monday of the week containing `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(monday_column(date) as i64)
}

/// Monday 00:00:00 local time of the week containing `moment`.
pub fn start_of_week_at(moment: DateTime<Local>) -> DateTime<Local> {
    let monday = start_of_week(moment.date_naive());
    monday
        .and_hms_opt(0, 0, 0)
        .and_then(resolve_local)
        .unwrap_or_else(|| start_of_day(moment))
}

/// Seven consecutive days starting at `week_start`.
pub fn week_days(week_start: NaiveDate) -> [NaiveDate; DAYS_PER_WEEK] {
    std::array::from_fn(|offset| week_start + Duration::days(offset as i64))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_first
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31)
}

/// Month laid out as Monday-first weeks with `None` padding on both ends.
///
/// An invalid month yields an empty grid.
pub fn month_grid(year: i32, month: u32) -> Vec<GridWeek> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let leading = monday_column(first);
    let mut cells: Vec<Option<NaiveDate>> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat(None).take(leading));
    cells.extend(first.iter_days().take(days_in_month(year, month) as usize).map(Some));
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(None);
    }

    cells
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| std::array::from_fn(|idx| chunk[idx]))
        .collect()
}

/// Shift by whole months, clamping the day to the target month's length.
pub fn shift_months(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta_months;
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

pub fn week_cells(week_start: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
    week_days(week_start)
        .into_iter()
        .map(|day| CalendarCell::day(day, today))
        .collect()
}

/// Month rows for rendering. Days outside the month are placeholders rather
/// than dimmed neighbours.
pub fn month_cells(year: i32, month: u32, today: NaiveDate) -> Vec<Vec<CalendarCell>> {
    month_grid(year, month)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|slot| match slot {
                    Some(day) => CalendarCell::day(day, today),
                    None => CalendarCell::placeholder(),
                })
                .collect()
        })
        .collect()
}

/// ISO week number for the row, taken from its first real day.
pub fn iso_week_of_row(week: &[CalendarCell]) -> Option<u32> {
    week.iter()
        .find_map(|cell| cell.date)
        .map(|day| day.iso_week().week())
}
