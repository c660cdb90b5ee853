// Property-based tests for the date grid builder and placement index

use chrono::{Datelike, Duration, Local, NaiveDate, TimeZone, Timelike, Weekday};
use content_calendar::models::item::ScheduledItem;
use content_calendar::services::placement::{items_for_day, DayIndex};
use content_calendar::utils::date::{
    days_in_month, month_grid, monday_column, start_of_week, start_of_week_at, week_days,
};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1970-01-01 through roughly 2100
    (0i64..47_000).prop_map(|offset| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Duration::days(offset))
}

proptest! {
    /// Property: every month grid is rectangular and exactly as tall as needed
    #[test]
    fn prop_month_grid_is_rectangular(year in 1900..2200i32, month in 1..=12u32) {
        let grid = month_grid(year, month);
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let leading = monday_column(first);
        let days = days_in_month(year, month) as usize;

        prop_assert_eq!(grid.len(), (leading + days).div_ceil(7));
        prop_assert_eq!(grid.iter().flatten().filter(|cell| cell.is_some()).count(), days);
        prop_assert!(grid[0][..leading].iter().all(|cell| cell.is_none()));
        prop_assert_eq!(grid[0][leading], Some(first));
    }

    /// Property: real days sit under their own weekday column
    #[test]
    fn prop_month_grid_columns_match_weekdays(year in 1900..2200i32, month in 1..=12u32) {
        for week in month_grid(year, month) {
            for (column, cell) in week.iter().enumerate() {
                if let Some(day) = cell {
                    prop_assert_eq!(day.weekday().num_days_from_monday() as usize, column);
                }
            }
        }
    }

    /// Property: start_of_week lands on a Monday and is idempotent
    #[test]
    fn prop_start_of_week_is_idempotent_monday(date in any_date()) {
        let monday = start_of_week(date);
        prop_assert_eq!(monday.weekday(), Weekday::Mon);
        prop_assert_eq!(start_of_week(monday), monday);
        prop_assert!(date - monday < Duration::days(7));
    }

    /// Property: the week built from start_of_week contains the original day
    #[test]
    fn prop_week_days_contain_date(date in any_date()) {
        prop_assert!(week_days(start_of_week(date)).contains(&date));
    }

    /// Property: the timestamp flavor is always Monday midnight
    #[test]
    fn prop_start_of_week_at_is_midnight(date in any_date(), hour in 0..24u32, minute in 0..60u32) {
        let naive = date.and_hms_opt(hour, minute, 0).unwrap();
        if let Some(moment) = Local.from_local_datetime(&naive).earliest() {
            let start = start_of_week_at(moment);
            prop_assert_eq!(start.weekday(), Weekday::Mon);
            prop_assert_eq!(start.date_naive(), start_of_week(moment.date_naive()));
            prop_assert_eq!(start.minute(), 0);
        }
    }

    /// Property: unscheduled items never appear on any day
    #[test]
    fn prop_unscheduled_never_placed(
        offsets in proptest::collection::vec(proptest::option::of(0i64..30), 0..40),
        day_offset in 0i64..30,
    ) {
        let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let queue: Vec<ScheduledItem> = offsets
            .iter()
            .enumerate()
            .map(|(n, offset)| {
                let item = ScheduledItem::new(n as i64, "post");
                match offset {
                    Some(days) => {
                        let naive = (base + Duration::days(*days)).and_hms_opt(12, 0, 0).unwrap();
                        item.scheduled(Local.from_local_datetime(&naive).earliest().unwrap())
                    }
                    None => item,
                }
            })
            .collect();

        let day = base + Duration::days(day_offset);
        let index = DayIndex::build(&queue);
        prop_assert!(index.items_for(day).iter().all(|item| item.scheduled_at.is_some()));
        prop_assert!(items_for_day(&queue, day).iter().all(|item| item.scheduled_at.is_some()));
        prop_assert_eq!(
            index.unscheduled_count(),
            offsets.iter().filter(|offset| offset.is_none()).count()
        );
        prop_assert_eq!(index.items_for(day).len(), items_for_day(&queue, day).len());
    }
}
