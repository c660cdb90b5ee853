// Test fixtures - reusable test data
// Provides consistent items and dates across integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use content_calendar::models::item::ScheduledItem;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday, March 15 2024
    pub fn ides_of_march_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    /// Saturday, March 16 2024
    pub fn day_after_ides_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 16).unwrap()
    }

    pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }
}

/// Sample content queues
pub mod items {
    use super::*;

    /// Posts spread around mid-March 2024, including one at 23:59 and two drafts.
    pub fn march_queue() -> Vec<ScheduledItem> {
        vec![
            ScheduledItem::new(1, "Late night teaser")
                .with_content("Midnight drop incoming")
                .with_channels(["x"])
                .scheduled(dates::local(2024, 3, 15, 23, 59)),
            ScheduledItem::new(2, "Morning recap")
                .with_channels(["linkedin", "newsletter"])
                .scheduled(dates::local(2024, 3, 15, 8, 30)),
            ScheduledItem::new(3, "Weekend photo").scheduled(dates::local(2024, 3, 16, 11, 0)),
            ScheduledItem::new(4, "Unplanned idea"),
            ScheduledItem::new(5, "Another idea"),
        ]
    }

    /// `count` posts all on the same day, one per hour from 08:00.
    pub fn busy_day(day: NaiveDate, count: usize) -> Vec<ScheduledItem> {
        (0..count)
            .map(|n| {
                let at = day
                    .and_hms_opt(8 + n as u32 % 16, 0, 0)
                    .and_then(|naive| Local.from_local_datetime(&naive).earliest())
                    .unwrap();
                ScheduledItem::new(n as i64 + 1, format!("Post {}", n + 1)).scheduled(at)
            })
            .collect()
    }
}
