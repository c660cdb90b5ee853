// UI models module
// View modes and grid cells shared by the views and the navigator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Week,
    Month,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Week => "Week",
            ViewMode::Month => "Month",
        }
    }

    /// Parse a persisted view name; unknown names fall back to week view.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "month" => ViewMode::Month,
            _ => ViewMode::Week,
        }
    }
}

/// One day surface of a rendered grid.
///
/// Placeholder cells (`date == None`) pad a month grid so the first day sits
/// under its weekday column and the final week has seven cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: Option<NaiveDate>,
    pub is_today: bool,
}

impl CalendarCell {
    pub fn day(date: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date: Some(date),
            is_today: date == today,
        }
    }

    pub fn placeholder() -> Self {
        Self {
            date: None,
            is_today: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_from_name() {
        assert_eq!(ViewMode::from_name("Month"), ViewMode::Month);
        assert_eq!(ViewMode::from_name(" week "), ViewMode::Week);
        assert_eq!(ViewMode::from_name("quarter"), ViewMode::Week);
    }

    #[test]
    fn test_cell_flags() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let cell = CalendarCell::day(today, today);
        assert!(cell.is_today);
        assert!(!cell.is_placeholder());
        assert!(CalendarCell::placeholder().is_placeholder());
    }
}
