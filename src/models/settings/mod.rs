// Settings module
// User-tunable calendar behavior, persisted as TOML

use serde::{Deserialize, Serialize};

use crate::models::ui::ViewMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSettings {
    pub theme: String,
    pub default_view: ViewMode,
    /// Pointer rest time before an item preview appears.
    pub hover_delay_ms: u64,
    /// Hour pre-selected when confirming a drop.
    pub default_drop_hour: u32,
    pub week_chip_cap: usize,
    pub month_dot_cap: usize,
    pub show_week_numbers: bool,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            default_view: ViewMode::Week,
            hover_delay_ms: 400,
            default_drop_hour: 9,
            week_chip_cap: 3,
            month_dot_cap: 4,
            show_week_numbers: false,
        }
    }
}

impl CalendarSettings {
    /// Clamp values a hand-edited file could push out of range.
    pub fn sanitized(mut self) -> Self {
        self.default_drop_hour = self.default_drop_hour.min(23);
        self.week_chip_cap = self.week_chip_cap.max(1);
        self.month_dot_cap = self.month_dot_cap.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CalendarSettings::default();
        assert_eq!(settings.hover_delay_ms, 400);
        assert_eq!(settings.default_drop_hour, 9);
        assert_eq!(settings.week_chip_cap, 3);
        assert_eq!(settings.month_dot_cap, 4);
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_sanitized_clamps_out_of_range_values() {
        let settings = CalendarSettings {
            default_drop_hour: 30,
            week_chip_cap: 0,
            month_dot_cap: 0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.default_drop_hour, 23);
        assert_eq!(settings.week_chip_cap, 1);
        assert_eq!(settings.month_dot_cap, 1);
    }
}
