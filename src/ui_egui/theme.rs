//! Theme module for the content calendar
//!
//! Defines the CalendarTheme color set and applies it to an egui context.

use egui::Color32;

/// Colors used by the grid, chips and overlays
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    pub app_background: Color32,

    /// Background for padding and out-of-period cells
    pub calendar_background: Color32,

    pub day_background: Color32,
    pub day_border: Color32,

    pub today_background: Color32,
    pub today_border: Color32,

    /// Outline of the candidate drop target during a drag
    pub drop_highlight: Color32,

    pub chip_background: Color32,
    pub chip_text: Color32,

    pub text_primary: Color32,
    pub text_secondary: Color32,
}

impl CalendarTheme {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(236, 236, 240),
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            drop_highlight: Color32::from_rgb(46, 160, 90),
            chip_background: Color32::from_rgb(100, 150, 200),
            chip_text: Color32::WHITE,
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(34, 34, 36),
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            drop_highlight: Color32::from_rgb(90, 200, 130),
            chip_background: Color32::from_rgb(70, 110, 160),
            chip_text: Color32::from_rgb(240, 240, 240),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.inactive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert!(CalendarTheme::from_name("Dark").is_dark);
        assert!(!CalendarTheme::from_name("light").is_dark);
        assert!(!CalendarTheme::from_name("neon").is_dark);
    }

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }
}
