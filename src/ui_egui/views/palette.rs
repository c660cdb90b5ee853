use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub today_bg: Color32,
    pub empty_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub drop_border: Color32,
    pub drop_fill: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub chip_bg: Color32,
    pub chip_dragged_bg: Color32,
    pub chip_text: Color32,
    pub header_bg: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            today_bg: theme.today_background,
            empty_bg: theme.calendar_background,
            border: theme.day_border,
            today_border: theme.today_border,
            drop_border: theme.drop_highlight,
            drop_fill: with_alpha(theme.drop_highlight, if theme.is_dark { 60 } else { 40 }),
            text: theme.text_primary,
            muted_text: theme.text_secondary,
            chip_bg: theme.chip_background,
            chip_dragged_bg: with_alpha(theme.chip_background, 90),
            chip_text: theme.chip_text,
            header_bg: blend(theme.app_background, theme.calendar_background, 0.5),
        }
    }
}
