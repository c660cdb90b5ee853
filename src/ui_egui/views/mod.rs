use chrono::NaiveDate;
use egui::{Align2, Color32, FontId, Id, Pos2, Rect, Response, Sense, Stroke, Vec2};

use crate::models::item::{ItemId, ScheduledItem};
use crate::models::ui::CalendarCell;
use crate::services::placement::DayIndex;
use crate::ui_egui::actions::CalendarAction;
use crate::ui_egui::drag::{DragController, DragSignal};

pub mod month_view;
pub(crate) mod palette;
pub mod tooltip;
pub mod week_view;

use palette::CalendarCellPalette;

pub(crate) const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const CELL_SPACING: f32 = 2.0;
const CREATE_BUTTON_SIZE: f32 = 16.0;

/// Read-only inputs shared by the week and month grids for one frame.
pub(crate) struct GridContext<'a, 'i> {
    pub id: Id,
    pub index: &'a DayIndex<'i>,
    pub palette: CalendarCellPalette,
    pub drag: &'a DragController,
    pub pointer: Option<Pos2>,
    pub chip_cap: usize,
    pub show_week_numbers: bool,
}

/// What the user did in the grid this frame.
#[derive(Default)]
pub(crate) struct GridOutput {
    pub actions: Vec<CalendarAction>,
    pub drag_signals: Vec<DragSignal>,
    /// Real day cell under the pointer.
    pub pointer_day: Option<NaiveDate>,
    pub hovered_item: Option<ItemId>,
}

impl GridOutput {
    /// Translate a chip or dot response into actions and signals.
    pub fn record_item_response(&mut self, item_id: ItemId, response: &Response) {
        if response.drag_started() {
            self.drag_signals.push(DragSignal::Start(item_id));
        } else if response.clicked() {
            self.actions.push(CalendarAction::OpenItem(item_id));
        }
        if response.hovered() && !response.dragged() {
            self.hovered_item = Some(item_id);
        }
    }
}

/// Short badge text for a destination channel key.
pub fn channel_badge(key: &str) -> String {
    match key.trim().to_ascii_lowercase().as_str() {
        "x" | "twitter" => "X".to_string(),
        "linkedin" => "in".to_string(),
        "instagram" => "IG".to_string(),
        "facebook" => "fb".to_string(),
        "newsletter" | "email" => "✉".to_string(),
        other => other.chars().take(2).collect::<String>().to_uppercase(),
    }
}

pub fn channel_badges(item: &ScheduledItem) -> String {
    item.channels
        .iter()
        .map(|key| channel_badge(key))
        .filter(|badge| !badge.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate text to fit within a given pixel width, appending "…" when cut.
pub(crate) fn truncate_to_width(ui: &egui::Ui, text: &str, font_id: &FontId, max_width: f32) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure = |candidate: &str| {
        ui.fonts(|f| {
            f.layout_no_wrap(candidate.to_string(), font_id.clone(), Color32::WHITE)
                .size()
                .x
        })
    };

    if measure(text) <= max_width {
        return text.to_string();
    }

    let mut boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = boundaries.len().saturating_sub(1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        if measure(&format!("{}…", &text[..boundaries[mid]])) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    format!("{}…", &text[..boundaries[low]])
}

pub(crate) fn column_width(ui: &egui::Ui, show_week_numbers: bool, week_number_width: f32) -> f32 {
    let extra = if show_week_numbers {
        week_number_width + CELL_SPACING
    } else {
        0.0
    };
    ((ui.available_width() - CELL_SPACING * 6.0 - extra) / 7.0).max(40.0)
}

pub(crate) fn spacing() -> f32 {
    CELL_SPACING
}

/// Paint a day cell's background and border, and record drop-target hits.
///
/// Returns `true` when the cell is a real day.
pub(crate) fn paint_cell_frame(
    ui: &egui::Ui,
    rect: Rect,
    cell: &CalendarCell,
    ctx: &GridContext<'_, '_>,
    output: &mut GridOutput,
) -> bool {
    let palette = &ctx.palette;
    let Some(date) = cell.date else {
        ui.painter().rect_filled(rect, 2.0, palette.empty_bg);
        return false;
    };

    let bg = if cell.is_today {
        palette.today_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 2.0, bg);

    let border = if cell.is_today {
        Stroke::new(1.5, palette.today_border)
    } else {
        Stroke::new(1.0, palette.border)
    };
    ui.painter().rect_stroke(rect, 2.0, border);

    if ctx.pointer.is_some_and(|pos| rect.contains(pos)) {
        output.pointer_day = Some(date);
    }
    if ctx.drag.highlighted_day() == Some(date) {
        ui.painter().rect_filled(rect, 2.0, palette.drop_fill);
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.drop_border));
    }
    true
}

/// Small "+" in the cell's top-right corner that asks the host for a new item.
pub(crate) fn create_button(
    ui: &mut egui::Ui,
    rect: Rect,
    date: NaiveDate,
    ctx: &GridContext<'_, '_>,
    output: &mut GridOutput,
) {
    let button_rect = Rect::from_min_size(
        Pos2::new(rect.right() - CREATE_BUTTON_SIZE - 3.0, rect.top() + 3.0),
        Vec2::splat(CREATE_BUTTON_SIZE),
    );
    let response = ui
        .interact(button_rect, ctx.id.with(("create", date)), Sense::click())
        .on_hover_text("New post on this day");

    let color = if response.hovered() {
        ctx.palette.text
    } else {
        ctx.palette.muted_text
    };
    ui.painter().text(
        button_rect.center(),
        Align2::CENTER_CENTER,
        "+",
        FontId::proportional(14.0),
        color,
    );

    if response.clicked() {
        output.actions.push(CalendarAction::CreateForDate(date));
    }
}

pub(crate) fn paint_overflow(ui: &egui::Ui, pos: Pos2, label: &str, color: Color32) {
    ui.painter().text(
        pos,
        Align2::LEFT_TOP,
        label,
        FontId::proportional(11.0),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_badge_known_and_unknown_keys() {
        assert_eq!(channel_badge("twitter"), "X");
        assert_eq!(channel_badge("LinkedIn"), "in");
        assert_eq!(channel_badge("mastodon"), "MA");
        assert_eq!(channel_badge(""), "");
    }

    #[test]
    fn test_channel_badges_join_and_skip_empty() {
        let item = ScheduledItem::new(1, "Post").with_channels(["x", " ", "instagram"]);
        assert_eq!(channel_badges(&item), "X IG");
    }
}
