use chrono::Datelike;
use egui::{Align2, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::with_alpha;
use super::{
    channel_badges, column_width, create_button, paint_cell_frame, paint_overflow, spacing,
    truncate_to_width, GridContext, GridOutput,
};
use crate::models::item::ScheduledItem;
use crate::models::ui::CalendarCell;
use crate::services::placement::CellPreview;

const HEADER_HEIGHT: f32 = 26.0;
const CHIP_HEIGHT: f32 = 38.0;
const CHIP_GAP: f32 = 4.0;
const MIN_CELL_HEIGHT: f32 = 200.0;

pub struct WeekView;

impl WeekView {
    pub(crate) fn show(
        ui: &mut egui::Ui,
        cells: &[CalendarCell],
        ctx: &GridContext<'_, '_>,
        output: &mut GridOutput,
    ) {
        let col_width = column_width(ui, false, 0.0);
        let height = (ui.available_height() - 4.0).max(MIN_CELL_HEIGHT);

        ui.horizontal_top(|ui| {
            ui.spacing_mut().item_spacing.x = spacing();
            for cell in cells {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(col_width, height), Sense::hover());
                Self::render_day(ui, rect, cell, ctx, output);
            }
        });
    }

    fn render_day(
        ui: &mut egui::Ui,
        rect: Rect,
        cell: &CalendarCell,
        ctx: &GridContext<'_, '_>,
        output: &mut GridOutput,
    ) {
        if !paint_cell_frame(ui, rect, cell, ctx, output) {
            return;
        }
        let Some(date) = cell.date else {
            return;
        };

        let header_color = if cell.is_today {
            ctx.palette.today_border
        } else {
            ctx.palette.text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 6.0, rect.top() + 5.0),
            Align2::LEFT_TOP,
            format!("{} {}", date.format("%a"), date.day()),
            FontId::proportional(14.0),
            header_color,
        );
        create_button(ui, rect, date, ctx, output);

        let preview = CellPreview::new(ctx.index.items_for(date), ctx.chip_cap);
        let mut y = rect.top() + HEADER_HEIGHT;
        for item in preview.visible {
            let chip_rect = Rect::from_min_size(
                Pos2::new(rect.left() + 4.0, y),
                Vec2::new(rect.width() - 8.0, CHIP_HEIGHT),
            );
            Self::render_chip(ui, chip_rect, item, ctx, output);
            y += CHIP_HEIGHT + CHIP_GAP;
        }

        if let Some(label) = preview.overflow_label() {
            paint_overflow(ui, Pos2::new(rect.left() + 6.0, y), &label, ctx.palette.muted_text);
        }
    }

    fn render_chip(
        ui: &mut egui::Ui,
        chip_rect: Rect,
        item: &ScheduledItem,
        ctx: &GridContext<'_, '_>,
        output: &mut GridOutput,
    ) {
        let response = ui.interact(
            chip_rect,
            ctx.id.with(("chip", item.id)),
            Sense::click_and_drag(),
        );
        let is_dragged = ctx.drag.dragged_item() == Some(item.id);
        let palette = &ctx.palette;

        let bg = if is_dragged {
            palette.chip_dragged_bg
        } else {
            palette.chip_bg
        };
        ui.painter().rect_filled(chip_rect, 3.0, bg);
        if response.hovered() && !is_dragged {
            ui.painter()
                .rect_stroke(chip_rect, 3.0, Stroke::new(1.5, palette.today_border));
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        let title_font = FontId::proportional(12.0);
        let title = truncate_to_width(ui, &item.title, &title_font, chip_rect.width() - 8.0);
        ui.painter().text(
            chip_rect.left_top() + Vec2::new(4.0, 3.0),
            Align2::LEFT_TOP,
            title,
            title_font,
            palette.chip_text,
        );

        let time = item
            .scheduled_at
            .map(|at| at.format("%H:%M").to_string())
            .unwrap_or_default();
        let meta_font = FontId::proportional(10.0);
        let meta = truncate_to_width(
            ui,
            &format!("{}  {}", time, channel_badges(item)),
            &meta_font,
            chip_rect.width() - 8.0,
        );
        ui.painter().text(
            chip_rect.left_top() + Vec2::new(4.0, 20.0),
            Align2::LEFT_TOP,
            meta,
            meta_font,
            with_alpha(palette.chip_text, 210),
        );

        output.record_item_response(item.id, &response);
    }
}
