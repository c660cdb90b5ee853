use chrono::Datelike;
use egui::{Align2, CursorIcon, FontId, Margin, Pos2, Rect, Sense, Stroke, Vec2};

use super::{
    column_width, create_button, paint_cell_frame, paint_overflow, spacing, GridContext,
    GridOutput, WEEKDAY_LABELS,
};
use crate::models::item::ScheduledItem;
use crate::models::ui::CalendarCell;
use crate::services::placement::CellPreview;
use crate::utils::date::iso_week_of_row;

/// Width of the week number column
const WEEK_NUMBER_WIDTH: f32 = 35.0;
const CELL_HEIGHT: f32 = 84.0;
const DOT_SIZE: f32 = 12.0;
const DOT_GAP: f32 = 5.0;

pub struct MonthView;

impl MonthView {
    pub(crate) fn show(
        ui: &mut egui::Ui,
        rows: &[Vec<CalendarCell>],
        ctx: &GridContext<'_, '_>,
        output: &mut GridOutput,
    ) {
        let col_width = column_width(ui, ctx.show_week_numbers, WEEK_NUMBER_WIDTH);
        Self::render_header(ui, ctx, col_width);
        ui.add_space(4.0);

        egui::Grid::new(ctx.id.with("month_grid"))
            .spacing([spacing(), spacing()])
            .show(ui, |ui| {
                for week in rows {
                    if ctx.show_week_numbers {
                        let label = iso_week_of_row(week)
                            .map(|week| week.to_string())
                            .unwrap_or_default();
                        let (rect, _) = ui.allocate_exact_size(
                            Vec2::new(WEEK_NUMBER_WIDTH, CELL_HEIGHT),
                            Sense::hover(),
                        );
                        ui.painter().text(
                            rect.center_top() + Vec2::new(0.0, 6.0),
                            Align2::CENTER_TOP,
                            label,
                            FontId::proportional(11.0),
                            ctx.palette.muted_text,
                        );
                    }

                    for cell in week {
                        let (rect, _) = ui.allocate_exact_size(
                            Vec2::new(col_width, CELL_HEIGHT),
                            Sense::hover(),
                        );
                        Self::render_day_cell(ui, rect, cell, ctx, output);
                    }
                    ui.end_row();
                }
            });
    }

    fn render_header(ui: &mut egui::Ui, ctx: &GridContext<'_, '_>, col_width: f32) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = spacing();
            if ctx.show_week_numbers {
                Self::header_label(ui, ctx, "Wk", WEEK_NUMBER_WIDTH);
            }
            for name in WEEKDAY_LABELS {
                Self::header_label(ui, ctx, name, col_width);
            }
        });
    }

    fn header_label(ui: &mut egui::Ui, ctx: &GridContext<'_, '_>, text: &str, width: f32) {
        ui.allocate_ui_with_layout(
            Vec2::new(width, 26.0),
            egui::Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                egui::Frame::none()
                    .fill(ctx.palette.header_bg)
                    .rounding(egui::Rounding::same(6.0))
                    .stroke(Stroke::new(1.0, ctx.palette.border))
                    .inner_margin(Margin::symmetric(4.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(text).size(13.0).strong());
                    });
            },
        );
    }

    fn render_day_cell(
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

        let text_color = if cell.is_today {
            ctx.palette.today_border
        } else {
            ctx.palette.text
        };
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            Align2::LEFT_TOP,
            date.day().to_string(),
            FontId::proportional(14.0),
            text_color,
        );
        create_button(ui, rect, date, ctx, output);

        let preview = CellPreview::new(ctx.index.items_for(date), ctx.chip_cap);
        let mut x = rect.left() + 6.0;
        let y = rect.top() + 30.0;
        for item in preview.visible {
            let dot_rect = Rect::from_min_size(Pos2::new(x, y), Vec2::splat(DOT_SIZE));
            Self::render_dot(ui, dot_rect, item, ctx, output);
            x += DOT_SIZE + DOT_GAP;
        }

        if let Some(label) = preview.overflow_label() {
            paint_overflow(
                ui,
                Pos2::new(rect.left() + 6.0, y + DOT_SIZE + 6.0),
                &label,
                ctx.palette.muted_text,
            );
        }
    }

    fn render_dot(
        ui: &mut egui::Ui,
        dot_rect: Rect,
        item: &ScheduledItem,
        ctx: &GridContext<'_, '_>,
        output: &mut GridOutput,
    ) {
        // Slightly larger hit area than the painted dot
        let response = ui.interact(
            dot_rect.expand(2.0),
            ctx.id.with(("dot", item.id)),
            Sense::click_and_drag(),
        );
        let color = if ctx.drag.dragged_item() == Some(item.id) {
            ctx.palette.chip_dragged_bg
        } else {
            ctx.palette.chip_bg
        };
        let radius = if response.hovered() {
            DOT_SIZE / 2.0 + 1.5
        } else {
            DOT_SIZE / 2.0
        };
        ui.painter().circle_filled(dot_rect.center(), radius, color);
        if response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Grab);
        }

        output.record_item_response(item.id, &response);
    }
}
