//! Floating item preview shown after a sustained hover.

use egui::{Id, Order, RichText, Vec2};

use crate::models::item::ScheduledItem;
use crate::ui_egui::hover::Tooltip;

const EXCERPT_CHARS: usize = 140;
const POINTER_OFFSET: Vec2 = Vec2::new(14.0, 14.0);

pub fn show(ctx: &egui::Context, id: Id, tooltip: Tooltip, item: &ScheduledItem) {
    egui::Area::new(id.with("hover_preview"))
        .order(Order::Tooltip)
        .fixed_pos(tooltip.anchor + POINTER_OFFSET)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(280.0);
                ui.label(RichText::new(&item.title).strong());

                let excerpt = item.excerpt(EXCERPT_CHARS);
                if !excerpt.is_empty() {
                    ui.label(RichText::new(excerpt).small());
                }
                if !item.channels.is_empty() {
                    ui.label(RichText::new(item.channels.join(" · ")).small().italics());
                }
                ui.label(RichText::new(item.formatted_schedule()).weak());
            });
        });
}
