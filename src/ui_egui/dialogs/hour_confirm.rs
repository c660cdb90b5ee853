//! Hour picker shown after an item is dropped on a day.

use chrono::NaiveDate;
use egui::{Align2, Id, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourDialogOutcome {
    /// Still open; carries the hour currently selected.
    Open(u32),
    Confirm(u32),
    Cancel,
}

pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

pub fn render_hour_confirm(
    ctx: &egui::Context,
    id: Id,
    title: &str,
    day: NaiveDate,
    hour: u32,
) -> HourDialogOutcome {
    let mut selected = hour;
    let mut outcome = None;

    egui::Window::new("Confirm publish time")
        .id(id.with("hour_confirm"))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(format!("Move \"{}\" to {}", title, day.format("%A, %B %-d")));
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                ui.label("Publish at");
                egui::ComboBox::from_id_source(id.with("hour_combo"))
                    .selected_text(format_hour(selected))
                    .show_ui(ui, |ui| {
                        for candidate in 0..24 {
                            ui.selectable_value(&mut selected, candidate, format_hour(candidate));
                        }
                    });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    outcome = Some(HourDialogOutcome::Confirm(selected));
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(HourDialogOutcome::Cancel);
                }
            });
        });

    outcome.unwrap_or(HourDialogOutcome::Open(selected))
}
