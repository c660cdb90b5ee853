//! Desktop host for the calendar.
//!
//! Plays the role of the surrounding page: owns the authoritative item list,
//! persists reschedules and reports failures in the status bar.

use chrono::{DateTime, Local, NaiveDate};

use crate::models::item::{ItemId, ScheduledItem};
use crate::models::settings::CalendarSettings;
use crate::services::item_store::ItemStore;
use crate::ui_egui::actions::{dispatch, CalendarHost};
use crate::ui_egui::calendar::ContentCalendar;

#[derive(Debug, Clone)]
enum Status {
    Info(String),
    Error(String),
}

pub struct CalendarApp {
    store: ItemStore,
    calendar: ContentCalendar,
    draft_hour: u32,
    selected: Option<ItemId>,
    status: Option<Status>,
}

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>, store: ItemStore, settings: CalendarSettings) -> Self {
        let draft_hour = settings.default_drop_hour;
        let calendar = ContentCalendar::new("content_calendar", settings);
        calendar.theme().apply_to_context(&cc.egui_ctx);

        Self {
            store,
            calendar,
            draft_hour,
            selected: None,
            status: None,
        }
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(self.store.path().display().to_string());
                match &self.status {
                    Some(Status::Info(message)) => {
                        ui.separator();
                        ui.label(message);
                    }
                    Some(Status::Error(message)) => {
                        ui.separator();
                        ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
                    }
                    None => {}
                }
            });
        });
    }

    fn render_details(&mut self, ctx: &egui::Context) {
        let Some(item) = self.selected.and_then(|id| self.store.get(id)).cloned() else {
            self.selected = None;
            return;
        };

        egui::SidePanel::right("item_details")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading(&item.title);
                ui.weak(item.formatted_schedule());
                ui.separator();
                if item.content.is_empty() {
                    ui.weak("No content yet");
                } else {
                    ui.label(&item.content);
                }
                if !item.channels.is_empty() {
                    ui.add_space(6.0);
                    ui.label(format!("Channels: {}", item.channels.join(", ")));
                }
                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    self.selected = None;
                }
            });
    }
}

impl CalendarHost for CalendarApp {
    fn on_item_click(&mut self, item: &ScheduledItem) {
        self.selected = Some(item.id);
    }

    fn on_reschedule(&mut self, item_id: ItemId, at: DateTime<Local>) {
        match self.store.reschedule(item_id, at) {
            Ok(()) => {
                self.status = Some(Status::Info(format!(
                    "Moved to {}",
                    at.format("%a %b %-d, %H:%M")
                )));
            }
            Err(err) => {
                log::error!("Failed to reschedule item {}: {}", item_id, err);
                self.status = Some(Status::Error(format!("Reschedule failed: {}", err)));
            }
        }
    }

    fn on_create_for_date(&mut self, date: NaiveDate) {
        match self.store.create_draft(date, self.draft_hour) {
            Ok(id) => {
                self.selected = Some(id);
                self.status = Some(Status::Info(format!("Draft created for {}", date)));
            }
            Err(err) => {
                log::error!("Failed to create draft for {}: {}", date, err);
                self.status = Some(Status::Error(format!("Could not create draft: {}", err)));
            }
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_status_bar(ctx);
        self.render_details(ctx);

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| self.calendar.show(ui, self.store.items()))
            .inner;

        if !actions.is_empty() {
            let items = self.store.items().to_vec();
            dispatch(actions, &items, self);
        }
    }
}
