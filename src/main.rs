// Content Calendar Application
// Main entry point

use anyhow::{Context, Result};
use chrono::Local;
use std::path::PathBuf;

use content_calendar::services::item_store::{sample_items, ItemStore};
use content_calendar::services::settings::SettingsService;
use content_calendar::ui_egui::CalendarApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Content Calendar");

    let settings = SettingsService::from_project_dirs()
        .map(|service| service.load_or_default())
        .unwrap_or_default();

    let items_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(ItemStore::default_path)
        .context("no data directory available; pass the path to an items JSON file")?;

    let store = if items_path.exists() {
        ItemStore::open(&items_path)
            .with_context(|| format!("failed to load items from {}", items_path.display()))?
    } else {
        log::info!("Seeding sample items at {}", items_path.display());
        let store = ItemStore::with_items(&items_path, sample_items(Local::now().date_naive()));
        store.save().context("failed to write sample items")?;
        store
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Content Calendar",
        options,
        Box::new(move |cc| Ok(Box::new(CalendarApp::new(cc, store, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run calendar window: {}", err))
}
