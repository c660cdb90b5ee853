pub mod actions;
mod app;
pub mod calendar;
pub mod dialogs;
pub mod drag;
pub mod hover;
pub mod navigation;
pub mod theme;
pub mod views;

pub use app::CalendarApp;
