// Module exports for models

pub mod item;
pub mod settings;
pub mod ui;
