// Service module exports

pub mod item_store;
pub mod placement;
pub mod settings;
