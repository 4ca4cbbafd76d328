//! Application services driving the task store.

mod config;
mod controller;
mod loading;
mod reorder;

pub use config::{DEFAULT_STORAGE_KEY, TaskStoreConfig};
pub use controller::TaskStoreController;
pub use loading::activate_after;
pub use reorder::move_onto;
