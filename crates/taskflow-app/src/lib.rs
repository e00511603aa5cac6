//! Application layer logic for taskflow.
//!
//! This crate owns the task collection, the per-session view parameters, the
//! theme flag and configuration, independent of any particular front end.

pub mod config;
pub mod session;
pub mod task_store;
pub mod theme;
pub mod view_state;

// Re-exports for convenience
pub use config::{AppConfig, DefaultsConfig, StorageConfig};
pub use session::{Intent, Render, Session, SessionEvent};
pub use task_store::{TASKS_KEY, TaskChange, TaskStore};
pub use theme::{THEME_KEY, Theme};
pub use view_state::{EmptyState, ViewState};
