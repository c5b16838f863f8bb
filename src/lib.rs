//! Settings controller for collaborative groups: gates who may edit a
//! group's display metadata and visibility, derives the editable field set,
//! and commits edits to the remote group service in two ordered phases.

pub mod api;
pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::commit::CommitReport;
pub use crate::core::errors::{ApiError, SettingsError};
pub use crate::core::services::{SettingsPanel, SettingsService};
pub use crate::core::status::CommitStatus;
pub use crate::infrastructure::api::{GroupApi, in_memory::InMemoryGroupApi};
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;

#[cfg(test)]
mod tests;
