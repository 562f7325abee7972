//! Dashboard query handlers.
//!
//! Each handler fetches its collections concurrently and reports every
//! failed fetch, so a half-loaded dashboard is never shown as complete.

mod load_admin;
mod load_creator;
mod load_error;
mod load_reader;

pub use load_admin::LoadAdminDashboardHandler;
pub use load_creator::LoadCreatorDashboardHandler;
pub use load_error::{DashboardLoadError, ResourceFailure};
pub use load_reader::LoadReaderDashboardHandler;
