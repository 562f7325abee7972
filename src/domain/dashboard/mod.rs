//! Dashboard domain module.
//!
//! Reader, creator and admin views. Every statistic is derived client-side
//! by reducing the collections fetched for the dashboard.

mod admin;
mod creator;
mod feed;
mod load_state;
mod reader;
mod revenue;


pub use admin::{AdminDashboard, PlatformStats};
pub use creator::{CreatorAnalytics, CreatorDashboard, PostCounts, PostEarnings};
pub use feed::PostFeed;
pub use load_state::LoadState;
pub use reader::{ReaderDashboard, ReaderStats};
pub use revenue::{RevenueSplit, CREATOR_SHARE_PERCENT, PLATFORM_SHARE_PERCENT};
