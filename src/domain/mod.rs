//! Domain layer - pure Nexora logic with no I/O.
//!
//! # Module Structure
//!
//! - `foundation` - Identifiers, money, timestamps, errors and the state machine trait
//! - `membership` - Membership tiers and billing value objects
//! - `content` - Posts, users, subscriptions and the premium gate
//! - `editor` - Block-based document model and rendering
//! - `dashboard` - Reader, creator and admin aggregations
//! - `dataset` - Support chatbot Q/A dataset generation

pub mod content;
pub mod dashboard;
pub mod dataset;
pub mod editor;
pub mod foundation;
pub mod membership;
