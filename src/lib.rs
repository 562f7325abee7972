//! Nexora - client core for a membership publishing platform.
//!
//! Readers, creators and admins share one client: a membership tier that
//! gates premium posts, a block editor for writing them, role dashboards
//! fed by the REST backend, and an offline generator for the support
//! chatbot's Q/A datasets.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
