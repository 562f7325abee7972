//! Command and query handlers.
//!
//! Each handler takes its ports as `Arc<dyn Port>` at construction and
//! exposes an async `handle`.

pub mod auth;
pub mod content;
pub mod dashboard;
pub mod dataset;
pub mod editor;
pub mod membership;

pub use auth::{AuthError, AuthSession};
pub use content::{open_post, ActionError, DeletePostHandler, LikePostHandler};
pub use dashboard::{
    DashboardLoadError, LoadAdminDashboardHandler, LoadCreatorDashboardHandler,
    LoadReaderDashboardHandler, ResourceFailure,
};
pub use dataset::{DatasetReport, GenerateDatasetsCommand, GenerateDatasetsHandler};
pub use editor::{PublishDocumentHandler, PublishError, UploadError, UploadMediaHandler};
pub use membership::{
    BecomeCreatorHandler, CheckoutError, ConfirmCheckoutCommand, ConfirmCheckoutHandler,
    MembershipError, MembershipState, OpenBillingPortalHandler, StartCheckoutHandler,
};
