//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations over the ports: membership upgrades,
//! post actions, dashboard loading, publishing and dataset generation.

pub mod handlers;
pub mod in_flight;

pub use handlers::{
    // Membership
    BecomeCreatorHandler, CheckoutError, ConfirmCheckoutCommand, ConfirmCheckoutHandler,
    MembershipError, MembershipState, OpenBillingPortalHandler, StartCheckoutHandler,
    // Auth
    AuthError, AuthSession,
    // Content
    open_post, ActionError, DeletePostHandler, LikePostHandler,
    // Dashboards
    DashboardLoadError, LoadAdminDashboardHandler, LoadCreatorDashboardHandler,
    LoadReaderDashboardHandler, ResourceFailure,
    // Editor
    PublishDocumentHandler, PublishError, UploadError, UploadMediaHandler,
    // Dataset
    DatasetReport, GenerateDatasetsCommand, GenerateDatasetsHandler,
};
pub use in_flight::{InFlightActions, InFlightGuard};
