//! Authentication handlers.

mod session;

pub use session::{AuthError, AuthSession};
