//! Dashboard load failures.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ApiError;

/// One collection that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFailure {
    pub resource: &'static str,
    pub error: ApiError,
}

impl fmt::Display for ResourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.resource, self.error)
    }
}

/// Every fetch that failed while loading a dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to load dashboard ({})", join(.failures))]
pub struct DashboardLoadError {
    pub failures: Vec<ResourceFailure>,
}

fn join(failures: &[ResourceFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DashboardLoadError {
    pub fn failed(&self, resource: &str) -> bool {
        self.failures.iter().any(|f| f.resource == resource)
    }

    /// Code of the first failure; unauthorized wins so the caller can re-login.
    pub fn code(&self) -> ErrorCode {
        let codes: Vec<_> = self.failures.iter().map(|f| f.error.code()).collect();
        if codes.contains(&ErrorCode::Unauthorized) {
            ErrorCode::Unauthorized
        } else {
            codes.first().copied().unwrap_or(ErrorCode::InternalError)
        }
    }
}

impl From<DashboardLoadError> for DomainError {
    fn from(err: DashboardLoadError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

/// Keeps a successful fetch, or records its failure.
pub(crate) fn collect<T>(
    resource: &'static str,
    result: Result<T, ApiError>,
    failures: &mut Vec<ResourceFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(resource, error = %error, "Dashboard resource failed to load");
            failures.push(ResourceFailure { resource, error });
            None
        }
    }
}
