// src/error/failure.rs
//
// Translation of transport failures into user-facing envelope messages.
//
// RULES:
// - Exactly two recognised failure kinds
// - Messages are fixed and operation-independent
// - The cause never reaches the message (it is logged at debug level)

use log::debug;

use super::TransportError;

/// Shown for any protocol-level failure (non-2xx status, regardless of code).
pub const REMOTE_SERVICE_FAILURE_MSG: &str = "An unexpected error occurred";

/// Shown whenever the catalog service cannot be reached.
pub const CONNECTIVITY_FAILURE_MSG: &str =
    "Couldn't reach server. Check your internet connection.";

/// The failure categories a repository turns into an `Error` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    RemoteService,
    Connectivity,
}

impl FailureKind {
    /// Classify a transport error. `None` means the error is not one the
    /// repositories recognise and must propagate.
    pub fn of(error: &TransportError) -> Option<Self> {
        match error {
            TransportError::Protocol { .. } => Some(FailureKind::RemoteService),
            TransportError::Connectivity(_) => Some(FailureKind::Connectivity),
            TransportError::Malformed(_) | TransportError::InvalidRequest(_) => None,
        }
    }

    pub fn message(self, cause: &TransportError) -> String {
        match self {
            FailureKind::RemoteService => remote_service_failure(cause),
            FailureKind::Connectivity => connectivity_failure(cause),
        }
    }
}

pub fn remote_service_failure(cause: &TransportError) -> String {
    debug!("remote service failure: {}", cause);
    REMOTE_SERVICE_FAILURE_MSG.to_string()
}

pub fn connectivity_failure(cause: &TransportError) -> String {
    debug!("connectivity failure: {}", cause);
    CONNECTIVITY_FAILURE_MSG.to_string()
}
