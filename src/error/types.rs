// src/error/types.rs
use serde::Serialize;
use thiserror::Error;

/// Failure raised by the catalog transport.
///
/// Only `Protocol` and `Connectivity` are recognised by the repositories and
/// turned into an `Error` envelope. The other variants propagate to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The service answered with a non-success HTTP status.
    #[error("Catalog service returned status {status}")]
    Protocol { status: u16 },

    /// The service could not be reached at all (DNS, refused, timeout, broken body).
    #[error("Catalog service unreachable: {0}")]
    Connectivity(String),

    /// The body was present but was not valid JSON.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),

    /// The request could not be built.
    #[error("Invalid catalog request: {0}")]
    InvalidRequest(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_converts_into_app_error() {
        let err: AppError = TransportError::Protocol { status: 404 }.into();
        assert!(matches!(err, AppError::Transport(TransportError::Protocol { status: 404 })));
        assert_eq!(
            err.to_string(),
            "Transport error: Catalog service returned status 404"
        );
    }

    #[test]
    fn test_app_error_serializes_as_message() {
        let json = serde_json::to_string(&AppError::Config("no key".to_string())).unwrap();
        assert_eq!(json, "\"Configuration error: no key\"");
    }
}
