// src/error/mod.rs

pub mod failure;
pub mod types;

pub use failure::{
    connectivity_failure, remote_service_failure, FailureKind, CONNECTIVITY_FAILURE_MSG,
    REMOTE_SERVICE_FAILURE_MSG,
};
pub use types::{AppError, AppResult, TransportError};
