// src/repositories/resource_fetch.rs
//
// The resource-wrapped fetch protocol shared by every repository operation:
//
//   1. emit Loading
//   2. call the transport once (abandoned if the token is cancelled)
//   3. non-empty body -> map -> emit Success
//      empty body     -> per EmptyBodyPolicy (default: emit nothing)
//      protocol error -> emit Error(remote-service message)
//      connectivity   -> emit Error(connectivity message)
//      anything else  -> return Err, no terminal value
//
// Nothing is emitted once the token is cancelled, and nothing follows the
// terminal value.

use log::{debug, warn};
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::config::{CineyConfig, EmptyBodyPolicy};
use crate::domain::Resource;
use crate::error::{AppResult, FailureKind, TransportError, REMOTE_SERVICE_FAILURE_MSG};
use crate::integrations::tmdb::{CatalogRequest, CatalogTransport};

/// Receives the envelope values of one fetch, in order.
pub trait ResourceSink<T>: Send {
    fn emit(&mut self, value: Resource<T>);
}

impl<T: Send> ResourceSink<T> for UnboundedSender<Resource<T>> {
    fn emit(&mut self, value: Resource<T>) {
        if self.send(value).is_err() {
            debug!("resource receiver dropped, value discarded");
        }
    }
}

impl<T: Send> ResourceSink<T> for Vec<Resource<T>> {
    fn emit(&mut self, value: Resource<T>) {
        self.push(value);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub empty_body: EmptyBodyPolicy,
}

impl From<&CineyConfig> for FetchOptions {
    fn from(config: &CineyConfig) -> Self {
        Self {
            empty_body: config.empty_body,
        }
    }
}

/// Result of the transport call, before anything terminal is emitted.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    Loaded(T),
    Empty,
    Failed {
        kind: FailureKind,
        error: TransportError,
    },
    Cancelled,
}

pub fn begin<T>(sink: &mut dyn ResourceSink<T>) {
    sink.emit(Resource::Loading);
}

/// Call the transport and map the body.
///
/// Mapper failures and unrecognised transport failures are returned as `Err`.
pub async fn load<T, M>(
    transport: &dyn CatalogTransport,
    request: &CatalogRequest,
    token: &CancellationToken,
    map: M,
) -> AppResult<LoadOutcome<T>>
where
    M: FnOnce(Value) -> AppResult<T> + Send,
{
    let operation = request.endpoint.operation();
    let result = tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("{} {} cancelled before the response arrived", operation, request);
            return Ok(LoadOutcome::Cancelled);
        }
        result = transport.execute(request) => result,
    };

    match result {
        Ok(Some(body)) => map(body).map(LoadOutcome::Loaded),
        Ok(None) => Ok(LoadOutcome::Empty),
        Err(error) => match FailureKind::of(&error) {
            Some(kind) => Ok(LoadOutcome::Failed { kind, error }),
            None => Err(error.into()),
        },
    }
}

/// Replace a connectivity failure with `cached()` when it has a value.
pub fn recover_offline<T, F>(outcome: LoadOutcome<T>, cached: F) -> LoadOutcome<T>
where
    F: FnOnce() -> Option<T>,
{
    match outcome {
        LoadOutcome::Failed {
            kind: FailureKind::Connectivity,
            error,
        } => match cached() {
            Some(data) => LoadOutcome::Loaded(data),
            None => LoadOutcome::Failed {
                kind: FailureKind::Connectivity,
                error,
            },
        },
        other => other,
    }
}

/// Emit the terminal value for `outcome`, unless the fetch was cancelled.
pub fn finish<T>(
    outcome: LoadOutcome<T>,
    request: &CatalogRequest,
    options: &FetchOptions,
    token: &CancellationToken,
    sink: &mut dyn ResourceSink<T>,
) {
    let operation = request.endpoint.operation();
    if token.is_cancelled() {
        debug!("{} {} cancelled, terminal value dropped", operation, request);
        return;
    }

    match outcome {
        LoadOutcome::Loaded(data) => sink.emit(Resource::success(data)),
        LoadOutcome::Empty => match options.empty_body {
            EmptyBodyPolicy::EndSilently => {
                warn!(
                    "{} {} returned an empty body, no terminal value emitted",
                    operation, request
                );
            }
            EmptyBodyPolicy::EmitError => {
                sink.emit(Resource::error(REMOTE_SERVICE_FAILURE_MSG));
            }
        },
        LoadOutcome::Failed { kind, error } => {
            warn!("{} {} failed ({:?})", operation, request, kind);
            sink.emit(Resource::error(kind.message(&error)));
        }
        LoadOutcome::Cancelled => {}
    }
}

/// The whole protocol for operations that need no interception.
pub async fn fetch<T, M>(
    transport: &dyn CatalogTransport,
    request: CatalogRequest,
    map: M,
    options: &FetchOptions,
    token: &CancellationToken,
    sink: &mut dyn ResourceSink<T>,
) -> AppResult<()>
where
    T: Send,
    M: FnOnce(Value) -> AppResult<T> + Send,
{
    begin(sink);
    let outcome = load(transport, &request, token, map).await?;
    finish(outcome, &request, options, token, sink);
    Ok(())
}
