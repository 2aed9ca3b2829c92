// src/application/view_models/subscription.rs
//
// Runs use cases on behalf of a view model.
//
// Each launched concern gets two tasks:
// - a worker that executes the use case into an mpsc channel
// - an applier that folds received values into a watch slot
//
// Both observe the same cancellation token. Once the owner closes (or is
// dropped) no further value reaches any slot.

use log::{debug, error};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::state::ViewState;
use crate::domain::Resource;
use crate::use_cases::UseCase;

pub struct Subscriptions {
    token: CancellationToken,
    tasks: Vec<JoinHandle<()>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
            tasks: Vec::new(),
        }
    }

    /// Start `use_case` and return the slot its values are applied to.
    ///
    /// Must be called from within a tokio runtime.
    pub fn launch<U>(
        &mut self,
        name: &'static str,
        use_case: Arc<U>,
        params: U::Params,
    ) -> watch::Receiver<ViewState<U::Output>>
    where
        U: UseCase + 'static,
        U::Output: Sync,
    {
        let (state_tx, state_rx) = watch::channel(ViewState::<U::Output>::Initial);
        let (value_tx, mut value_rx) = mpsc::unbounded_channel::<Resource<U::Output>>();

        let worker_token = self.token.clone();
        let worker = tokio::spawn(async move {
            let mut sink = value_tx;
            if let Err(e) = use_case.execute(params, &worker_token, &mut sink).await {
                error!("{} failed: {}", name, e);
            }
        });

        let applier_token = self.token.clone();
        let applier = tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = applier_token.cancelled() => {
                        debug!("{} closed", name);
                        break;
                    }
                    value = value_rx.recv() => match value {
                        Some(resource) => state_tx.send_modify(|state| state.apply(resource)),
                        None => break,
                    },
                }
            }
        });

        self.tasks.push(worker);
        self.tasks.push(applier);
        state_rx
    }

    pub fn is_closed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel every launched concern. Idempotent.
    pub fn close(&mut self) {
        self.token.cancel();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Default for Subscriptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.close();
    }
}

/// Wait until `slot` is Loaded or Failed, or until nothing more can arrive,
/// and return the state at that point.
pub async fn settled<T: Clone>(slot: &mut watch::Receiver<ViewState<T>>) -> ViewState<T> {
    if let Ok(state) = slot.wait_for(|state| state.is_settled()).await {
        return state.clone();
    }
    let state = slot.borrow().clone();
    state
}
