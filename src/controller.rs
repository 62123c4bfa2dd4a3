use crate::action::Action;
use crate::capability::Capability;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{Error, Result};

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;

/// Busy-flags of one rendered header.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub follow_in_progress: bool,
    pub unfollow_in_progress: bool,
}

impl InteractionState {
    pub fn in_progress(&self, action: Action) -> bool {
        match action {
            Action::Follow => self.follow_in_progress,
            Action::Unfollow => self.unfollow_in_progress,
        }
    }

    pub fn phase(&self, action: Action) -> Phase {
        if self.in_progress(action) {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    fn flag_mut(&mut self, action: Action) -> &mut bool {
        match action {
            Action::Follow => &mut self.follow_in_progress,
            Action::Unfollow => &mut self.unfollow_in_progress,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Idle,
    Pending,
}

/// The UI event that triggered an action.
#[derive(Default, Debug)]
pub struct UiEvent {
    default_prevented: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a trigger ended up doing. Informational only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// No capability was supplied for the action.
    Skipped,
    /// The action was already pending.
    Busy,
    Completed,
    /// The capability failed and the failure was reported to the sink.
    Failed,
}

///
/// Follow/unfollow state machine of a profile header.
///
/// Each action is `Idle -> Pending -> Idle`. A trigger only leaves `Idle` through
/// an atomic check-and-set, so at most one invocation per action is in flight.
/// The two actions are independent of each other.
///
pub struct InteractionController {
    follow: Option<Arc<dyn Capability>>,
    unfollow: Option<Arc<dyn Capability>>,
    sink: Arc<dyn DiagnosticSink>,
    state: watch::Sender<InteractionState>,
}

impl InteractionController {
    pub fn new(
        follow: Option<Arc<dyn Capability>>,
        unfollow: Option<Arc<dyn Capability>>,
    ) -> Self {
        let (state, _) = watch::channel(InteractionState::default());
        Self {
            follow,
            unfollow,
            sink: Arc::new(TracingSink),
            state,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn state(&self) -> InteractionState {
        *self.state.borrow()
    }

    /// Receiver notified on every busy-flag transition.
    pub fn subscribe(&self) -> watch::Receiver<InteractionState> {
        self.state.subscribe()
    }

    pub fn has_capability(&self, action: Action) -> bool {
        self.capability(action).is_some()
    }

    pub async fn trigger_follow(&self, event: &mut UiEvent) -> Outcome {
        self.trigger(Action::Follow, event).await
    }

    pub async fn trigger_unfollow(&self, event: &mut UiEvent) -> Outcome {
        self.trigger(Action::Unfollow, event).await
    }

    /// Run `action` once, unless it has no capability or is already pending.
    ///
    /// Never fails: capability errors and panics go to the diagnostic sink, and
    /// the busy-flag is reset afterwards in every case, also when this future is
    /// dropped before completion.
    pub async fn trigger(&self, action: Action, event: &mut UiEvent) -> Outcome {
        event.prevent_default();

        let capability = match self.capability(action) {
            Some(capability) => capability.clone(),
            None => {
                tracing::debug!(%action, "no capability, ignoring trigger");
                return Outcome::Skipped;
            }
        };

        let mut pending = match self.begin(action) {
            Some(pending) => pending,
            None => {
                tracing::debug!(%action, "already pending, ignoring trigger");
                return Outcome::Busy;
            }
        };

        let outcome = match invoke_catching_panics(capability.as_ref()).await {
            Ok(()) => {
                tracing::debug!(%action, "completed");
                Outcome::Completed
            }
            Err(error) => {
                self.sink.report(action.failure_context(), &error);
                Outcome::Failed
            }
        };
        pending.settled = true;
        outcome
    }

    fn capability(&self, action: Action) -> Option<&Arc<dyn Capability>> {
        match action {
            Action::Follow => self.follow.as_ref(),
            Action::Unfollow => self.unfollow.as_ref(),
        }
    }

    /// The `Idle -> Pending` transition.
    fn begin(&self, action: Action) -> Option<PendingGuard<'_>> {
        let started = self.state.send_if_modified(|state| {
            let flag = state.flag_mut(action);
            if *flag {
                false
            } else {
                *flag = true;
                true
            }
        });

        if started {
            tracing::debug!(%action, "pending");
            Some(PendingGuard {
                state: &self.state,
                action,
                settled: false,
            })
        } else {
            None
        }
    }
}

/// Performs the `Pending -> Idle` transition when dropped.
///
/// Dropping the trigger future before the capability settles drops the
/// capability future too, which cancels it without a diagnostic report.
struct PendingGuard<'c> {
    state: &'c watch::Sender<InteractionState>,
    action: Action,
    settled: bool,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        let action = self.action;
        if !self.settled {
            tracing::debug!(%action, "trigger dropped before settling, capability cancelled");
        }
        self.state.send_modify(|state| *state.flag_mut(action) = false);
    }
}

async fn invoke_catching_panics(capability: &dyn Capability) -> Result<()> {
    // A panic may happen when creating the future as well as when polling it.
    let future = std::panic::catch_unwind(AssertUnwindSafe(|| capability.invoke()))
        .map_err(Error::from_panic)?;

    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(Error::from_panic(payload)))
}
