//! Resize coordination: debouncer and the rebuild sequence.
//!
//! A burst of resize events collapses into a single rebuild: each new event
//! re-arms the debouncer, and only after the quiet period elapses does the
//! coordinator stop the loop, rebuild the layout from the original
//! configuration (the winning breakpoint may have changed), and restart.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::error;

use crate::animate;
use crate::carousel::{Phase, Shared};
use crate::geometry::Size;
use crate::layout;

/// Default quiet period before a resize burst settles.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(150);

/// Collapses bursts of notifications into one deferred action.
///
/// Each `notify` cancels the previously pending action and schedules the new
/// one to run after the quiet period. `cancel` disarms without running;
/// cancelling an already-fired or never-armed debouncer is a no-op.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// The configured quiet period.
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Schedule `action` to run once the quiet period elapses with no further
    /// notifications. Supersedes any pending action.
    pub fn notify<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let quiet = self.quiet;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            action.await;
        }));
    }

    /// Disarm the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The debounced rebuild sequence: stop the loop, reset the scroll, re-run
/// setup against the new viewport, and restart on success.
///
/// On setup failure the widget goes inert; a later resize that yields valid
/// elements recovers it.
pub(crate) async fn rebuild(shared: Shared, viewport: Size) {
    let mut guard = shared.lock().await;
    let inner = &mut *guard;
    if inner.phase == Phase::Disposed {
        return;
    }

    // Stop the loop first so the tick task and this path never both write.
    if let Some(mut handle) = inner.animation.take() {
        handle.stop();
    }

    // Reset the scroll and clear the transform before rebuilding.
    if let Some(state) = inner.state.as_mut() {
        state.position = 0.0;
        if let Some(track) = inner.dom.get_mut(state.track) {
            track.style.clear_transform();
        }
    }

    inner.setups += 1;
    match layout::setup(&mut inner.dom, &inner.config, viewport) {
        Ok(state) => {
            inner.state = Some(state);
            inner.phase = Phase::Running;
            if inner.autoplay {
                inner.animation = Some(animate::start(shared.clone(), inner.fps));
            }
        }
        Err(err) => {
            error!(%err, "carousel rebuild failed; widget inert");
            inner.state = None;
            inner.phase = Phase::Inert;
        }
    }
}
