//! The continuous scroll loop.
//!
//! The per-tick arithmetic lives in [`advance`], a pure function, so the
//! wraparound behavior is testable without a runtime. [`start`] wraps it in a
//! frame-synchronized tokio task whose cancellation token is an explicit
//! [`AnimationHandle`].

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::carousel::{Inner, Shared};

/// Advance the scroll position by one tick.
///
/// Decrements by `speed`, then resets to zero once the offset reaches half
/// the doubled track. The half point is exactly the height of the original,
/// undoubled content, so the reset is visually indistinguishable from
/// scrolling past it.
pub fn advance(position: f64, speed: f64, half_track: f64) -> f64 {
    let next = position - speed;
    if next.abs() >= half_track {
        0.0
    } else {
        next
    }
}

/// Apply one animation tick to the widget: advance the position and write the
/// new vertical translation onto the track node.
///
/// No-op while the widget has no built layout.
pub(crate) fn tick(inner: &mut Inner) {
    if let Some(state) = inner.state.as_mut() {
        let half = state.half_track();
        state.position = advance(state.position, state.speed, half);
        if let Some(track) = inner.dom.get_mut(state.track) {
            track.style.translate_y = Some(state.position);
        }
    }
}

/// Cancellation token for a running animation loop.
///
/// `stop` is idempotent: stopping an already-stopped handle is a no-op.
/// Dropping the handle also stops the loop.
#[derive(Debug)]
pub struct AnimationHandle {
    task: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    /// Cancel the loop. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether the handle has already been stopped.
    pub fn is_stopped(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn the frame loop at the given rate and return its handle.
///
/// Each tick locks the shared widget state, advances it, and releases the
/// lock before sleeping until the next frame. Frames missed under load are
/// skipped rather than burst.
pub(crate) fn start(shared: Shared, fps: u32) -> AnimationHandle {
    let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
    let task = tokio::spawn(async move {
        let mut frames = tokio::time::interval(period);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            frames.tick().await;
            let mut guard = shared.lock().await;
            tick(&mut guard);
        }
    });
    AnimationHandle { task: Some(task) }
}
