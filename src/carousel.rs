//! The carousel widget: lifecycle, shared state, resize wiring.
//!
//! [`Carousel`] owns the document arena and the runtime state behind a single
//! tokio mutex, so the tick task and the resize path are the only writers and
//! never run concurrently: the resize path always stops the loop before
//! rebuilding.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{error, warn};

use crate::animate::{self, AnimationHandle};
use crate::config::CarouselConfig;
use crate::dom::Dom;
use crate::geometry::Size;
use crate::layout::{self, CarouselState, SetupError};
use crate::resize::{self, Debouncer};

/// Default frame rate of the scroll loop.
pub const DEFAULT_FPS: u32 = 60;

/// Widget lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but never set up.
    Uninitialized,
    /// Layout built, loop running (or ready to run with autoplay off).
    Running,
    /// Last setup failed; recoverable by a later successful resize.
    Inert,
    /// Explicitly disposed. Terminal.
    Disposed,
}

/// Shared mutable widget state. One writer at a time by construction.
pub(crate) struct Inner {
    pub(crate) dom: Dom,
    pub(crate) config: CarouselConfig,
    pub(crate) state: Option<CarouselState>,
    pub(crate) phase: Phase,
    pub(crate) animation: Option<AnimationHandle>,
    pub(crate) fps: u32,
    pub(crate) autoplay: bool,
    /// Count of setup attempts, for diagnostics and tests.
    pub(crate) setups: u64,
}

pub(crate) type Shared = Arc<Mutex<Inner>>;

/// A vertically auto-scrolling carousel bound to a headless document.
pub struct Carousel {
    shared: Shared,
    debouncer: Debouncer,
}

impl Carousel {
    /// Create a widget over the given document and configuration.
    ///
    /// Nothing happens until [`init`](Self::init) runs.
    pub fn new(dom: Dom, config: CarouselConfig) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Inner {
                dom,
                config,
                state: None,
                phase: Phase::Uninitialized,
                animation: None,
                fps: DEFAULT_FPS,
                autoplay: true,
                setups: 0,
            })),
            debouncer: Debouncer::default(),
        }
    }

    /// Set the frame rate of the scroll loop (builder).
    pub fn with_fps(self, fps: u32) -> Self {
        // Builders run before the shared handle is cloned out, so the lock
        // is always free here.
        self.shared
            .try_lock()
            .expect("builder must run before the state is shared")
            .fps = fps;
        self
    }

    /// Disable the spawned frame loop (builder). The widget still builds its
    /// layout and tracks its phase; frames advance only via [`tick`](Self::tick).
    /// Intended for headless testing.
    pub fn with_autoplay(self, autoplay: bool) -> Self {
        self.shared
            .try_lock()
            .expect("builder must run before the state is shared")
            .autoplay = autoplay;
        self
    }

    /// Override the resize quiet period (builder).
    pub fn with_quiet_period(mut self, quiet: Duration) -> Self {
        self.debouncer = Debouncer::new(quiet);
        self
    }

    /// Build the layout for the given viewport and start the scroll loop.
    ///
    /// On failure the widget is left inert and the error is also reported at
    /// log level, matching the setup failure contract: no animation token is
    /// created and the hosting application is unaffected.
    pub async fn init(&self, viewport: Size) -> Result<(), SetupError> {
        let mut guard = self.shared.lock().await;
        let inner = &mut *guard;
        if inner.phase == Phase::Disposed {
            warn!("init called on a disposed carousel");
            return Ok(());
        }

        inner.setups += 1;
        match layout::setup(&mut inner.dom, &inner.config, viewport) {
            Ok(state) => {
                inner.state = Some(state);
                inner.phase = Phase::Running;
                if inner.autoplay {
                    inner.animation = Some(animate::start(self.shared.clone(), inner.fps));
                }
                Ok(())
            }
            Err(err) => {
                error!(%err, "carousel setup failed; widget inert");
                inner.state = None;
                inner.phase = Phase::Inert;
                Err(err)
            }
        }
    }

    /// Report a viewport resize.
    ///
    /// Bursts are debounced: only after the quiet period does the widget stop
    /// the loop, rebuild from the original configuration against the new
    /// viewport, and restart.
    pub fn handle_resize(&mut self, viewport: Size) {
        let shared = self.shared.clone();
        self.debouncer.notify(resize::rebuild(shared, viewport));
    }

    /// Advance one animation frame manually.
    ///
    /// The spawned loop performs exactly this per frame; exposing it keeps
    /// frame-by-frame behavior deterministic in tests and headless hosts.
    pub async fn tick(&self) {
        let mut guard = self.shared.lock().await;
        animate::tick(&mut guard);
    }

    /// Stop the loop and disarm any pending resize. Terminal.
    pub async fn dispose(&mut self) {
        self.debouncer.cancel();
        let mut guard = self.shared.lock().await;
        if let Some(mut handle) = guard.animation.take() {
            handle.stop();
        }
        guard.phase = Phase::Disposed;
    }

    /// Current lifecycle phase.
    pub async fn phase(&self) -> Phase {
        self.shared.lock().await.phase
    }

    /// Whether the widget is in the running phase.
    pub async fn is_running(&self) -> bool {
        self.phase().await == Phase::Running
    }

    /// Whether a live animation loop is attached.
    pub async fn has_animation(&self) -> bool {
        self.shared.lock().await.animation.is_some()
    }

    /// Current scroll position, if a layout has been built.
    pub async fn position(&self) -> Option<f64> {
        self.shared.lock().await.state.as_ref().map(|s| s.position)
    }

    /// Number of setup attempts so far.
    pub async fn setup_count(&self) -> u64 {
        self.shared.lock().await.setups
    }

    /// Run a closure against the document and current state.
    ///
    /// This is the read surface for renderers: lock once, inspect, release.
    pub async fn inspect<R>(&self, f: impl FnOnce(&Dom, Option<&CarouselState>) -> R) -> R {
        let guard = self.shared.lock().await;
        f(&guard.dom, guard.state.as_ref())
    }

    /// Run a closure against the document mutably.
    ///
    /// Hosts use this to change the document after construction, e.g. to add
    /// the missing elements an inert widget needs before the next resize.
    /// Layout-affecting changes take effect on the next setup.
    pub async fn update_dom<R>(&self, f: impl FnOnce(&mut Dom) -> R) -> R {
        let mut guard = self.shared.lock().await;
        f(&mut guard.dom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeData;
    use crate::testing::fixture_dom;

    fn headless(items: usize) -> Carousel {
        Carousel::new(fixture_dom(items), CarouselConfig::default()).with_autoplay(false)
    }

    // ── init ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn init_success_runs() {
        let carousel = headless(3);
        assert_eq!(carousel.phase().await, Phase::Uninitialized);
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert!(carousel.is_running().await);
        assert_eq!(carousel.position().await, Some(0.0));
    }

    #[tokio::test]
    async fn init_missing_track_goes_inert() {
        let mut dom = Dom::new();
        dom.insert(NodeData::new("Wrapper").with_class("carousel-wrapper"));
        let carousel = Carousel::new(dom, CarouselConfig::default()).with_autoplay(false);

        let result = carousel.init(Size::new(80, 24)).await;
        assert!(result.is_err());
        assert_eq!(carousel.phase().await, Phase::Inert);
        // No animation token on failure.
        assert!(!carousel.has_animation().await);
    }

    #[tokio::test]
    async fn init_with_autoplay_attaches_loop() {
        let carousel = Carousel::new(fixture_dom(3), CarouselConfig::default());
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert!(carousel.has_animation().await);
    }

    #[tokio::test]
    async fn builder_settings_are_applied() {
        let carousel = Carousel::new(fixture_dom(3), CarouselConfig::default())
            .with_fps(30)
            .with_autoplay(false);
        carousel.init(Size::new(80, 24)).await.unwrap();
        // Autoplay off took effect: the layout built but no loop spawned.
        assert!(carousel.is_running().await);
        assert!(!carousel.has_animation().await);
    }

    // ── tick ─────────────────────────────────────────────────────────

    #[tokio::test]
    async fn tick_advances_position() {
        let carousel = headless(3);
        carousel.init(Size::new(80, 24)).await.unwrap();
        // Height 24 resolves the catch-all tier: speed 1.0.
        carousel.tick().await;
        assert_eq!(carousel.position().await, Some(-1.0));
        carousel.tick().await;
        assert_eq!(carousel.position().await, Some(-2.0));
    }

    #[tokio::test]
    async fn tick_writes_track_transform() {
        let carousel = headless(3);
        carousel.init(Size::new(80, 24)).await.unwrap();
        carousel.tick().await;
        let translate = carousel
            .inspect(|dom, state| {
                let state = state.unwrap();
                dom.get(state.track).unwrap().style.translate_y
            })
            .await;
        assert_eq!(translate, Some(-1.0));
    }

    #[tokio::test]
    async fn tick_wraps_at_half_track() {
        let carousel = headless(3);
        carousel.init(Size::new(80, 24)).await.unwrap();
        // item_height_px = 24 (catch-all tier shows 1 item), half = 72,
        // speed 1.0: the 72nd tick lands exactly on the half point.
        for _ in 0..72 {
            carousel.tick().await;
        }
        assert_eq!(carousel.position().await, Some(0.0));
    }

    #[tokio::test]
    async fn tick_before_init_is_noop() {
        let carousel = headless(3);
        carousel.tick().await;
        assert_eq!(carousel.position().await, None);
    }

    // ── dispose ──────────────────────────────────────────────────────

    #[tokio::test]
    async fn dispose_is_terminal() {
        let mut carousel = headless(3);
        carousel.init(Size::new(80, 24)).await.unwrap();
        carousel.dispose().await;
        assert_eq!(carousel.phase().await, Phase::Disposed);
        assert!(!carousel.has_animation().await);

        // init after dispose is ignored.
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert_eq!(carousel.phase().await, Phase::Disposed);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_disarms_pending_resize() {
        let mut carousel = headless(3);
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert_eq!(carousel.setup_count().await, 1);

        // Arm a resize, then dispose before the quiet period elapses.
        carousel.handle_resize(Size::new(80, 720));
        carousel.dispose().await;

        // The disarmed rebuild never fires, even well past the quiet period.
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(carousel.setup_count().await, 1);
        assert_eq!(carousel.phase().await, Phase::Disposed);
    }

    #[tokio::test]
    async fn dispose_stops_running_loop() {
        let mut carousel = Carousel::new(fixture_dom(3), CarouselConfig::default());
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert!(carousel.has_animation().await);
        carousel.dispose().await;
        assert!(!carousel.has_animation().await);
    }

    // ── setup_count ──────────────────────────────────────────────────

    #[tokio::test]
    async fn setup_count_tracks_attempts() {
        let carousel = headless(3);
        assert_eq!(carousel.setup_count().await, 0);
        carousel.init(Size::new(80, 24)).await.unwrap();
        assert_eq!(carousel.setup_count().await, 1);
    }
}
