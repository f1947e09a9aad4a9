//! Pilot: programmatic interaction with a headless carousel.
//!
//! The Pilot wraps a [`Carousel`] with autoplay disabled and provides methods
//! to simulate frames and resizes deterministically. In a real host the frame
//! loop runs on a timer; for headless testing each frame advances only via
//! [`run_ticks`](Pilot::run_ticks), and resize settling is driven by paused
//! tokio time.

use std::time::Duration;

use crate::carousel::{Carousel, Phase};
use crate::config::CarouselConfig;
use crate::geometry::Size;
use crate::render::visible_lines;

/// A headless carousel driver for tests.
///
/// # Examples
///
/// ```ignore
/// use marquee_tui::testing::Pilot;
/// use marquee_tui::geometry::Size;
///
/// let mut pilot = Pilot::new(3, Size::new(80, 24));
/// pilot.init().await.unwrap();
/// pilot.run_ticks(5).await;
/// assert!(pilot.position().await.unwrap() < 0.0);
/// ```
pub struct Pilot {
    carousel: Carousel,
    viewport: Size,
    quiet: Duration,
}

impl Pilot {
    /// Create a pilot over the standard fixture document with the default
    /// configuration.
    pub fn new(items: usize, viewport: Size) -> Self {
        Self::with_config(items, viewport, CarouselConfig::default())
    }

    /// Create a pilot with an explicit configuration.
    pub fn with_config(items: usize, viewport: Size, config: CarouselConfig) -> Self {
        let quiet = Duration::from_millis(150);
        let carousel = Carousel::new(super::fixture_dom(items), config)
            .with_autoplay(false)
            .with_quiet_period(quiet);
        Self {
            carousel,
            viewport,
            quiet,
        }
    }

    /// Build the initial layout for the pilot's viewport.
    pub async fn init(&self) -> Result<(), crate::layout::SetupError> {
        self.carousel.init(self.viewport).await
    }

    /// Simulate a viewport resize (debounced like the real thing).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Size::new(width, height);
        self.carousel.handle_resize(self.viewport);
    }

    /// Wait out the resize quiet period. Under `start_paused` tokio tests
    /// this is instantaneous.
    pub async fn settle(&self) {
        tokio::time::sleep(self.quiet * 2).await;
    }

    /// Advance `n` animation frames deterministically.
    pub async fn run_ticks(&self, n: usize) {
        for _ in 0..n {
            self.carousel.tick().await;
        }
    }

    /// Render the visible window to plain text, one line per row.
    ///
    /// Empty string if no layout has been built.
    pub async fn render_to_text(&self) -> String {
        self.carousel
            .inspect(|dom, state| match state {
                Some(state) => visible_lines(dom, state).join("\n"),
                None => String::new(),
            })
            .await
    }

    // ── Query ────────────────────────────────────────────────────────

    /// Current scroll position, if a layout exists.
    pub async fn position(&self) -> Option<f64> {
        self.carousel.position().await
    }

    /// Current lifecycle phase.
    pub async fn phase(&self) -> Phase {
        self.carousel.phase().await
    }

    /// Whether the widget is running.
    pub async fn is_running(&self) -> bool {
        self.carousel.is_running().await
    }

    /// Number of setup attempts so far.
    pub async fn setup_count(&self) -> u64 {
        self.carousel.setup_count().await
    }

    /// Borrow the underlying carousel immutably.
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Borrow the underlying carousel mutably.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pilot_init_and_tick() {
        let pilot = Pilot::new(3, Size::new(80, 24));
        pilot.init().await.unwrap();
        assert!(pilot.is_running().await);
        pilot.run_ticks(3).await;
        // Catch-all tier at height 24: speed 1.0.
        assert_eq!(pilot.position().await, Some(-3.0));
    }

    #[tokio::test]
    async fn pilot_render_shows_first_item() {
        let pilot = Pilot::new(3, Size::new(20, 24));
        pilot.init().await.unwrap();
        let text = pilot.render_to_text().await;
        assert!(text.starts_with("item 0"));
    }

    #[tokio::test]
    async fn pilot_render_before_init_is_empty() {
        let pilot = Pilot::new(3, Size::new(20, 24));
        assert_eq!(pilot.render_to_text().await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn pilot_resize_rebuilds_once() {
        let mut pilot = Pilot::new(3, Size::new(80, 24));
        pilot.init().await.unwrap();
        assert_eq!(pilot.setup_count().await, 1);

        for _ in 0..10 {
            pilot.resize(80, 30);
        }
        pilot.settle().await;
        assert_eq!(pilot.setup_count().await, 2);
        assert!(pilot.is_running().await);
    }

    #[tokio::test(start_paused = true)]
    async fn pilot_resize_resets_position() {
        let mut pilot = Pilot::new(3, Size::new(80, 24));
        pilot.init().await.unwrap();
        pilot.run_ticks(5).await;
        assert_eq!(pilot.position().await, Some(-5.0));

        pilot.resize(80, 30);
        pilot.settle().await;
        assert_eq!(pilot.position().await, Some(0.0));
    }
}
