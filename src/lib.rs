//! # marquee-tui
//!
//! A breakpoint-responsive, seamlessly looping vertical carousel widget for
//! the terminal.
//!
//! The widget auto-scrolls a track of items inside a fixed-height viewport.
//! How many items are visible and how fast they scroll is resolved from the
//! viewport height against an ordered list of breakpoint tiers; the loop is
//! made seamless by duplicating the items once and resetting the scroll at
//! the midpoint of the doubled track. Resizes are debounced and trigger a
//! full stop / rebuild / restart.
//!
//! ## Core Systems
//!
//! - **[`config`]** — typed configuration, JSON deep merge of user overrides,
//!   breakpoint-tier resolution
//! - **[`dom`]** — slotmap-backed headless document with selector queries and
//!   subtree cloning
//! - **[`layout`]** — loop-ready layout: item snapshot, proportional sizing,
//!   marked duplicates
//! - **[`animate`]** — per-tick wraparound arithmetic and the cancellable
//!   frame loop
//! - **[`resize`]** — debouncer and the stop / rebuild / restart sequence
//! - **[`carousel`]** — the widget façade tying everything together
//! - **[`event`]** — crossterm host-event bridge (resize, quit)
//! - **[`render`]** — row windowing and the crossterm terminal driver
//! - **[`testing`]** — fixtures and the headless Pilot

// Foundation
pub mod geometry;

// Core systems
pub mod config;
pub mod dom;
pub mod layout;

// Animation and resize coordination
pub mod animate;
pub mod resize;

// Widget
pub mod carousel;

// Host integration
pub mod event;
pub mod render;

// Test support
pub mod testing;

pub use carousel::{Carousel, Phase};
pub use config::CarouselConfig;
pub use geometry::Size;
