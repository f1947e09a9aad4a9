//! Loop-ready layout construction.
//!
//! `setup` binds the carousel to its track and wrapper nodes, sizes the items
//! proportionally to the configured visible count, and appends one marked
//! duplicate per item so the track is exactly twice the height of the
//! original content — the precondition the animation wraparound depends on.

use tracing::info;

use crate::config::{resolve_breakpoint, CarouselConfig};
use crate::dom::{Dom, NodeId, Selector};
use crate::geometry::Size;

/// Error binding the carousel to its document.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The track or wrapper selector matched nothing. The widget stays inert;
    /// a later resize-triggered setup may recover.
    #[error("required element not found: {selector}")]
    MissingElement { selector: String },
}

/// The carousel's mutable runtime state, rebuilt by every `setup`.
#[derive(Debug)]
pub struct CarouselState {
    /// The scrolling track node. The widget only reads and writes its style.
    pub track: NodeId,
    /// The viewport-clipping wrapper node.
    pub wrapper: NodeId,
    /// Original item nodes, snapshot at setup, document order.
    pub items: Vec<NodeId>,
    /// Marked duplicates appended after the originals.
    pub clones: Vec<NodeId>,
    /// Current vertical offset in rows. Zero or negative.
    pub position: f64,
    /// Rows advanced per animation tick.
    pub speed: f64,
    /// Height of one item in rows, derived from the effective config.
    pub item_height_px: f64,
    /// Viewport size the layout was built for.
    pub viewport: Size,
}

impl CarouselState {
    /// Total height of the doubled track in rows.
    pub fn track_height(&self) -> f64 {
        (self.items.len() + self.clones.len()) as f64 * self.item_height_px
    }

    /// The wraparound threshold: half the doubled track, which is exactly the
    /// height of the original, undoubled content.
    pub fn half_track(&self) -> f64 {
        self.track_height() / 2.0
    }
}

/// Build the loop-ready layout for the given configuration and viewport.
///
/// Steps, in order: resolve track and wrapper; resolve the effective
/// configuration for the viewport height; remove any clones a previous setup
/// left behind; snapshot the track's original items; size the originals to
/// `100 / items_to_show` vh; duplicate each original in order, mark it, and
/// append it after all originals. Repeated calls never accumulate clones.
///
/// On success a diagnostic is emitted with the viewport height, resolved item
/// count, and resolved speed.
pub fn setup(
    dom: &mut Dom,
    config: &CarouselConfig,
    viewport: Size,
) -> Result<CarouselState, SetupError> {
    let track = dom
        .query_selector(&Selector::parse(&config.track_selector))
        .ok_or_else(|| SetupError::MissingElement {
            selector: config.track_selector.clone(),
        })?;
    let wrapper = dom
        .query_selector(&Selector::parse(&config.wrapper_selector))
        .ok_or_else(|| SetupError::MissingElement {
            selector: config.wrapper_selector.clone(),
        })?;

    let effective = resolve_breakpoint(config, viewport.height as u32);

    // Clear clones from any previous setup before snapshotting, so the item
    // snapshot only ever holds originals.
    let stale: Vec<NodeId> = dom
        .children(track)
        .iter()
        .copied()
        .filter(|&child| dom.get(child).is_some_and(|d| d.clone_marker))
        .collect();
    for clone in stale {
        dom.remove(clone);
    }

    let items: Vec<NodeId> = dom.children(track).to_vec();

    let item_height_vh = 100.0 / effective.items_to_show as f64;
    let item_height_px = viewport.height as f64 * item_height_vh / 100.0;

    for &item in &items {
        if let Some(data) = dom.get_mut(item) {
            data.style.height_vh = Some(item_height_vh);
        }
    }

    let mut clones = Vec::with_capacity(items.len());
    for &item in &items {
        if let Some(dup) = dom.clone_subtree(item) {
            if let Some(data) = dom.get_mut(dup) {
                data.mark_clone();
                data.style.height_vh = Some(item_height_vh);
            }
            dom.append_child(track, dup);
            clones.push(dup);
        }
    }

    info!(
        viewport_height = viewport.height,
        items_to_show = effective.items_to_show,
        speed = effective.speed,
        "carousel layout built"
    );

    Ok(CarouselState {
        track,
        wrapper,
        items,
        clones,
        position: 0.0,
        speed: effective.speed,
        item_height_px,
        viewport,
    })
}
