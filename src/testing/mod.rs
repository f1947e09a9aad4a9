//! Testing utilities: document fixtures and the headless Pilot.

pub mod pilot;

pub use pilot::Pilot;

use crate::dom::{Dom, NodeData};

/// Build the standard carousel document: a wrapper clipping a track whose
/// children are `items` text items, matching the default selectors.
pub fn fixture_dom(items: usize) -> Dom {
    let mut dom = Dom::new();
    let wrapper = dom.insert(NodeData::new("Wrapper").with_class("carousel-wrapper"));
    let track = dom.insert_child(wrapper, NodeData::new("Track").with_id("carousel-track"));
    for i in 0..items {
        dom.insert_child(
            track,
            NodeData::new("Item")
                .with_class("item")
                .with_text(format!("item {i}")),
        );
    }
    dom
}
