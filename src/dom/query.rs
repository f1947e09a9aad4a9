//! Selector parsing and document queries.
//!
//! Selectors are deliberately small: `#id`, `.class`, or a bare node type
//! name. That is the entire grammar the carousel configuration needs to
//! address its track and wrapper elements.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

/// A parsed simple selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#some-id`
    Id(String),
    /// `.some-class`
    Class(String),
    /// Bare node type name, e.g. `Track`.
    Type(String),
}

impl Selector {
    /// Parse a selector string.
    ///
    /// `#x` becomes an id selector, `.y` a class selector, and anything else
    /// a type selector. Parsing never fails; an empty string is a type
    /// selector that matches nothing.
    pub fn parse(s: &str) -> Selector {
        let s = s.trim();
        if let Some(id) = s.strip_prefix('#') {
            Selector::Id(id.to_owned())
        } else if let Some(class) = s.strip_prefix('.') {
            Selector::Class(class.to_owned())
        } else {
            Selector::Type(s.to_owned())
        }
    }

    /// Whether this selector matches the given node data.
    pub fn matches(&self, data: &NodeData) -> bool {
        match self {
            Selector::Id(id) => data.id.as_deref() == Some(id),
            Selector::Class(class) => data.has_class(class),
            Selector::Type(ty) => data.node_type == *ty,
        }
    }
}

impl Dom {
    /// Find the first node matching the selector, in document order.
    ///
    /// Document order is a depth-first walk from the root, so the first match
    /// is stable across removals and slot reuse. Nodes detached from the root
    /// are not visited.
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.iter_tree()
            .find(|&id| self.nodes.get(id).is_some_and(|data| selector.matches(data)))
    }

    /// Find all nodes matching the selector, in document order.
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.iter_tree()
            .filter(|&id| self.nodes.get(id).is_some_and(|data| selector.matches(data)))
            .collect()
    }

    /// Find all nodes matching an arbitrary predicate, in document order.
    pub fn query_all(&self, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.iter_tree()
            .filter(|&id| self.nodes.get(id).is_some_and(|data| predicate(data)))
            .collect()
    }

    /// Depth-first walk from the root: each node before its children, each
    /// subtree fully before the next sibling.
    fn iter_tree(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.root().into_iter().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
            Some(id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_query_tree() -> Dom {
        let mut dom = Dom::new();
        let wrapper = dom.insert(NodeData::new("Wrapper").with_class("carousel-wrapper"));
        let track = dom.insert_child(wrapper, NodeData::new("Track").with_id("carousel-track"));
        let _a = dom.insert_child(track, NodeData::new("Item").with_class("item"));
        let _b = dom.insert_child(track, NodeData::new("Item").with_class("item"));
        dom
    }

    // ── Selector parsing ─────────────────────────────────────────────

    #[test]
    fn parse_id_selector() {
        assert_eq!(
            Selector::parse("#carousel-track"),
            Selector::Id("carousel-track".into())
        );
    }

    #[test]
    fn parse_class_selector() {
        assert_eq!(
            Selector::parse(".carousel-wrapper"),
            Selector::Class("carousel-wrapper".into())
        );
    }

    #[test]
    fn parse_type_selector() {
        assert_eq!(Selector::parse("Item"), Selector::Type("Item".into()));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(Selector::parse("  #t  "), Selector::Id("t".into()));
    }

    // ── Matching ─────────────────────────────────────────────────────

    #[test]
    fn id_selector_matches() {
        let data = NodeData::new("Track").with_id("t");
        assert!(Selector::Id("t".into()).matches(&data));
        assert!(!Selector::Id("other".into()).matches(&data));
    }

    #[test]
    fn class_selector_matches() {
        let data = NodeData::new("Wrapper").with_class("w");
        assert!(Selector::Class("w".into()).matches(&data));
        assert!(!Selector::Class("x".into()).matches(&data));
    }

    #[test]
    fn type_selector_matches() {
        let data = NodeData::new("Item");
        assert!(Selector::Type("Item".into()).matches(&data));
        assert!(!Selector::Type("Track".into()).matches(&data));
    }

    // ── Queries ──────────────────────────────────────────────────────

    #[test]
    fn query_selector_by_id() {
        let dom = build_query_tree();
        let track = dom.query_selector(&Selector::parse("#carousel-track"));
        assert!(track.is_some());
        assert_eq!(dom.get(track.unwrap()).unwrap().node_type, "Track");
    }

    #[test]
    fn query_selector_by_class() {
        let dom = build_query_tree();
        let wrapper = dom.query_selector(&Selector::parse(".carousel-wrapper"));
        assert!(wrapper.is_some());
    }

    #[test]
    fn query_selector_not_found() {
        let dom = build_query_tree();
        assert!(dom.query_selector(&Selector::parse("#nonexistent")).is_none());
    }

    #[test]
    fn query_selector_all() {
        let dom = build_query_tree();
        let items = dom.query_selector_all(&Selector::parse(".item"));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn query_all_custom_predicate() {
        let mut dom = build_query_tree();
        let track = dom.query_selector(&Selector::parse("#carousel-track")).unwrap();
        let items = dom.children(track).to_vec();
        dom.get_mut(items[0]).unwrap().mark_clone();

        let clones = dom.query_all(|data| data.clone_marker);
        assert_eq!(clones.len(), 1);
    }

    #[test]
    fn query_all_returns_document_order() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        let first = dom.insert_child(root, NodeData::new("Item").with_class("n"));
        let nested = dom.insert_child(first, NodeData::new("Item").with_class("n"));
        let second = dom.insert_child(root, NodeData::new("Item").with_class("n"));

        // Depth-first: the first subtree in full, then the next sibling.
        let found = dom.query_selector_all(&Selector::parse(".n"));
        assert_eq!(found, vec![first, nested, second]);
    }

    #[test]
    fn first_match_stable_across_slot_reuse() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        let a = dom.insert_child(root, NodeData::new("Item").with_class("pick"));
        let b = dom.insert_child(root, NodeData::new("Item").with_class("pick"));

        // Removing an earlier node and appending a new one may reuse its
        // arena slot; document order must still put the survivor first.
        dom.remove(a);
        let c = dom.insert_child(root, NodeData::new("Item").with_class("pick"));

        assert_eq!(dom.query_selector(&Selector::parse(".pick")), Some(b));
        assert_eq!(dom.query_selector_all(&Selector::parse(".pick")), vec![b, c]);
    }

    #[test]
    fn detached_nodes_are_not_matched() {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("Root"));
        let attached = dom.insert_child(root, NodeData::new("Item").with_class("x"));
        // A second root-level insert is not reachable from the root.
        let _floating = dom.insert(NodeData::new("Item").with_class("x"));

        assert_eq!(dom.query_selector_all(&Selector::parse(".x")), vec![attached]);
    }

    #[test]
    fn query_on_empty_dom() {
        let dom = Dom::new();
        assert!(dom.query_selector(&Selector::parse("#x")).is_none());
        assert!(dom.query_selector_all(&Selector::parse(".x")).is_empty());
        assert!(dom.query_all(|_| true).is_empty());
    }
}
