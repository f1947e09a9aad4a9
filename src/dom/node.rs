//! Node types: NodeId, NodeData, inline styles.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for a document node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// Inline style written onto a node by the carousel.
///
/// This is the widget's entire style surface: a proportional height on the
/// items and a vertical translation on the track. Anything else is the host
/// application's business.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InlineStyle {
    /// Height as a percentage of the viewport height (`vh` units).
    pub height_vh: Option<f64>,
    /// Vertical translation in rows. Zero or negative while scrolling.
    pub translate_y: Option<f64>,
}

impl InlineStyle {
    /// Remove the translation, as if the transform were never set.
    pub fn clear_transform(&mut self) {
        self.translate_y = None;
    }
}

/// Data associated with a single document node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Node type name (e.g. "Track", "Item").
    pub node_type: String,
    /// Optional unique id (`#id` selector).
    pub id: Option<String>,
    /// Classes (`.class` selector).
    pub classes: Vec<String>,
    /// Text content painted by the render driver.
    pub text: Option<String>,
    /// Set on duplicated items so re-setup can find and remove them.
    pub clone_marker: bool,
    /// Inline style written by the carousel.
    pub style: InlineStyle,
}

impl NodeData {
    /// Create a new `NodeData` with the given node type and empty everything else.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            id: None,
            classes: Vec::new(),
            text: None,
            clone_marker: false,
            style: InlineStyle::default(),
        }
    }

    /// Set the id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a single class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Check whether this node has a given class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Mark this node as a carousel clone.
    pub fn mark_clone(&mut self) {
        self.clone_marker = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_defaults() {
        let data = NodeData::new("Item");
        assert_eq!(data.node_type, "Item");
        assert!(data.id.is_none());
        assert!(data.classes.is_empty());
        assert!(data.text.is_none());
        assert!(!data.clone_marker);
        assert_eq!(data.style, InlineStyle::default());
    }

    #[test]
    fn builder_with_id() {
        let data = NodeData::new("Track").with_id("carousel-track");
        assert_eq!(data.id.as_deref(), Some("carousel-track"));
    }

    #[test]
    fn builder_with_class_dedup() {
        let data = NodeData::new("Item").with_class("item").with_class("item");
        assert_eq!(data.classes, vec!["item"]);
    }

    #[test]
    fn builder_with_text() {
        let data = NodeData::new("Item").with_text("Hero A");
        assert_eq!(data.text.as_deref(), Some("Hero A"));
    }

    #[test]
    fn has_class() {
        let data = NodeData::new("X").with_class("active");
        assert!(data.has_class("active"));
        assert!(!data.has_class("inactive"));
    }

    #[test]
    fn mark_clone() {
        let mut data = NodeData::new("Item");
        data.mark_clone();
        assert!(data.clone_marker);
    }

    #[test]
    fn clear_transform() {
        let mut style = InlineStyle {
            height_vh: Some(25.0),
            translate_y: Some(-3.5),
        };
        style.clear_transform();
        assert_eq!(style.translate_y, None);
        // Height is untouched.
        assert_eq!(style.height_vh, Some(25.0));
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
