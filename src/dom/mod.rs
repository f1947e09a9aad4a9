//! Headless document arena: nodes, tree operations, selector queries.

pub mod node;
pub mod query;
pub mod tree;

pub use node::{InlineStyle, NodeData, NodeId};
pub use query::Selector;
pub use tree::Dom;
