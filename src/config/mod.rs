//! Carousel configuration: deep merge of user overrides, breakpoint resolution.

pub mod merge;
pub mod model;
pub mod resolve;

pub use merge::deep_merge;
pub use model::{Breakpoint, BreakpointSettings, CarouselConfig, ConfigError};
pub use resolve::{resolve_breakpoint, EffectiveConfig};
