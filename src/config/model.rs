//! Typed configuration model and defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::merge::deep_merge;

/// Error building a configuration from user overrides.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The merged configuration did not deserialize into the typed model.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Partial settings overriding the defaults for one breakpoint tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_to_show: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

/// One responsive tier: active when the viewport height is at or above
/// `breakpoint` rows and no earlier tier matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub breakpoint: u32,
    #[serde(default)]
    pub settings: BreakpointSettings,
}

/// Carousel configuration, deep-merged over [`CarouselConfig::default`].
///
/// `responsive` tiers are evaluated in list order and the first tier whose
/// `breakpoint` is at or below the viewport height wins. The list is expected
/// to be sorted by descending breakpoint with a terminal `breakpoint: 0`
/// catch-all, but this is not validated: an unsorted list still resolves
/// first-match-wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Selector for the scrollable track element.
    pub track_selector: String,
    /// Selector for the viewport-clipping wrapper element.
    pub wrapper_selector: String,
    /// Default visible item count.
    pub items_to_show: u32,
    /// Default scroll increment in rows per animation tick.
    pub speed: f64,
    /// Ordered breakpoint override list.
    pub responsive: Vec<Breakpoint>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track_selector: "#carousel-track".into(),
            wrapper_selector: ".carousel-wrapper".into(),
            items_to_show: 3,
            speed: 0.5,
            responsive: vec![
                Breakpoint {
                    breakpoint: 900,
                    settings: BreakpointSettings {
                        items_to_show: Some(4),
                        speed: Some(0.5),
                    },
                },
                Breakpoint {
                    breakpoint: 700,
                    settings: BreakpointSettings {
                        items_to_show: Some(3),
                        speed: Some(0.6),
                    },
                },
                Breakpoint {
                    breakpoint: 500,
                    settings: BreakpointSettings {
                        items_to_show: Some(2),
                        speed: Some(0.8),
                    },
                },
                Breakpoint {
                    breakpoint: 0,
                    settings: BreakpointSettings {
                        items_to_show: Some(1),
                        speed: Some(1.0),
                    },
                },
            ],
        }
    }
}

impl CarouselConfig {
    /// Build a configuration by deep-merging a JSON overlay over the defaults.
    ///
    /// All fields are optional in the overlay; unknown keys are tolerated and
    /// discarded at deserialization. Fails only if a recognized field has the
    /// wrong shape after the merge.
    pub fn from_overrides(overrides: Value) -> Result<Self, ConfigError> {
        let mut merged = serde_json::to_value(CarouselConfig::default())?;
        deep_merge(&mut merged, overrides);
        Ok(serde_json::from_value(merged)?)
    }
}
