//! Breakpoint resolution: pick the tier in force for a viewport height.

use super::model::CarouselConfig;

/// The configuration actually in force after breakpoint resolution.
///
/// `responsive` is never carried into the effective set.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub track_selector: String,
    pub wrapper_selector: String,
    pub items_to_show: u32,
    pub speed: f64,
}

/// Resolve the effective configuration for the given viewport height.
///
/// Iterates `config.responsive` in list order and applies the settings of the
/// first tier whose `breakpoint` is at or below `viewport_height`. Settings
/// the tier leaves unset fall back to the base values. If no tier matches
/// (reachable only without a `breakpoint: 0` catch-all), the base values pass
/// through unchanged. Pure function of its inputs.
pub fn resolve_breakpoint(config: &CarouselConfig, viewport_height: u32) -> EffectiveConfig {
    let mut effective = EffectiveConfig {
        track_selector: config.track_selector.clone(),
        wrapper_selector: config.wrapper_selector.clone(),
        items_to_show: config.items_to_show,
        speed: config.speed,
    };

    for tier in &config.responsive {
        if tier.breakpoint <= viewport_height {
            if let Some(items) = tier.settings.items_to_show {
                effective.items_to_show = items;
            }
            if let Some(speed) = tier.settings.speed {
                effective.speed = speed;
            }
            break;
        }
    }

    effective
}
