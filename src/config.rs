use std::{path::Path, time::Duration};

use crate::{
    animation::ease::Ease,
    foundation::{
        core::Argb,
        error::{StarError, StarResult},
    },
    paint::{color::ColorDef, plan::StyleConfig},
};

/// Declarative widget configuration, usually loaded from JSON.
///
/// Every field is optional in the serialized form. Values are clamped when applied to a
/// [`crate::StarRating`], not when parsed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarConfig {
    /// Number of stars (at least 1).
    pub star_count: usize,
    /// Initial rating.
    pub rating: f64,
    /// Whether taps change the rating.
    pub selectable: bool,
    /// Side of each star's square bounding box.
    pub star_size: f64,
    /// Gap between neighbouring stars.
    pub star_spacing: f64,
    /// Outline stroke width.
    pub stroke_width: f64,
    /// Inner radius as a fraction of the outer radius.
    pub inner_radius_scale: f64,
    /// Color of unselected stars.
    pub base_color: ColorDef,
    /// Color of selected stars.
    pub selected_color: ColorDef,
    /// Padding added around the row when measuring the preferred size.
    pub padding: f64,
    /// Rating animation length in milliseconds.
    pub animation_ms: u64,
    /// Easing applied to animation progress.
    pub ease: Ease,
}

impl Default for StarConfig {
    fn default() -> Self {
        let style = StyleConfig::default();
        Self {
            star_count: 5,
            rating: 0.0,
            selectable: style.selectable,
            star_size: 32.0,
            star_spacing: 8.0,
            stroke_width: style.stroke_width,
            inner_radius_scale: style.inner_radius_scale,
            base_color: ColorDef(style.base_color),
            selected_color: ColorDef(style.selected_color),
            padding: 4.0,
            animation_ms: 300,
            ease: Ease::default(),
        }
    }
}

impl StarConfig {
    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> StarResult<Self> {
        serde_json::from_str(s).map_err(|e| StarError::config(format!("parse config JSON: {e}")))
    }

    /// Read and parse a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> StarResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StarError::config(format!("read config '{}': {e}", path.display())))?;
        let cfg = Self::from_json_str(&text)?;
        tracing::debug!(path = %path.display(), star_count = cfg.star_count, "loaded star config");
        Ok(cfg)
    }

    /// Styling part of the config, normalized.
    pub fn style(&self) -> StyleConfig {
        StyleConfig {
            selectable: self.selectable,
            base_color: Argb::from(self.base_color),
            selected_color: Argb::from(self.selected_color),
            stroke_width: self.stroke_width,
            inner_radius_scale: self.inner_radius_scale,
        }
        .normalized()
    }

    /// Animation length.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
