//! Game settings
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{LayoutParams, Rgb};

/// Settings could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Round ===
    /// Circles generated per round
    pub circle_count: usize,
    /// Radius shared by every circle
    pub circle_radius: f32,
    /// Height of the target strip at the bottom of the area
    pub target_band_height: f32,
    /// Rejection-sampling draws allowed per circle
    pub placement_attempts_per_circle: u32,

    // === Area ===
    /// Play area used until the host reports its size
    pub area_width: f32,
    pub area_height: f32,

    // === Look ===
    pub background: Rgb,
    /// Text shown once every circle has been dropped
    pub overlay_text: String,
    pub overlay_text_size: f32,
    /// Triangle fan segments per circle
    pub circle_segments: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_count: CIRCLE_COUNT,
            circle_radius: CIRCLE_RADIUS,
            target_band_height: TARGET_BAND_HEIGHT,
            placement_attempts_per_circle: PLACEMENT_ATTEMPTS_PER_CIRCLE,

            area_width: DEFAULT_AREA_WIDTH,
            area_height: DEFAULT_AREA_HEIGHT,

            background: Rgb::LIGHT_GRAY,
            overlay_text: GAME_OVER_TEXT.to_string(),
            overlay_text_size: GAME_OVER_TEXT_SIZE,
            circle_segments: CIRCLE_SEGMENTS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.circle_count > MAX_CIRCLE_COUNT {
            return Err(SettingsError::Invalid {
                field: "circle_count",
                reason: "too many circles for one round",
            });
        }
        if !(self.circle_radius > 0.0 && self.circle_radius.is_finite()) {
            return Err(SettingsError::Invalid {
                field: "circle_radius",
                reason: "must be positive and finite",
            });
        }
        if !(self.target_band_height >= 0.0 && self.target_band_height.is_finite()) {
            return Err(SettingsError::Invalid {
                field: "target_band_height",
                reason: "must be finite and not negative",
            });
        }
        if self.placement_attempts_per_circle == 0 {
            return Err(SettingsError::Invalid {
                field: "placement_attempts_per_circle",
                reason: "must be at least 1",
            });
        }
        let area_ok = |v: f32| v > 0.0 && v.is_finite();
        if !(area_ok(self.area_width) && area_ok(self.area_height)) {
            return Err(SettingsError::Invalid {
                field: "area_width/area_height",
                reason: "must be positive and finite",
            });
        }
        if self.circle_segments < 3 {
            return Err(SettingsError::Invalid {
                field: "circle_segments",
                reason: "must be at least 3",
            });
        }
        Ok(())
    }

    /// Layout parameters for a round in a `width` x `height` area
    pub fn layout(&self, width: f32, height: f32) -> LayoutParams {
        LayoutParams::new(
            self.circle_count,
            width,
            height,
            self.circle_radius,
            self.target_band_height,
        )
        .with_attempts(self.placement_attempts_per_circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_round() {
        let s = Settings::default();
        assert_eq!(s.circle_count, 5);
        assert_eq!(s.circle_radius, 50.0);
        assert_eq!(s.target_band_height, 100.0);
        assert_eq!(s.background, Rgb::LIGHT_GRAY);
        assert_eq!(s.overlay_text, "Game Over!");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "circle_count": 8, "background": { "r": 1, "g": 2, "b": 3 } }"#;
        let s = Settings::from_json(json).unwrap();
        assert_eq!(s.circle_count, 8);
        assert_eq!(s.background, Rgb::new(1, 2, 3));
        assert_eq!(s.circle_radius, CIRCLE_RADIUS);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Settings::from_json(r#"{ "circle_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "circle_radius", .. }));

        let err = Settings::from_json(r#"{ "circle_segments": 2 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "circle_segments", .. }));
    }

    #[test]
    fn test_non_finite_and_oversized_rejected() {
        let s = Settings {
            area_width: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { field: "area_width/area_height", .. })
        ));

        let s = Settings {
            circle_radius: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { field: "circle_radius", .. })
        ));

        let s = Settings {
            circle_count: MAX_CIRCLE_COUNT + 1,
            ..Default::default()
        };
        assert!(matches!(
            s.validate(),
            Err(SettingsError::Invalid { field: "circle_count", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/color-drop.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }

    #[test]
    fn test_layout_carries_budget() {
        let s = Settings {
            placement_attempts_per_circle: 12,
            ..Default::default()
        };
        let params = s.layout(800.0, 600.0);
        assert_eq!(params.count, 5);
        assert_eq!(params.width, 800.0);
        assert_eq!(params.height, 600.0);
        assert_eq!(params.attempts_per_circle, 12);
    }
}
