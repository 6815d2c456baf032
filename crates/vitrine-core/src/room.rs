//! Room configuration and manifest loading.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitrineError};
use crate::image::ImageReference;
use crate::options::{LayoutOptions, NavigationOptions};

/// Texture file paths for the room surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TexturePaths {
    pub wall: String,
    pub floor: String,
    pub ceiling: String,
    pub door: String,
}

impl Default for TexturePaths {
    fn default() -> Self {
        Self {
            wall: "textures/wall.jpg".to_string(),
            floor: "textures/floor.jpg".to_string(),
            ceiling: "textures/ceiling.jpg".to_string(),
            door: "textures/door.jpg".to_string(),
        }
    }
}

/// Static description of a gallery room.
///
/// Missing fields fall back to [`RoomConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RoomConfig {
    /// Length of every wall (the floor is square).
    pub wall_width: f32,

    /// Height of every wall.
    pub wall_height: f32,

    /// Display length of each image's longer side.
    pub fixed_long_side: f32,

    /// Background color as `#rrggbb`.
    pub background_color: String,

    /// Surface textures.
    pub texture_paths: TexturePaths,

    /// Title shown for the room.
    pub room_title: String,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            wall_width: 12.0,
            wall_height: 4.0,
            fixed_long_side: 2.0,
            background_color: "#1e1e1e".to_string(),
            texture_paths: TexturePaths::default(),
            room_title: "Untitled Room".to_string(),
        }
    }
}

impl RoomConfig {
    /// Checks that the room dimensions are usable.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("wallWidth", self.wall_width),
            ("wallHeight", self.wall_height),
            ("fixedLongSide", self.fixed_long_side),
        ];
        for (field, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(VitrineError::InvalidConfig(format!(
                    "{field} must be a positive number, got {value}"
                )));
            }
        }
        self.background_rgb()?;
        Ok(())
    }

    /// Parses the background color into linear 0..1 RGB components.
    pub fn background_rgb(&self) -> Result<Vec3> {
        let hex = self.background_color.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let invalid =
            || VitrineError::InvalidConfig(format!("bad background color '{}'", self.background_color));

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|c| f32::from(c) / 255.0)
                .map_err(|_| invalid())
        };
        Ok(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// A room as delivered by the configuration provider: room settings, the
/// ordered image list, and optional tuning blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomManifest {
    #[serde(flatten)]
    pub room: RoomConfig,

    #[serde(default)]
    pub images: Vec<ImageReference>,

    #[serde(default)]
    pub layout: LayoutOptions,

    #[serde(default)]
    pub navigation: NavigationOptions,
}

impl RoomManifest {
    /// Parses and validates a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.room.validate()?;
        manifest.layout.validate()?;
        manifest.navigation.validate()?;
        log::debug!(
            "parsed manifest for '{}' with {} images",
            manifest.room.room_title,
            manifest.images.len()
        );
        Ok(manifest)
    }

    /// Reads, parses and validates a manifest file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_config_default() {
        let config = RoomConfig::default();
        assert_eq!(config.wall_width, 12.0);
        assert_eq!(config.wall_height, 4.0);
        assert_eq!(config.texture_paths.door, "textures/door.jpg");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_background_rgb() {
        let config = RoomConfig {
            background_color: "#ff8000".to_string(),
            ..Default::default()
        };
        let rgb = config.background_rgb().unwrap();
        assert_eq!(rgb.x, 1.0);
        assert!((rgb.y - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(rgb.z, 0.0);

        let bare = RoomConfig {
            background_color: "000000".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.background_rgb().unwrap(), Vec3::ZERO);
    }

    #[test]
    fn test_background_rgb_rejects_garbage() {
        for bad in ["#fff", "#gg0000", "", "#ff00ff00"] {
            let config = RoomConfig {
                background_color: bad.to_string(),
                ..Default::default()
            };
            assert!(config.background_rgb().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let config = RoomConfig {
            wall_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(VitrineError::InvalidConfig(_))));
    }

    #[test]
    fn test_manifest_defaults_missing_fields() {
        let manifest = RoomManifest::from_json_str(
            r#"{
                "wallWidth": 10,
                "roomTitle": "North Hall",
                "texturePaths": { "floor": "oak.jpg" },
                "images": ["a.jpg", { "file": "b.jpg", "caption": "Study" }],
                "layout": { "minSpacing": 0.25 }
            }"#,
        )
        .unwrap();
        assert_eq!(manifest.room.wall_width, 10.0);
        assert_eq!(manifest.room.wall_height, 4.0);
        assert_eq!(manifest.room.room_title, "North Hall");
        assert_eq!(manifest.room.texture_paths.floor, "oak.jpg");
        assert_eq!(manifest.room.texture_paths.wall, "textures/wall.jpg");
        assert_eq!(manifest.images.len(), 2);
        assert_eq!(manifest.layout.min_spacing, 0.25);
        assert_eq!(manifest.layout.min_margin, 1.0);
        assert_eq!(manifest.navigation.transition_duration, 0.6);
    }

    #[test]
    fn test_manifest_rejects_invalid_room() {
        let result = RoomManifest::from_json_str(r#"{ "wallHeight": -2 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_rejects_negative_layout_spacing() {
        let result = RoomManifest::from_json_str(
            r#"{ "images": ["a.jpg"], "layout": { "minSpacing": -1.5, "minMargin": -2 } }"#,
        );
        assert!(matches!(result, Err(VitrineError::InvalidConfig(_))));
    }

    #[test]
    fn test_manifest_rejects_negative_navigation() {
        let result = RoomManifest::from_json_str(r#"{ "navigation": { "floorBackoff": -1 } }"#);
        assert!(matches!(result, Err(VitrineError::InvalidConfig(_))));
    }
}
