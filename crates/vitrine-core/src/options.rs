//! Tunable options for layout and navigation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitrineError};

fn check_non_negative(fields: &[(&str, f32)]) -> Result<()> {
    for &(field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(VitrineError::InvalidConfig(format!(
                "{field} must be a non-negative number, got {value}"
            )));
        }
    }
    Ok(())
}

/// Spacing rules used by the wall planner and the frame geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Minimum free space between a wall's edge and the outermost image.
    pub min_margin: f32,

    /// Minimum gap between neighbouring images on a wall.
    pub min_spacing: f32,

    /// Width of the frame border drawn around each image.
    pub frame_border: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_margin: 1.0,
            min_spacing: 0.5,
            frame_border: 0.08,
        }
    }
}

impl LayoutOptions {
    /// Width left for images on a wall of the given width.
    pub fn available_width(&self, wall_width: f32) -> f32 {
        wall_width - 2.0 * self.min_margin
    }

    /// Rejects negative or non-finite spacing.
    pub fn validate(&self) -> Result<()> {
        check_non_negative(&[
            ("minMargin", self.min_margin),
            ("minSpacing", self.min_spacing),
            ("frameBorder", self.frame_border),
        ])
    }
}

/// Camera navigation and pointer gesture settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationOptions {
    /// Duration of every camera flight, in seconds.
    pub transition_duration: f32,

    /// Focus distance as a multiple of an object's larger side.
    pub focus_distance_factor: f32,

    /// Floor clicks closer than this to a wall are ignored.
    pub floor_margin: f32,

    /// Distance the camera stops short of a clicked floor point.
    pub floor_backoff: f32,

    /// Longest press, in seconds, still counted as a click.
    pub click_max_duration: f32,

    /// Pointer travel in pixels after which a press becomes a drag.
    pub drag_threshold: f32,

    /// Camera height of the overview pose.
    pub eye_height: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            transition_duration: 0.6,
            focus_distance_factor: 1.5,
            floor_margin: 0.5,
            floor_backoff: 0.5,
            click_max_duration: 0.2,
            drag_threshold: 5.0,
            eye_height: 1.6,
        }
    }
}

impl NavigationOptions {
    /// Rejects negative or non-finite settings.
    pub fn validate(&self) -> Result<()> {
        check_non_negative(&[
            ("transitionDuration", self.transition_duration),
            ("focusDistanceFactor", self.focus_distance_factor),
            ("floorMargin", self.floor_margin),
            ("floorBackoff", self.floor_backoff),
            ("clickMaxDuration", self.click_max_duration),
            ("dragThreshold", self.drag_threshold),
            ("eyeHeight", self.eye_height),
        ])
    }
}
