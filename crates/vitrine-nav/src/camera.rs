//! Camera pose.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Where the camera is and what it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Creates a new pose.
    #[must_use]
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Overview pose for a room: standing just inside the door, facing the front wall.
    #[must_use]
    pub fn overview(wall_width: f32, eye_height: f32) -> Self {
        let half = wall_width * 0.5;
        let standoff = (wall_width * 0.15).min(1.5);
        Self {
            position: Vec3::new(0.0, eye_height, half - standoff),
            look_at: Vec3::new(0.0, eye_height, -half),
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or_zero()
    }

    /// Whether both pose components are within `epsilon` of `other`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.look_at.abs_diff_eq(other.look_at, epsilon)
    }

    /// Orbits the camera around its look-at point.
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let offset = self.position - self.look_at;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = (offset.y / radius).acos();

        theta -= delta_x;
        phi = (phi - delta_y).clamp(0.01, std::f32::consts::PI - 0.01);

        self.position = self.look_at
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.6, 3.0), Vec3::new(0.0, 1.6, 0.0))
    }
}
