//! Wall geometry for a square gallery room.
//!
//! The room is centred on the origin with Y up. Each wall runs along either
//! the X or the Z axis and faces the room centre.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The four walls of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallName {
    Front,
    Right,
    Left,
    /// Hosts the entry door; never used for images.
    Back,
}

impl WallName {
    /// Walls that display images, in packing priority order.
    pub const DISPLAY_ORDER: [WallName; 3] = [WallName::Front, WallName::Right, WallName::Left];

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WallName::Front => "front",
            WallName::Right => "right",
            WallName::Left => "left",
            WallName::Back => "back",
        }
    }
}

/// Axis a wall runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallAxis {
    X,
    Z,
}

/// Geometry of a single wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallSpec {
    /// Which wall this is.
    pub name: WallName,
    /// Axis the wall runs along.
    pub axis: WallAxis,
    /// World coordinate on `axis` where wall-local offset 0 lies.
    pub origin_offset: f32,
    /// World coordinate on the other horizontal axis.
    pub fixed_coordinate: f32,
    /// Yaw around +Y, in radians, turning +Z into the wall's inward normal.
    pub rotation: f32,
}

impl WallSpec {
    /// Builds the geometry of one wall of a room with the given wall width.
    #[must_use]
    pub fn for_room(name: WallName, wall_width: f32) -> Self {
        let half = wall_width * 0.5;
        let (axis, fixed_coordinate, rotation) = match name {
            WallName::Front => (WallAxis::X, -half, 0.0),
            WallName::Right => (WallAxis::Z, half, -std::f32::consts::FRAC_PI_2),
            WallName::Left => (WallAxis::Z, -half, std::f32::consts::FRAC_PI_2),
            WallName::Back => (WallAxis::X, half, std::f32::consts::PI),
        };
        Self {
            name,
            axis,
            origin_offset: -half,
            fixed_coordinate,
            rotation,
        }
    }

    /// Rotation of objects hung on this wall.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.rotation)
    }

    /// Unit normal pointing from the wall into the room.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// Maps a wall-local offset and a height to a world-space point on the wall surface.
    #[must_use]
    pub fn point_at(&self, offset: f32, height: f32) -> Vec3 {
        let primary = self.origin_offset + offset;
        match self.axis {
            WallAxis::X => Vec3::new(primary, height, self.fixed_coordinate),
            WallAxis::Z => Vec3::new(self.fixed_coordinate, height, primary),
        }
    }
}

/// The walls of one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSet {
    wall_width: f32,
    walls: [WallSpec; 4],
}

impl WallSet {
    /// Builds all four walls for a room.
    #[must_use]
    pub fn new(wall_width: f32) -> Self {
        Self {
            wall_width,
            walls: [
                WallSpec::for_room(WallName::Front, wall_width),
                WallSpec::for_room(WallName::Right, wall_width),
                WallSpec::for_room(WallName::Left, wall_width),
                WallSpec::for_room(WallName::Back, wall_width),
            ],
        }
    }

    pub fn wall_width(&self) -> f32 {
        self.wall_width
    }

    /// Returns the geometry of the named wall.
    #[must_use]
    pub fn get(&self, name: WallName) -> &WallSpec {
        let index = match name {
            WallName::Front => 0,
            WallName::Right => 1,
            WallName::Left => 2,
            WallName::Back => 3,
        };
        &self.walls[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallSpec> {
        self.walls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_normals_face_room_centre() {
        let walls = WallSet::new(10.0);
        for wall in walls.iter() {
            let surface = wall.point_at(5.0, 0.0);
            let inward = (Vec3::ZERO - surface).normalize();
            assert!(
                approx(wall.normal(), inward),
                "{} normal {:?} should be {:?}",
                wall.name.name(),
                wall.normal(),
                inward
            );
        }
    }

    #[test]
    fn test_point_at_front() {
        let front = WallSpec::for_room(WallName::Front, 10.0);
        assert!(approx(front.point_at(0.0, 2.0), Vec3::new(-5.0, 2.0, -5.0)));
        assert!(approx(front.point_at(10.0, 2.0), Vec3::new(5.0, 2.0, -5.0)));
    }

    #[test]
    fn test_point_at_side_walls() {
        let right = WallSpec::for_room(WallName::Right, 8.0);
        assert_eq!(right.axis, WallAxis::Z);
        assert!(approx(right.point_at(4.0, 1.0), Vec3::new(4.0, 1.0, 0.0)));

        let left = WallSpec::for_room(WallName::Left, 8.0);
        assert!(approx(left.point_at(1.0, 1.0), Vec3::new(-4.0, 1.0, -3.0)));
    }

    #[test]
    fn test_display_order_excludes_back() {
        assert!(!WallName::DISPLAY_ORDER.contains(&WallName::Back));
        assert_eq!(WallName::DISPLAY_ORDER[0], WallName::Front);
    }

    #[test]
    fn test_wall_set_lookup() {
        let walls = WallSet::new(6.0);
        assert_eq!(walls.get(WallName::Left).name, WallName::Left);
        assert_eq!(walls.get(WallName::Back).fixed_coordinate, 3.0);
        assert_eq!(walls.wall_width(), 6.0);
    }
}
