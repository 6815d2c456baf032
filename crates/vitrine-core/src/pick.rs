//! Picking results delivered by the input event source.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Identity of a focusable scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusId {
    /// An image panel, by index into the resolved image list.
    Exhibit(usize),
    /// The entry door.
    Door,
}

/// Everything the navigator needs to fly the camera to an object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusTarget {
    /// Which object this is.
    pub id: FocusId,
    /// World-space centre of the object.
    pub center: Vec3,
    /// Unit normal pointing from the object into the room.
    pub normal: Vec3,
    /// Bounding size of the object on its wall.
    pub size: Vec2,
}

impl FocusTarget {
    /// Creates a new focus target.
    pub fn new(id: FocusId, center: Vec3, normal: Vec3, size: Vec2) -> Self {
        Self {
            id,
            center,
            normal,
            size,
        }
    }

    /// Viewing distance proportional to the object's larger side.
    #[must_use]
    pub fn focus_distance(&self, factor: f32) -> f32 {
        self.size.max_element() * factor
    }
}

/// Result of ray-casting a pointer release against the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickHit {
    /// A registered focusable object was hit.
    Focusable(FocusTarget),
    /// The floor plane was hit at the given world point.
    Floor(Vec3),
}
