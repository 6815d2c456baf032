//! Turns a layout plan into world-space poses for frames, image panels and the door.

use glam::{Mat4, Quat, Vec2, Vec3};
use serde::Serialize;
use vitrine_core::{FocusId, FocusTarget, ImageItem, LayoutOptions, RoomConfig, WallName, WallSet};

use crate::planner::LayoutPlan;

/// Distance between the wall surface and a frame's centre.
pub const FRAME_INSET: f32 = 0.02;

/// Distance between a frame and the image panel in front of it.
pub const PANEL_OFFSET: f32 = 0.01;

/// Door size as (width, height).
pub const DOOR_SIZE: Vec2 = Vec2::new(1.4, 2.4);

/// Position and orientation of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Converts this pose to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

/// A framed image hung on a wall.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedExhibit {
    /// Index into the resolved image list.
    pub image_index: usize,
    pub source_id: String,
    pub wall: WallName,
    pub frame: Pose,
    pub panel: Pose,
    /// Image size (fw, fh).
    pub size: Vec2,
    /// Outer size of the frame.
    pub frame_size: Vec2,
    /// Unit normal pointing into the room.
    pub normal: Vec3,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl PlacedExhibit {
    /// Viewing distance for this exhibit.
    #[must_use]
    pub fn focus_distance(&self, factor: f32) -> f32 {
        self.size.max_element() * factor
    }

    /// Hit-testing data for the navigator.
    #[must_use]
    pub fn focus_target(&self) -> FocusTarget {
        FocusTarget::new(
            FocusId::Exhibit(self.image_index),
            self.panel.position,
            self.normal,
            self.size,
        )
    }
}

/// The entry door on the back wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Door {
    pub pose: Pose,
    pub size: Vec2,
    pub normal: Vec3,
}

impl Door {
    /// Places the door centred on the back wall, standing on the floor.
    #[must_use]
    pub fn for_room(walls: &WallSet, room: &RoomConfig) -> Self {
        let back = walls.get(WallName::Back);
        let size = Vec2::new(DOOR_SIZE.x, DOOR_SIZE.y.min(room.wall_height * 0.9));
        let normal = back.normal();
        let position = back.point_at(walls.wall_width() * 0.5, size.y * 0.5) + normal * FRAME_INSET;
        Self {
            pose: Pose::new(position, back.orientation()),
            size,
            normal,
        }
    }

    #[must_use]
    pub fn focus_target(&self) -> FocusTarget {
        FocusTarget::new(FocusId::Door, self.pose.position, self.normal, self.size)
    }
}

/// Everything hung in a room.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedScene {
    pub exhibits: Vec<PlacedExhibit>,
    pub door: Door,
}

impl PlacedScene {
    /// Every focusable object in the scene: all exhibits, then the door.
    pub fn focus_targets(&self) -> impl Iterator<Item = FocusTarget> + '_ {
        self.exhibits
            .iter()
            .map(PlacedExhibit::focus_target)
            .chain(std::iter::once(self.door.focus_target()))
    }

    /// Looks up the exhibit showing the given image.
    #[must_use]
    pub fn exhibit(&self, image_index: usize) -> Option<&PlacedExhibit> {
        self.exhibits.iter().find(|e| e.image_index == image_index)
    }
}

/// Computes frame and panel poses for every placement of `plan`.
///
/// `items` must be the list the plan was computed from.
#[must_use]
pub fn materialize(
    plan: &LayoutPlan,
    walls: &WallSet,
    room: &RoomConfig,
    items: &[ImageItem],
    options: &LayoutOptions,
) -> PlacedScene {
    let center_height = room.wall_height * 0.5;
    let border = Vec2::splat(options.frame_border * 2.0);

    let exhibits = plan
        .placements()
        .filter_map(|(wall_name, placement)| {
            let Some(item) = items.get(placement.image_index) else {
                log::warn!(
                    "layout references image {} but only {} are loaded",
                    placement.image_index,
                    items.len()
                );
                return None;
            };

            let wall = walls.get(wall_name);
            let normal = wall.normal();
            let rotation = wall.orientation();
            let frame_position =
                wall.point_at(placement.offset, center_height) + normal * FRAME_INSET;
            let size = Vec2::new(placement.width, placement.height);

            Some(PlacedExhibit {
                image_index: placement.image_index,
                source_id: item.source_id().to_string(),
                wall: wall_name,
                frame: Pose::new(frame_position, rotation),
                panel: Pose::new(frame_position + normal * PANEL_OFFSET, rotation),
                size,
                frame_size: size + border,
                normal,
                title: item.title().map(str::to_string),
                caption: item.caption().map(str::to_string),
                author: item.author().map(str::to_string),
            })
        })
        .collect();

    PlacedScene {
        exhibits,
        door: Door::for_room(walls, room),
    }
}
