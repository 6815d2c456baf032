//! The seam between the gallery core and whatever draws it.

use vitrine_layout::{Door, PlacedExhibit};
use vitrine_nav::CameraPose;

/// Receives scene objects once per room load and camera poses every frame.
pub trait SceneSink {
    /// Called once for every hung image.
    fn place_exhibit(&mut self, exhibit: &PlacedExhibit);

    /// Called once for the entry door.
    fn place_door(&mut self, door: &Door);

    /// Called whenever the camera pose changes.
    fn set_camera(&mut self, pose: &CameraPose);
}

/// A sink that records everything it is given.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub exhibits: Vec<PlacedExhibit>,
    pub door: Option<Door>,
    pub camera_updates: Vec<CameraPose>,
}

impl SceneSink for RecordingSink {
    fn place_exhibit(&mut self, exhibit: &PlacedExhibit) {
        self.exhibits.push(exhibit.clone());
    }

    fn place_door(&mut self, door: &Door) {
        self.door = Some(*door);
    }

    fn set_camera(&mut self, pose: &CameraPose) {
        self.camera_updates.push(*pose);
    }
}
