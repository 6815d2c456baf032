//! The gallery context: one loaded room with its layout and camera.
//!
//! A [`Gallery`] owns everything computed for a room load. Images, plan and
//! scene never change after loading; only the camera moves.

use glam::Vec2;
use vitrine_core::{
    FocusId, FocusTarget, ImageItem, LayoutOptions, NavigationOptions, PickHit, Result,
    RoomConfig, RoomManifest, WallSet,
};
use vitrine_layout::{materialize, LayoutPlan, PlacedExhibit, PlacedScene};
use vitrine_nav::{CameraPose, GestureKind, GestureTracker, NavAction, Navigator};

use crate::resolver::{resolve_images, AssetSource, ResolveFailure};
use crate::sink::SceneSink;

/// Pointer input with the scene hit already resolved by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pos: Vec2, time: f64 },
    Move { pos: Vec2, time: f64 },
    Up { pos: Vec2, time: f64, hit: Option<PickHit> },
}

/// A loaded gallery room.
pub struct Gallery {
    room: RoomConfig,
    items: Vec<ImageItem>,
    failures: Vec<ResolveFailure>,
    walls: WallSet,
    plan: LayoutPlan,
    scene: PlacedScene,
    navigator: Navigator,
    gestures: GestureTracker,
}

impl Gallery {
    /// Resolves the manifest's images through `source`, then lays out the room.
    ///
    /// Planning starts only after every image has resolved or failed.
    pub async fn load<S: AssetSource>(manifest: RoomManifest, source: &S) -> Result<Self> {
        manifest.room.validate()?;
        let resolved =
            resolve_images(source, &manifest.images, manifest.room.fixed_long_side).await;

        let mut gallery = Self::from_items(
            manifest.room,
            resolved.items,
            &manifest.layout,
            manifest.navigation,
        )?;
        gallery.failures = resolved.failures;
        Ok(gallery)
    }

    /// Lays out a room from already sized images.
    pub fn from_items(
        room: RoomConfig,
        items: Vec<ImageItem>,
        layout: &LayoutOptions,
        navigation: NavigationOptions,
    ) -> Result<Self> {
        room.validate()?;
        layout.validate()?;
        navigation.validate()?;

        let walls = WallSet::new(room.wall_width);
        let plan = LayoutPlan::for_images(&items, room.wall_width, layout);
        let scene = materialize(&plan, &walls, &room, &items, layout);
        let navigator = Navigator::new(
            CameraPose::overview(room.wall_width, navigation.eye_height),
            room.wall_width,
            navigation,
        );
        let gestures = GestureTracker::new(navigation.click_max_duration, navigation.drag_threshold);

        log::info!(
            "room '{}': {} of {} images hung",
            room.room_title,
            plan.placement_count(),
            items.len()
        );

        Ok(Self {
            room,
            items,
            failures: Vec::new(),
            walls,
            plan,
            scene,
            navigator,
            gestures,
        })
    }

    pub fn room(&self) -> &RoomConfig {
        &self.room
    }

    /// Resolved images, in manifest order.
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Images that failed to resolve.
    pub fn failures(&self) -> &[ResolveFailure] {
        &self.failures
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    pub fn plan(&self) -> &LayoutPlan {
        &self.plan
    }

    pub fn scene(&self) -> &PlacedScene {
        &self.scene
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The current camera pose.
    pub fn camera(&self) -> CameraPose {
        self.navigator.pose()
    }

    /// Resolved images that did not fit on any wall.
    pub fn dropped_items(&self) -> Vec<&ImageItem> {
        self.plan
            .dropped_indices(self.items.len())
            .into_iter()
            .filter_map(|i| self.items.get(i))
            .collect()
    }

    /// Looks up a focusable object by id.
    pub fn focus_target(&self, id: FocusId) -> Option<FocusTarget> {
        match id {
            FocusId::Exhibit(index) => self.scene.exhibit(index).map(PlacedExhibit::focus_target),
            FocusId::Door => Some(self.scene.door.focus_target()),
        }
    }

    /// Feeds one pointer event. Returns the navigation it triggered, if any.
    ///
    /// Drags orbit the camera and never trigger navigation.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<NavAction> {
        match event {
            PointerEvent::Down { pos, time } => {
                self.gestures.pointer_down(pos, time);
                None
            }
            PointerEvent::Move { pos, time } => {
                let delta = self.gestures.pointer_move(pos)?;
                if self.gestures.is_dragging(time) {
                    self.navigator.orbit(delta);
                }
                None
            }
            PointerEvent::Up { pos, time, hit } => match self.gestures.pointer_up(pos, time)? {
                GestureKind::Click => self.navigator.handle_click(hit, time),
                GestureKind::Drag => None,
            },
        }
    }

    /// Advances the camera by one frame and returns the pose to draw.
    pub fn frame_tick(&mut self, now: f64) -> CameraPose {
        self.navigator.update(now);
        self.navigator.pose()
    }

    /// Advances the camera and forwards the pose to `sink` if it moved.
    pub fn frame_tick_into(&mut self, now: f64, sink: &mut impl SceneSink) -> bool {
        let moved = self.navigator.update(now);
        if moved {
            sink.set_camera(&self.navigator.pose());
        }
        moved
    }

    /// Hands every scene object and the initial camera pose to `sink`.
    pub fn populate(&self, sink: &mut impl SceneSink) {
        for exhibit in &self.scene.exhibits {
            sink.place_exhibit(exhibit);
        }
        sink.place_door(&self.scene.door);
        sink.set_camera(&self.navigator.pose());
    }
}
