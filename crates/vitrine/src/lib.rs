//! vitrine: the core of a virtual art gallery.
//!
//! A room manifest lists images and the room's dimensions. vitrine sizes the
//! images, packs them onto the walls, computes a pose for every frame, and
//! drives the click-to-focus camera.
//!
//! # Quick Start
//!
//! ```no_run
//! use vitrine_rs::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let manifest = RoomManifest::from_path("room.json")?;
//!     let source = FsAssetSource::new("images");
//!     let mut gallery = pollster::block_on(Gallery::load(manifest, &source))?;
//!
//!     for exhibit in &gallery.scene().exhibits {
//!         println!("{} on the {} wall", exhibit.source_id, exhibit.wall.name());
//!     }
//!
//!     let pose = gallery.frame_tick(0.0);
//!     println!("camera at {:?}", pose.position);
//!     Ok(())
//! }
//! ```
//!
//! # Components
//!
//! - [`resolve_images`] - concurrent image sizing
//! - [`plan_layout`] - greedy wall packing
//! - [`materialize`] - world-space poses for frames, panels and the door
//! - [`Navigator`] - the camera navigation state machine
//! - [`Gallery`] - one loaded room tying the above together

mod assets;
mod gallery;
mod resolver;
mod sink;

pub use assets::{FsAssetSource, MemoryAssetSource};
pub use gallery::{Gallery, PointerEvent};
pub use resolver::{resolve_images, AssetSource, ResolveFailure, ResolvedImages};
pub use sink::{RecordingSink, SceneSink};

// Re-export core types
pub use vitrine_core::{
    display_size, FocusId, FocusTarget, ImageItem, ImageReference, LayoutOptions,
    NavigationOptions, PickHit, Result, RoomConfig, RoomManifest, TexturePaths, VitrineError,
    WallAxis, WallName, WallSet, WallSpec,
};
pub use vitrine_core::{Mat4, Quat, Vec2, Vec3};

// Re-export layout and navigation types
pub use vitrine_layout::{
    materialize, plan_layout, Door, LayoutPlan, PlacedExhibit, PlacedScene, Placement, Pose,
    WallAssignment,
};
pub use vitrine_nav::{
    CameraPose, GestureKind, GestureTracker, NavAction, NavState, Navigator, Transition,
};

/// Installs the `env_logger` backend, defaulting to `info` level.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
