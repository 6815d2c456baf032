//! Core types for vitrine.
//!
//! This crate provides the shared vocabulary used throughout vitrine:
//! - [`RoomConfig`] and [`RoomManifest`] describing a gallery room and its images
//! - [`ImageItem`] and [`ImageReference`] for sized and unsized exhibits
//! - [`WallSpec`] and [`WallSet`] for the room's wall geometry
//! - Picking types consumed by the navigation state machine
//! - Layout and navigation options

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod image;
pub mod options;
pub mod pick;
pub mod room;
pub mod wall;

pub use error::{Result, VitrineError};
pub use image::{display_size, ImageItem, ImageReference};
pub use options::{LayoutOptions, NavigationOptions};
pub use pick::{FocusId, FocusTarget, PickHit};
pub use room::{RoomConfig, RoomManifest, TexturePaths};
pub use wall::{WallAxis, WallName, WallSet, WallSpec};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3};
