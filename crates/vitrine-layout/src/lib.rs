//! Wall layout for vitrine.
//!
//! This crate provides:
//! - [`plan_layout`], the greedy first-fit planner assigning images to walls
//! - [`materialize`], which turns a [`LayoutPlan`] into world-space poses

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod placement;
pub mod planner;

pub use placement::{
    materialize, Door, PlacedExhibit, PlacedScene, Pose, DOOR_SIZE, FRAME_INSET, PANEL_OFFSET,
};
pub use planner::{plan_layout, LayoutPlan, Placement, WallAssignment};
