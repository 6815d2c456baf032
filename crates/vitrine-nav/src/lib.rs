//! Camera navigation for vitrine.
//!
//! This crate provides:
//! - [`CameraPose`], the camera position and look-at target
//! - [`GestureTracker`], separating clicks from drags
//! - [`Navigator`], the click-to-focus navigation state machine

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod gesture;
pub mod navigation;

pub use camera::CameraPose;
pub use gesture::{GestureKind, GestureTracker};
pub use navigation::{NavAction, NavState, Navigator, Transition};
