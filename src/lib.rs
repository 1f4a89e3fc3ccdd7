//! Touch gestures for Yew: drag, rotate, and scale a wrapped element with one
//! or more fingers, contained inside a bounding region.
//!
//! The crate is split into a DOM-free core and a thin adapter. The core — the
//! [`state::GestureController`] state machine plus the geometry, bounds, and
//! compositing helpers it drives — consumes normalized [`model::TouchInput`]
//! events and owns the element's [`model::Transform`]; it runs and tests on
//! any target. The [`components::Gestures`] component wires browser touch
//! events into a controller and writes committed transforms back to the
//! wrapped node's style.

pub mod bounds;
pub mod callbacks;
pub mod components;
pub mod compose;
pub mod config;
pub mod geometry;
pub mod model;
pub mod state;
pub mod touches;

pub use callbacks::GestureCallbacks;
pub use components::{Gestures, GesturesProps};
pub use config::{Draggable, GesturesConfig, Scalable, SnapPolicy};
pub use geometry::InsufficientContactsError;
pub use model::{
    Anchor, AxisEdge, BoundsViolation, ContainerRegion, Delta, ElementSize, GestureEvent,
    SnapTarget, TouchContact, TouchInput, Transform,
};
pub use state::GestureController;
