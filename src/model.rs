//! Core data model for the gesture controller.
//!
//! Everything here is a plain value type: produced fresh from platform events
//! (touch data) or owned by the state machine (the transform). Nothing in this
//! module touches the DOM.

use serde::{Deserialize, Serialize};

/// One active finger on the surface, in page-absolute coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchContact {
    pub x: f64,
    pub y: f64,
}

impl TouchContact {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The primary contact expressed both in element-local and page coordinates.
/// The bounds evaluator projects the element's edges from this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Touch position relative to the element's top-left corner.
    pub local_x: f64,
    pub local_y: f64,
    /// Same touch in page-absolute coordinates.
    pub page_x: f64,
    pub page_y: f64,
}

/// Cumulative translation since gesture start, supplied by the host adapter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

/// A normalized raw touch event: the full contact set in platform finger
/// order, the primary-contact anchor, and the accumulated gesture delta.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchInput {
    pub touches: Vec<TouchContact>,
    pub anchor: Option<Anchor>,
    pub delta: Delta,
}

impl TouchInput {
    pub fn touch_count(&self) -> usize {
        self.touches.len()
    }
}

/// The authoritative visual state of the controlled element. Owned exclusively
/// by the gesture state machine; hosts read it through change callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub left: f64,
    pub top: f64,
    pub rotation_degrees: f64,
    pub scale: f64,
    pub z_index: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            rotation_degrees: 0.0,
            scale: 1.0,
            z_index: 0,
        }
    }
}

/// Current rendered size of the controlled element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementSize {
    pub width: f64,
    pub height: f64,
}

impl ElementSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The region the element is contained in. Externally supplied, read-only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
}

/// Which container edge an axis ran past.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisEdge {
    Min,
    Max,
}

/// Corrected container-local position produced when bounds are exceeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub left: f64,
    pub top: f64,
}

/// Transient out-of-bounds report: which axes violated which edge, and where
/// to snap back to. Recomputed every move/release event, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundsViolation {
    pub x: Option<AxisEdge>,
    pub y: Option<AxisEdge>,
    pub snap: SnapTarget,
}

/// Payload carried by every lifecycle callback: the raw input that triggered
/// the notification plus the current transform.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent {
    pub input: TouchInput,
    pub transform: Transform,
}
