//! Configuration surface of a gesture controller.
//!
//! The bool-or-shape props of the original surface are tagged variants,
//! resolved into concrete per-axis/per-bound values once at construction so
//! the per-frame paths never inspect shapes.

use serde::{Deserialize, Serialize};

use crate::model::ContainerRegion;

/// Whether and along which axes the element can be dragged.
///
/// `Disabled` makes the whole gesture pipeline inert: no transform mutation
/// and no lifecycle callbacks. `Axes { x: false, y: false }` keeps the
/// pipeline running (pinch and callbacks still work) but holds both
/// coordinates at their baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Draggable {
    Disabled,
    Both,
    Axes { x: bool, y: bool },
}

impl Default for Draggable {
    fn default() -> Self {
        Self::Both
    }
}

impl Draggable {
    /// False only for `Disabled`: a per-axis shape keeps the pipeline alive
    /// even with both axes off.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn x(&self) -> bool {
        match self {
            Self::Disabled => false,
            Self::Both => true,
            Self::Axes { x, .. } => *x,
        }
    }

    pub fn y(&self) -> bool {
        match self {
            Self::Disabled => false,
            Self::Both => true,
            Self::Axes { y, .. } => *y,
        }
    }
}

/// Whether the element can be scaled, and inside which range. Both endpoints
/// are explicit; there is no hidden clamp anywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Scalable {
    Disabled,
    Range { min: f64, max: f64 },
}

impl Default for Scalable {
    fn default() -> Self {
        Self::default_range()
    }
}

impl Scalable {
    /// The conventional range: a third of the original size up to double.
    pub fn default_range() -> Self {
        Self::Range { min: 0.33, max: 2.0 }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Range { .. })
    }

    /// Repairs an inverted range by swapping the endpoints. Out-of-order
    /// configuration must not crash or produce unclampable scales.
    pub fn normalized(self) -> Self {
        match self {
            Self::Range { min, max } if min > max => Self::Range { min: max, max: min },
            other => other,
        }
    }
}

/// How out-of-bounds positions are corrected.
///
/// `OnRelease` is the elastic policy: the element may visually overshoot
/// while dragging and snaps back once when every finger lifts. `OnMove`
/// rigidly clamps every frame. `None` never corrects, it only reports
/// out-of-bounds transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapPolicy {
    None,
    #[default]
    OnRelease,
    OnMove,
}

/// Immutable per-controller configuration, supplied once by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GesturesConfig {
    pub draggable: Draggable,
    pub rotatable: bool,
    pub scalable: Scalable,
    pub snap_policy: SnapPolicy,
    pub container: ContainerRegion,
    pub container_padding: f64,
    pub top_zindex: i32,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            draggable: Draggable::default(),
            rotatable: true,
            scalable: Scalable::default(),
            snap_policy: SnapPolicy::default(),
            container: ContainerRegion::default(),
            container_padding: 0.0,
            top_zindex: 0,
        }
    }
}

impl GesturesConfig {
    /// Resolves shape-level repairs (inverted scale range) once, at
    /// construction time.
    pub fn normalized(mut self) -> Self {
        self.scalable = self.scalable.normalized();
        self
    }
}
