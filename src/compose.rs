//! Merges drag-derived and pinch-derived transform fragments into one
//! authoritative [`Transform`].

use crate::model::Transform;

/// Position produced by the drag path. Carries the stacking order too: the
/// actively manipulated element is elevated above its siblings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragFragment {
    pub left: f64,
    pub top: f64,
    pub z_index: i32,
}

/// Rotation/scale produced by the pinch path. Either half may be absent when
/// the corresponding concern is disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchFragment {
    pub rotation_degrees: Option<f64>,
    pub scale: Option<f64>,
}

/// Right-biased shallow merge: pinch fields override drag fields override the
/// base. The z-index is taken from the drag fragment whenever one is present,
/// otherwise left at base.
pub fn compose(base: Transform, drag: Option<DragFragment>, pinch: Option<PinchFragment>) -> Transform {
    let mut out = base;
    if let Some(d) = drag {
        out.left = d.left;
        out.top = d.top;
        out.z_index = d.z_index;
    }
    if let Some(p) = pinch {
        if let Some(rotation) = p.rotation_degrees {
            out.rotation_degrees = rotation;
        }
        if let Some(scale) = p.scale {
            out.scale = scale;
        }
    }
    out
}
