//! Lifecycle notifications a host can subscribe to.
//!
//! Every field defaults to a no-op callback, so hosts register only what they
//! care about. All callbacks are invoked synchronously from the dispatch path.

use yew::Callback;

use crate::model::GestureEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureCallbacks {
    /// First contact went down.
    pub on_start: Callback<GestureEvent>,
    /// Transform updated during a move frame.
    pub on_change: Callback<GestureEvent>,
    /// Last contact lifted.
    pub on_end: Callback<GestureEvent>,
    /// Deprecated alias of `on_end`, kept for hosts migrating from the old
    /// surface. Fired at the same transition point, right after `on_end`.
    pub on_release: Callback<GestureEvent>,

    /// A second contact joined the gesture.
    pub on_multi_touch_start: Callback<GestureEvent>,
    pub on_multi_touch_change: Callback<GestureEvent>,
    pub on_multi_touch_end: Callback<GestureEvent>,

    pub on_rotate_start: Callback<GestureEvent>,
    pub on_rotate_change: Callback<GestureEvent>,
    pub on_rotate_end: Callback<GestureEvent>,

    pub on_scale_start: Callback<GestureEvent>,
    pub on_scale_change: Callback<GestureEvent>,
    pub on_scale_end: Callback<GestureEvent>,

    /// Fired only when the out-of-bounds state flips, never per frame.
    pub on_drag_out_of_bounds: Callback<bool>,
    /// Number of active contacts, reported at gesture start and whenever the
    /// contact count changes mid-gesture.
    pub on_touches_change: Callback<usize>,
}
