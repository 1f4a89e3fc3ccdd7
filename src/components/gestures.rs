//! The `<Gestures>` component: wraps its children in an absolutely positioned
//! node, feeds the node's touch events to a [`GestureController`], and writes
//! the committed transform back to the node's style.
//!
//! All coordinates are viewport-relative: contacts come from
//! `Touch::client_x/y`, the anchor from the client position minus the node's
//! bounding rect, and the default container region is the viewport itself.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::callbacks::GestureCallbacks;
use crate::config::{Draggable, GesturesConfig, Scalable, SnapPolicy};
use crate::model::{
    Anchor, ContainerRegion, Delta, ElementSize, GestureEvent, TouchContact, TouchInput, Transform,
};
use crate::state::GestureController;

#[derive(Properties, PartialEq, Clone)]
pub struct GesturesProps {
    #[prop_or_default]
    pub children: Children,

    // Behavior
    #[prop_or_default]
    pub draggable: Draggable,
    #[prop_or(true)]
    pub rotatable: bool,
    #[prop_or_default]
    pub scalable: Scalable,
    #[prop_or_default]
    pub snap_policy: SnapPolicy,
    /// Containment region in viewport coordinates. Defaults to the viewport.
    #[prop_or_default]
    pub container: Option<ContainerRegion>,
    #[prop_or(0.0)]
    pub container_padding: f64,
    #[prop_or(0)]
    pub top_zindex: i32,
    /// Transform the element starts from.
    #[prop_or_default]
    pub initial_transform: Transform,

    // Lifecycle callbacks
    #[prop_or_default]
    pub on_start: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_change: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_end: Callback<GestureEvent>,
    /// Deprecated alias of `on_end`.
    #[prop_or_default]
    pub on_release: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_multi_touch_start: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_multi_touch_change: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_multi_touch_end: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_rotate_start: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_rotate_change: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_rotate_end: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_scale_start: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_scale_change: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_scale_end: Callback<GestureEvent>,
    #[prop_or_default]
    pub on_drag_out_of_bounds: Callback<bool>,
    #[prop_or_default]
    pub on_touches_change: Callback<usize>,
}

impl GesturesProps {
    fn config(&self) -> GesturesConfig {
        GesturesConfig {
            draggable: self.draggable,
            rotatable: self.rotatable,
            scalable: self.scalable,
            snap_policy: self.snap_policy,
            container: self.container.unwrap_or_else(viewport_region),
            container_padding: self.container_padding,
            top_zindex: self.top_zindex,
        }
    }

    fn callbacks(&self) -> GestureCallbacks {
        GestureCallbacks {
            on_start: self.on_start.clone(),
            on_change: self.on_change.clone(),
            on_end: self.on_end.clone(),
            on_release: self.on_release.clone(),
            on_multi_touch_start: self.on_multi_touch_start.clone(),
            on_multi_touch_change: self.on_multi_touch_change.clone(),
            on_multi_touch_end: self.on_multi_touch_end.clone(),
            on_rotate_start: self.on_rotate_start.clone(),
            on_rotate_change: self.on_rotate_change.clone(),
            on_rotate_end: self.on_rotate_end.clone(),
            on_scale_start: self.on_scale_start.clone(),
            on_scale_change: self.on_scale_change.clone(),
            on_scale_end: self.on_scale_end.clone(),
            on_drag_out_of_bounds: self.on_drag_out_of_bounds.clone(),
            on_touches_change: self.on_touches_change.clone(),
        }
    }
}

/// Accumulates the gesture translation across contact-count changes: centroid
/// motion only counts while the contact count is stable, so a finger joining
/// or leaving never jolts the drag.
#[derive(Debug, Default)]
pub(crate) struct DragTracker {
    accum_dx: f64,
    accum_dy: f64,
    last_centroid: Option<(f64, f64)>,
    count: usize,
}

impl DragTracker {
    pub(crate) fn begin(&mut self, contacts: &[TouchContact]) {
        self.accum_dx = 0.0;
        self.accum_dy = 0.0;
        self.count = contacts.len();
        self.last_centroid = centroid(contacts);
    }

    pub(crate) fn track(&mut self, contacts: &[TouchContact]) -> Delta {
        let current = centroid(contacts);
        if contacts.len() == self.count {
            if let (Some((lx, ly)), Some((cx, cy))) = (self.last_centroid, current) {
                self.accum_dx += cx - lx;
                self.accum_dy += cy - ly;
            }
        } else {
            self.count = contacts.len();
        }
        self.last_centroid = current;
        Delta { dx: self.accum_dx, dy: self.accum_dy }
    }

    pub(crate) fn delta(&self) -> Delta {
        Delta { dx: self.accum_dx, dy: self.accum_dy }
    }
}

fn centroid(contacts: &[TouchContact]) -> Option<(f64, f64)> {
    if contacts.is_empty() {
        return None;
    }
    let n = contacts.len() as f64;
    let (sx, sy) = contacts
        .iter()
        .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
    Some((sx / n, sy / n))
}

fn viewport_region() -> ContainerRegion {
    let window = web_sys::window().expect("no global `window` exists");
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    ContainerRegion::new(0.0, 0.0, width, height)
}

fn list_contacts(event: &TouchEvent) -> Vec<TouchContact> {
    let touches = event.touches();
    (0..touches.length())
        .filter_map(|i| touches.get(i))
        .map(|t| TouchContact::new(t.client_x() as f64, t.client_y() as f64))
        .collect()
}

fn build_input(event: &TouchEvent, element: &HtmlElement, delta: Delta) -> TouchInput {
    let rect = element.get_bounding_client_rect();
    // At the final touchend the active list is empty; the lifted finger is
    // still available as a changed touch and anchors the release position.
    let anchor = event
        .touches()
        .get(0)
        .or_else(|| event.changed_touches().get(0))
        .map(|t| {
            let x = t.client_x() as f64;
            let y = t.client_y() as f64;
            Anchor {
                local_x: x - rect.left(),
                local_y: y - rect.top(),
                page_x: x,
                page_y: y,
            }
        });
    TouchInput { touches: list_contacts(event), anchor, delta }
}

fn apply_transform(element: &HtmlElement, transform: &Transform) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", transform.left));
    let _ = style.set_property("top", &format!("{}px", transform.top));
    let _ = style.set_property(
        "transform",
        &format!("rotate({}deg) scale({})", transform.rotation_degrees, transform.scale),
    );
    let _ = style.set_property("z-index", &transform.z_index.to_string());
}

#[function_component(Gestures)]
pub fn gestures(props: &GesturesProps) -> Html {
    let node_ref = use_node_ref();
    let controller = use_mut_ref(|| None::<GestureController>);
    let tracker = use_mut_ref(DragTracker::default);

    {
        let node_ref = node_ref.clone();
        let controller_setup = controller.clone();
        let tracker_setup = tracker.clone();
        let props = props.clone();
        use_effect_with((), move |_| {
            let element: HtmlElement = node_ref
                .cast::<HtmlElement>()
                .expect("gesture node_ref not attached to an element");

            let view = {
                let element = element.clone();
                Callback::from(move |t: Transform| apply_transform(&element, &t))
            };
            *controller_setup.borrow_mut() = Some(GestureController::with_transform(
                props.config(),
                props.callbacks(),
                view,
                props.initial_transform,
            ));

            let touch_start_cb = {
                let element = element.clone();
                let controller = controller_setup.clone();
                let tracker = tracker_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let contacts = list_contacts(&e);
                    tracker.borrow_mut().begin(&contacts);
                    let input = build_input(&e, &element, Delta::default());
                    if let Some(c) = controller.borrow_mut().as_mut() {
                        let rect = element.get_bounding_client_rect();
                        c.set_element_size(ElementSize::new(rect.width(), rect.height()));
                        c.handle_start(&input);
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            element
                .add_event_listener_with_callback("touchstart", touch_start_cb.as_ref().unchecked_ref())
                .ok();

            let touch_move_cb = {
                let element = element.clone();
                let controller = controller_setup.clone();
                let tracker = tracker_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let contacts = list_contacts(&e);
                    let delta = tracker.borrow_mut().track(&contacts);
                    let input = build_input(&e, &element, delta);
                    if let Some(c) = controller.borrow_mut().as_mut() {
                        c.handle_move(&input);
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            element
                .add_event_listener_with_callback("touchmove", touch_move_cb.as_ref().unchecked_ref())
                .ok();

            // touchend and touchcancel run the same transition: with contacts
            // remaining it re-baselines, with none it finalizes.
            let touch_end_cb = {
                let element = element.clone();
                let controller = controller_setup.clone();
                let tracker = tracker_setup.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    let contacts = list_contacts(&e);
                    let delta = if contacts.is_empty() {
                        tracker.borrow().delta()
                    } else {
                        tracker.borrow_mut().track(&contacts)
                    };
                    let input = build_input(&e, &element, delta);
                    if let Some(c) = controller.borrow_mut().as_mut() {
                        c.handle_end(&input);
                    }
                    e.prevent_default();
                }) as Box<dyn FnMut(_)>)
            };
            element
                .add_event_listener_with_callback("touchend", touch_end_cb.as_ref().unchecked_ref())
                .ok();
            element
                .add_event_listener_with_callback("touchcancel", touch_end_cb.as_ref().unchecked_ref())
                .ok();

            move || {
                let _ = element.remove_event_listener_with_callback(
                    "touchstart",
                    touch_start_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchmove",
                    touch_move_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchend",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                let _ = element.remove_event_listener_with_callback(
                    "touchcancel",
                    touch_end_cb.as_ref().unchecked_ref(),
                );
                // Keep the closures alive until the listeners are gone.
                let _keep_alive = (&touch_start_cb, &touch_move_cb, &touch_end_cb);
            }
        });
    }

    let t = props.initial_transform;
    let style = format!(
        "position:absolute; left:{}px; top:{}px; transform:rotate({}deg) scale({}); z-index:{}; touch-action:none;",
        t.left, t.top, t.rotation_degrees, t.scale, t.z_index
    );
    html! {
        <div ref={node_ref} style={style}>
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts(points: &[(f64, f64)]) -> Vec<TouchContact> {
        points.iter().map(|&(x, y)| TouchContact::new(x, y)).collect()
    }

    #[test]
    fn tracker_accumulates_centroid_motion() {
        let mut tracker = DragTracker::default();
        tracker.begin(&contacts(&[(10.0, 10.0)]));

        let d = tracker.track(&contacts(&[(25.0, 5.0)]));
        assert_eq!(d, Delta { dx: 15.0, dy: -5.0 });

        let d = tracker.track(&contacts(&[(30.0, 5.0)]));
        assert_eq!(d, Delta { dx: 20.0, dy: -5.0 });
    }

    #[test]
    fn contact_count_change_does_not_jolt_the_delta() {
        let mut tracker = DragTracker::default();
        tracker.begin(&contacts(&[(10.0, 10.0)]));
        tracker.track(&contacts(&[(20.0, 10.0)]));

        // A second finger lands far away: the centroid leaps, but the frame
        // where the count changes contributes nothing.
        let d = tracker.track(&contacts(&[(20.0, 10.0), (200.0, 10.0)]));
        assert_eq!(d, Delta { dx: 10.0, dy: 0.0 });

        // With the count stable again, both fingers moving tracks normally.
        let d = tracker.track(&contacts(&[(30.0, 10.0), (210.0, 10.0)]));
        assert_eq!(d, Delta { dx: 20.0, dy: 0.0 });
    }

    #[test]
    fn begin_resets_previous_accumulation() {
        let mut tracker = DragTracker::default();
        tracker.begin(&contacts(&[(0.0, 0.0)]));
        tracker.track(&contacts(&[(50.0, 50.0)]));

        tracker.begin(&contacts(&[(100.0, 100.0)]));
        assert_eq!(tracker.delta(), Delta { dx: 0.0, dy: 0.0 });
        let d = tracker.track(&contacts(&[(101.0, 100.0)]));
        assert_eq!(d, Delta { dx: 1.0, dy: 0.0 });
    }
}
