//! The gesture state machine: raw contact updates in, transform updates and
//! lifecycle callbacks out.
//!
//! One controller owns one element's transform. All entry points run
//! synchronously on the host's dispatch path; there is no queuing and no
//! internal parallelism. Phases: idle, active (any contact count), back to
//! idle when the last contact lifts. Fingers joining or leaving mid-gesture
//! re-baseline the session instead of ending it.

use log::{debug, error};
use yew::Callback;

use crate::bounds;
use crate::callbacks::GestureCallbacks;
use crate::compose::{self, DragFragment, PinchFragment};
use crate::config::{GesturesConfig, Scalable, SnapPolicy};
use crate::geometry::{self, InsufficientContactsError};
use crate::model::{ElementSize, GestureEvent, TouchContact, TouchInput, Transform};
use crate::state::session::GestureSession;
use crate::touches;

pub struct GestureController {
    config: GesturesConfig,
    callbacks: GestureCallbacks,
    /// External view-update collaborator: receives every transform the
    /// controller commits. Fire-and-forget.
    view: Callback<Transform>,
    transform: Transform,
    element_size: ElementSize,
    session: Option<GestureSession>,
}

impl GestureController {
    pub fn new(config: GesturesConfig, callbacks: GestureCallbacks, view: Callback<Transform>) -> Self {
        Self::with_transform(config, callbacks, view, Transform::default())
    }

    pub fn with_transform(
        config: GesturesConfig,
        callbacks: GestureCallbacks,
        view: Callback<Transform>,
        initial: Transform,
    ) -> Self {
        Self {
            config: config.normalized(),
            callbacks,
            view,
            transform: initial,
            element_size: ElementSize::default(),
            session: None,
        }
    }

    /// The authoritative transform as of the last committed update.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// True while a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Refreshes the rendered element size the bounds evaluator projects
    /// from. The adapter measures at gesture start.
    pub fn set_element_size(&mut self, size: ElementSize) {
        self.element_size = size;
    }

    /// First contact went down. Allocates a fresh session, discarding any
    /// stale one left over from a gesture the host never finished.
    pub fn handle_start(&mut self, input: &TouchInput) {
        if !self.config.draggable.is_enabled() {
            return;
        }
        let contacts = touches::get_touches(input);
        let count = contacts.len();
        let mut session = GestureSession::begin(contacts, self.transform);
        let started_multi = count > 1;
        session.multi_touching = started_multi;
        self.session = Some(session);
        debug!("gesture start with {count} contact(s)");

        self.callbacks.on_start.emit(self.event(input));
        self.callbacks.on_touches_change.emit(count.max(1));
        if started_multi {
            self.callbacks.on_multi_touch_start.emit(self.event(input));
        }
    }

    /// Contact positions updated. Computes drag/pinch fragments against the
    /// session baseline, evaluates containment, commits the composed
    /// transform, and notifies.
    pub fn handle_move(&mut self, input: &TouchInput) {
        if !self.config.draggable.is_enabled() {
            return;
        }
        let Some(mut session) = self.session.take() else {
            return;
        };
        let contacts = touches::get_touches(input);
        if contacts.is_empty() {
            // The host skipped the end notification; run the same end logic.
            self.session = Some(session);
            self.finish(input);
            return;
        }

        let count = contacts.len();
        if count != session.touch_count() {
            // Silent re-baseline: no deltas this frame, so the finger change
            // cannot produce a jump.
            session.rebaseline(contacts);
            self.callbacks.on_touches_change.emit(count);
        } else {
            self.apply_drag(input, &mut session);
            if count >= 2 {
                self.apply_pinch(input, &contacts, &mut session);
            }
        }

        if count >= 2 && !session.multi_touching {
            session.multi_touching = true;
            self.callbacks.on_multi_touch_start.emit(self.event(input));
        } else if session.multi_touching {
            self.callbacks.on_multi_touch_change.emit(self.event(input));
        }

        self.transform = compose::compose(self.transform, session.drag, session.pinch);
        self.session = Some(session);
        self.view.emit(self.transform);
        self.callbacks.on_change.emit(self.event(input));
    }

    /// A contact lifted. With contacts remaining this is a re-baseline, not
    /// an end; with none the gesture finalizes. Also the entry point for
    /// host-side termination/cancel.
    pub fn handle_end(&mut self, input: &TouchInput) {
        if !self.config.draggable.is_enabled() {
            return;
        }
        let contacts = touches::get_touches(input);
        if !contacts.is_empty() {
            let Some(session) = self.session.as_mut() else {
                return;
            };
            if contacts.len() != session.touch_count() {
                let count = contacts.len();
                session.rebaseline(contacts);
                self.callbacks.on_touches_change.emit(count);
            }
            return;
        }
        self.finish(input);
    }

    fn finish(&mut self, input: &TouchInput) {
        // Taking the session up front makes a repeated end a no-op and keeps
        // the machine consistent even if a host callback panics mid-sequence.
        let Some(session) = self.session.take() else {
            return;
        };
        debug!("gesture end");

        let event = self.event(input);
        self.callbacks.on_end.emit(event.clone());
        // Deprecated alias, same transition point.
        self.callbacks.on_release.emit(event);
        if session.rotating {
            self.callbacks.on_rotate_end.emit(self.event(input));
        }
        if session.scaling {
            self.callbacks.on_scale_end.emit(self.event(input));
        }
        if session.multi_touching {
            self.callbacks.on_multi_touch_end.emit(self.event(input));
        }
        if session.out_of_bounds {
            self.callbacks.on_drag_out_of_bounds.emit(false);
        }

        if self.config.snap_policy == SnapPolicy::OnRelease {
            if let Some(anchor) = input.anchor {
                let violation = bounds::evaluate(
                    self.element_size,
                    self.config.container,
                    anchor,
                    self.config.container_padding,
                );
                if let Some(v) = violation {
                    self.transform.left = v.snap.left;
                    self.transform.top = v.snap.top;
                    self.view.emit(self.transform);
                }
            }
        }
    }

    fn apply_drag(&self, input: &TouchInput, session: &mut GestureSession) {
        let initial = session.initial_transform;
        let left = if self.config.draggable.x() {
            initial.left + input.delta.dx
        } else {
            initial.left
        };
        let top = if self.config.draggable.y() {
            initial.top + input.delta.dy
        } else {
            initial.top
        };
        let mut drag = DragFragment { left, top, z_index: self.config.top_zindex };

        let violation = input.anchor.and_then(|anchor| {
            bounds::evaluate(
                self.element_size,
                self.config.container,
                anchor,
                self.config.container_padding,
            )
        });
        // Edge-triggered: the callback fires on transitions, never while the
        // state holds.
        match (session.out_of_bounds, violation.is_some()) {
            (false, true) => {
                session.out_of_bounds = true;
                self.callbacks.on_drag_out_of_bounds.emit(true);
            }
            (true, false) => {
                session.out_of_bounds = false;
                self.callbacks.on_drag_out_of_bounds.emit(false);
            }
            _ => {}
        }

        if self.config.snap_policy == SnapPolicy::OnMove {
            if let Some(v) = violation {
                drag.left = v.snap.left;
                drag.top = v.snap.top;
            }
        }
        session.drag = Some(drag);
    }

    fn apply_pinch(&self, input: &TouchInput, contacts: &[TouchContact], session: &mut GestureSession) {
        let mut fragment = PinchFragment::default();

        if self.config.rotatable {
            match self.rotation_update(contacts, session) {
                Ok(rotation) => {
                    fragment.rotation_degrees = Some(rotation);
                    if session.rotating {
                        self.callbacks.on_rotate_change.emit(self.event(input));
                    } else {
                        session.rotating = true;
                        self.callbacks.on_rotate_start.emit(self.event(input));
                    }
                }
                Err(err) => error!("rotation update skipped: {err}"),
            }
        }

        if let Scalable::Range { min, max } = self.config.scalable {
            match self.scale_update(contacts, session) {
                Ok(candidate) => {
                    fragment.scale = Some(candidate.clamp(min, max));
                    if session.scaling {
                        self.callbacks.on_scale_change.emit(self.event(input));
                    } else {
                        session.scaling = true;
                        self.callbacks.on_scale_start.emit(self.event(input));
                    }
                }
                Err(err) => error!("scale update skipped: {err}"),
            }
        }

        session.pinch = Some(fragment);
    }

    /// Incremental rotation: the angle offset grown since baseline, minus the
    /// part already consumed, applied to the current rotation.
    fn rotation_update(
        &self,
        contacts: &[TouchContact],
        session: &mut GestureSession,
    ) -> Result<f64, InsufficientContactsError> {
        let current_angle = geometry::angle(contacts)?;
        let initial_angle = if session.touch_count() > 1 {
            geometry::angle(&session.initial_touches)?
        } else {
            // No rotation is attributed until a true multi-touch baseline
            // exists.
            current_angle
        };
        let new_angle = current_angle - initial_angle;
        let diff = session.prev_angle - new_angle;
        session.prev_angle = new_angle;
        Ok(touches::rotation_with_delta(&self.transform, diff))
    }

    /// Incremental scale, unclamped; the caller clamps to the configured
    /// range.
    fn scale_update(
        &self,
        contacts: &[TouchContact],
        session: &mut GestureSession,
    ) -> Result<f64, InsufficientContactsError> {
        let current_distance = geometry::distance(contacts)?;
        let initial_distance = geometry::distance(&session.initial_touches)?;
        let increased = current_distance - initial_distance;
        let diff = session.prev_distance - increased;
        session.prev_distance = increased;
        Ok(touches::scale_with_delta(&self.transform, diff))
    }

    fn event(&self, input: &TouchInput) -> GestureEvent {
        GestureEvent { input: input.clone(), transform: self.transform }
    }
}
