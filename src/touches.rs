//! Touch extraction and delta helpers over a normalized [`TouchInput`].
//!
//! These are the thin, pure bridges between raw contact data and the state
//! machine: contact filtering, the multi-touch check, and the conversion of an
//! angle/distance delta into a candidate rotation/scale for the compositor.

use crate::model::{TouchContact, TouchInput, Transform};

/// Distance-to-scale sensitivity: pixels of finger spread per 1.0 of scale.
const PINCH_SCALE_DIVISOR: f64 = 400.0;

/// Active contact points in platform finger order. Contacts with non-finite
/// coordinates come from malformed payloads and are dropped here, which keeps
/// every downstream transform field finite.
pub fn get_touches(input: &TouchInput) -> Vec<TouchContact> {
    input.touches.iter().copied().filter(TouchContact::is_finite).collect()
}

/// True iff the event carries two or more usable contacts.
pub fn is_multi_touch(input: &TouchInput) -> bool {
    get_touches(input).len() >= 2
}

/// Rotation the compositor expects: the current rotation shifted by the
/// incremental angle delta computed by the state machine.
pub fn rotation_with_delta(transform: &Transform, angle_delta: f64) -> f64 {
    transform.rotation_degrees + angle_delta
}

/// Candidate scale for a finger-spread delta, proportional to the spread in
/// pixels. Unclamped: clamping to the configured range is the caller's job.
pub fn scale_with_delta(transform: &Transform, distance_delta: f64) -> f64 {
    transform.scale - distance_delta / PINCH_SCALE_DIVISOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Delta;

    fn input_of(points: &[(f64, f64)]) -> TouchInput {
        TouchInput {
            touches: points.iter().map(|&(x, y)| TouchContact::new(x, y)).collect(),
            anchor: None,
            delta: Delta::default(),
        }
    }

    #[test]
    fn get_touches_preserves_finger_order() {
        let input = input_of(&[(5.0, 6.0), (7.0, 8.0)]);
        let touches = get_touches(&input);
        assert_eq!(touches, vec![TouchContact::new(5.0, 6.0), TouchContact::new(7.0, 8.0)]);
    }

    #[test]
    fn non_finite_contacts_are_dropped() {
        let input = input_of(&[(5.0, 6.0), (f64::NAN, 8.0), (1.0, f64::INFINITY)]);
        assert_eq!(get_touches(&input), vec![TouchContact::new(5.0, 6.0)]);
        assert!(!is_multi_touch(&input));
    }

    #[test]
    fn multi_touch_needs_two_usable_contacts() {
        assert!(!is_multi_touch(&input_of(&[(1.0, 1.0)])));
        assert!(is_multi_touch(&input_of(&[(1.0, 1.0), (2.0, 2.0)])));
    }

    #[test]
    fn rotation_shifts_current_rotation() {
        let transform = Transform { rotation_degrees: 30.0, ..Default::default() };
        assert_eq!(rotation_with_delta(&transform, -12.5), 17.5);
    }

    #[test]
    fn spreading_fingers_grows_the_scale_candidate() {
        let transform = Transform { scale: 1.0, ..Default::default() };
        // Fingers moved 200px further apart than at baseline: the state
        // machine hands a negative delta (prev - increased).
        assert_eq!(scale_with_delta(&transform, -200.0), 1.5);
        // Pinching in shrinks it.
        assert_eq!(scale_with_delta(&transform, 100.0), 0.75);
    }
}
