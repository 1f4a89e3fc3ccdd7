//! Containment check: does the element, projected from the touch anchor,
//! stick out of its container, and where should it snap back to.

use crate::model::{Anchor, AxisEdge, BoundsViolation, ContainerRegion, ElementSize, SnapTarget};

/// Projects the element's four page-space edges from the anchor and compares
/// them against the container. Returns `None` while fully contained.
///
/// The snap target is container-local. An axis that did not violate keeps its
/// straight-translated position, so a one-axis violation never makes the
/// element jump on the other axis. Pure: no state is read or written.
pub fn evaluate(
    size: ElementSize,
    container: ContainerRegion,
    anchor: Anchor,
    padding: f64,
) -> Option<BoundsViolation> {
    let bound_left = anchor.page_x - anchor.local_x;
    let bound_right = anchor.page_x + (size.width - anchor.local_x);
    let bound_top = anchor.page_y - anchor.local_y;
    let bound_bottom = anchor.page_y + (size.height - anchor.local_y);

    // Straight translated position: where the element sits right now,
    // container-local.
    let stp = SnapTarget {
        left: bound_left - container.x,
        top: bound_top - container.y,
    };

    let mut x = None;
    let mut y = None;
    let mut snap = stp;

    if bound_left < container.x {
        x = Some(AxisEdge::Min);
        snap.left = 0.0;
    } else if bound_right > container.x + container.width {
        x = Some(AxisEdge::Max);
        snap.left = container.width - size.width + padding;
    }

    if bound_top < container.y {
        y = Some(AxisEdge::Min);
        snap.top = 0.0;
    } else if bound_bottom > container.y + container.height {
        y = Some(AxisEdge::Max);
        snap.top = container.height - size.height + padding;
    }

    if x.is_none() && y.is_none() {
        None
    } else {
        Some(BoundsViolation { x, y, snap })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: ContainerRegion = ContainerRegion { x: 0.0, y: 0.0, width: 300.0, height: 300.0 };
    const SIZE: ElementSize = ElementSize { width: 100.0, height: 100.0 };

    fn anchor(local: (f64, f64), page: (f64, f64)) -> Anchor {
        Anchor { local_x: local.0, local_y: local.1, page_x: page.0, page_y: page.1 }
    }

    #[test]
    fn contained_element_reports_nothing() {
        let a = anchor((10.0, 10.0), (110.0, 110.0));
        assert_eq!(evaluate(SIZE, CONTAINER, a, 0.0), None);
    }

    #[test]
    fn left_overshoot_snaps_to_zero() {
        // Projected left edge at -20.
        let a = anchor((10.0, 10.0), (-10.0, 50.0));
        let v = evaluate(SIZE, CONTAINER, a, 0.0).unwrap();
        assert_eq!(v.x, Some(AxisEdge::Min));
        assert_eq!(v.y, None);
        assert_eq!(v.snap.left, 0.0);
        // Unviolated axis carries the straight translated position.
        assert_eq!(v.snap.top, 40.0);
    }

    #[test]
    fn right_overshoot_snaps_to_far_edge() {
        // Projected left edge at 250, right edge at 350.
        let a = anchor((50.0, 50.0), (300.0, 150.0));
        let v = evaluate(SIZE, CONTAINER, a, 0.0).unwrap();
        assert_eq!(v.x, Some(AxisEdge::Max));
        assert_eq!(v.snap.left, 200.0);
    }

    #[test]
    fn padding_extends_the_max_snap() {
        let a = anchor((50.0, 50.0), (300.0, 150.0));
        let v = evaluate(SIZE, CONTAINER, a, 8.0).unwrap();
        assert_eq!(v.snap.left, 208.0);
    }

    #[test]
    fn corner_overshoot_corrects_both_axes() {
        // Past the bottom-right corner on both axes.
        let a = anchor((50.0, 50.0), (310.0, 320.0));
        let v = evaluate(SIZE, CONTAINER, a, 0.0).unwrap();
        assert_eq!(v.x, Some(AxisEdge::Max));
        assert_eq!(v.y, Some(AxisEdge::Max));
        assert_eq!(v.snap, SnapTarget { left: 200.0, top: 200.0 });
    }

    #[test]
    fn offset_container_shifts_the_edges() {
        let container = ContainerRegion::new(50.0, 50.0, 300.0, 300.0);
        // Projected top-left at (60, 40): above the container's top edge.
        let a = anchor((0.0, 0.0), (60.0, 40.0));
        let v = evaluate(SIZE, container, a, 0.0).unwrap();
        assert_eq!(v.x, None);
        assert_eq!(v.y, Some(AxisEdge::Min));
        assert_eq!(v.snap.top, 0.0);
        assert_eq!(v.snap.left, 10.0);
    }
}
