//! Drag-gesture classification: maps a pointer drag on a grabbed sticker to
//! a move token.
//!
//! Screen coordinates are in pixels with Y growing downward. The mapping
//! tables assume the fixed default camera: front face toward the viewer,
//! up face on top, right face to the right.

use cgmath::{Point2, Vector3};
use float_ord::FloatOrd;
use quarterturn_core::{Axis, Face, Move, PieceId, Sign, TwistDirection};
use strum::IntoEnumIterator;

use crate::traits::CameraNav;

/// Minimum drag distance, in pixels, for a pointer gesture to count as a
/// turn. Shorter drags are treated as accidental and produce no move.
pub const DRAG_THRESHOLD_PX: f32 = 20.0;

/// Which way a drag predominantly travels on screen. Ties go to horizontal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(usize)]
enum DragOrientation {
    Horizontal = 0,
    Vertical = 1,
}

/// Rotation axis for a drag, indexed by [grabbed-face axis][orientation].
const ROTATION_AXIS: [[Axis; 2]; 3] = [
    [Axis::Y, Axis::X], // grab on X face (R/L)
    [Axis::Z, Axis::X], // grab on Y face (U/D)
    [Axis::Y, Axis::X], // grab on Z face (F/B)
];

/// Whether a positive screen delta (rightward or downward) turns the
/// positive layer counter-clockwise, indexed like [`ROTATION_AXIS`].
const CCW_ON_POSITIVE_DELTA: [[bool; 2]; 3] = [
    [true, true],
    [true, false],
    [true, false],
];

/// What the pointer grabbed at drag start, from the embedding application's
/// hit test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GrabInfo {
    /// Piece under the pointer.
    pub piece: PieceId,
    /// Logical grid position of that piece at grab time.
    pub grid_pos: Vector3<i32>,
    /// Outward world-space normal of the sticker face hit.
    pub face_normal: Vector3<f32>,
}

/// Classifies a completed drag as a move, or `None` if the drag is too short
/// or grabs a centerless middle layer.
pub fn classify_drag(start: Point2<f32>, end: Point2<f32>, grab: &GrabInfo) -> Option<Move> {
    let delta = end - start;
    if delta.x.hypot(delta.y) < DRAG_THRESHOLD_PX {
        return None;
    }

    let orientation = if delta.y.abs() > delta.x.abs() {
        DragOrientation::Vertical
    } else {
        DragOrientation::Horizontal
    };

    // The face the sticker belongs to is whichever axis dominates its
    // world-space normal. The hit test hands us a float normal so the camera
    // layer never needs to know about grid coordinates.
    let grabbed_axis = Axis::iter()
        .max_by_key(|&axis| FloatOrd(grab.face_normal[axis as usize].abs()))
        .unwrap_or(Axis::X);

    let rotation_axis = ROTATION_AXIS[grabbed_axis as usize][orientation as usize];
    // Middle layers have no face token in the move notation; those drags are
    // dropped rather than guessed at.
    let layer = Sign::of(grab.grid_pos[rotation_axis as usize])?;
    let face = Face::from_axis_sign(rotation_axis, layer);

    let along = match orientation {
        DragOrientation::Horizontal => delta.x,
        DragOrientation::Vertical => delta.y,
    };
    let mut ccw =
        CCW_ON_POSITIVE_DELTA[grabbed_axis as usize][orientation as usize] == (along > 0.0);
    // The notation's turn direction is viewed head-on from outside each face,
    // so the same world rotation reads opposite on the negative layer.
    if layer == Sign::Neg {
        ccw = !ccw;
    }
    let direction = if ccw {
        TwistDirection::Ccw
    } else {
        TwistDirection::Cw
    };

    Some(Move::new(face, direction))
}

#[derive(Debug, Copy, Clone)]
struct DragStart {
    screen_pos: Point2<f32>,
    grab: GrabInfo,
}

/// Tracks one pointer drag from press to release.
///
/// While a drag is live, orbit navigation is disabled so turning a slice
/// does not also move the camera; release re-enables it unconditionally.
#[derive(Debug, Default)]
pub struct DragController {
    drag: Option<DragStart>,
}
impl DragController {
    /// Constructs a controller with no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles pointer press. A drag only starts when the pointer hit a
    /// sticker and no turn is animating; otherwise the press is left to the
    /// camera. Returns whether a drag started.
    pub fn pointer_down(
        &mut self,
        screen_pos: Point2<f32>,
        hit: Option<GrabInfo>,
        is_animating: bool,
        nav: &mut impl CameraNav,
    ) -> bool {
        if is_animating {
            log::debug!("drag ignored: turn in flight");
            return false;
        }
        let Some(grab) = hit else {
            return false;
        };
        nav.set_enabled(false);
        self.drag = Some(DragStart { screen_pos, grab });
        true
    }

    /// Handles pointer release: re-enables navigation and classifies the
    /// drag, if one was live, into a move.
    pub fn pointer_up(
        &mut self,
        screen_pos: Point2<f32>,
        nav: &mut impl CameraNav,
    ) -> Option<Move> {
        nav.set_enabled(true);
        let start = self.drag.take()?;
        classify_drag(start.screen_pos, screen_pos, &start.grab)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{point2, vec3};
    use pretty_assertions::assert_eq;

    use super::*;

    fn grab(grid_pos: Vector3<i32>, face_normal: Vector3<f32>) -> GrabInfo {
        GrabInfo {
            piece: PieceId(0),
            grid_pos,
            face_normal,
        }
    }

    fn classify(dx: f32, dy: f32, grab: &GrabInfo) -> Option<Move> {
        classify_drag(point2(100.0, 100.0), point2(100.0 + dx, 100.0 + dy), grab)
    }

    #[track_caller]
    fn assert_move(dx: f32, dy: f32, grab: &GrabInfo, expected: &str) {
        assert_eq!(
            classify(dx, dy, grab),
            Some(expected.parse().unwrap()),
            "drag ({dx}, {dy})",
        );
    }

    #[test]
    fn short_drags_are_ignored() {
        let g = grab(vec3(1, 1, 1), vec3(0.0, 0.0, 1.0));
        assert_eq!(classify(10.0, 10.0, &g), None);
        assert_eq!(classify(19.9, 0.0, &g), None);
        assert!(classify(21.0, 0.0, &g).is_some());
    }

    #[test]
    fn middle_layer_drags_are_ignored() {
        // Vertical drag on the front face rotates about X, but this sticker
        // sits in the X middle layer.
        let g = grab(vec3(0, 1, 1), vec3(0.0, 0.0, 1.0));
        assert_eq!(classify(0.0, 50.0, &g), None);
        // Horizontally the same sticker is in the top layer, so that works.
        assert!(classify(50.0, 0.0, &g).is_some());
    }

    #[test]
    fn front_face_drags() {
        let g = grab(vec3(1, 1, 1), vec3(0.0, 0.0, 1.0));
        assert_move(50.0, 0.0, &g, "U'"); // right
        assert_move(-50.0, 0.0, &g, "U"); // left
        assert_move(0.0, 50.0, &g, "R"); // down
        assert_move(0.0, -50.0, &g, "R'"); // up

        let g = grab(vec3(-1, -1, 1), vec3(0.0, 0.0, 1.0));
        assert_move(50.0, 0.0, &g, "D"); // right, bottom layer
        assert_move(0.0, 50.0, &g, "L'"); // down, left layer
    }

    #[test]
    fn up_face_drags() {
        let g = grab(vec3(1, 1, 1), vec3(0.0, 1.0, 0.0));
        assert_move(50.0, 0.0, &g, "F'"); // right
        assert_move(-50.0, 0.0, &g, "F"); // left
        assert_move(0.0, 50.0, &g, "R"); // down
        assert_move(0.0, -50.0, &g, "R'"); // up

        let g = grab(vec3(-1, 1, -1), vec3(0.0, 1.0, 0.0));
        assert_move(50.0, 0.0, &g, "B"); // right, back layer
        assert_move(0.0, 50.0, &g, "L'"); // down, left layer
    }

    #[test]
    fn right_face_drags() {
        let g = grab(vec3(1, 1, 1), vec3(1.0, 0.0, 0.0));
        assert_move(50.0, 0.0, &g, "U'"); // right
        assert_move(0.0, 50.0, &g, "R'"); // down
        assert_move(0.0, -50.0, &g, "R"); // up

        let g = grab(vec3(1, -1, 1), vec3(1.0, 0.0, 0.0));
        assert_move(50.0, 0.0, &g, "D"); // right, bottom layer
    }

    #[test]
    fn diagonal_ties_go_horizontal() {
        let g = grab(vec3(1, 1, 1), vec3(0.0, 0.0, 1.0));
        assert_move(50.0, 50.0, &g, "U'");
        assert_move(50.0, 50.1, &g, "R");
    }

    #[test]
    fn drag_lifecycle_toggles_navigation() {
        #[derive(Default)]
        struct Nav {
            enabled_calls: Vec<bool>,
        }
        impl CameraNav for Nav {
            fn set_enabled(&mut self, enabled: bool) {
                self.enabled_calls.push(enabled);
            }
        }

        let mut nav = Nav::default();
        let mut controller = DragController::new();
        let g = grab(vec3(1, 1, 1), vec3(0.0, 0.0, 1.0));

        // Miss: camera keeps the pointer.
        assert!(!controller.pointer_down(point2(0.0, 0.0), None, false, &mut nav));
        assert_eq!(nav.enabled_calls, Vec::<bool>::new());

        // Hit during an animation: ignored.
        assert!(!controller.pointer_down(point2(0.0, 0.0), Some(g), true, &mut nav));
        assert_eq!(controller.pointer_up(point2(100.0, 0.0), &mut nav), None);
        assert_eq!(nav.enabled_calls, vec![true]);

        // Full drag: navigation off at press, on at release.
        assert!(controller.pointer_down(point2(0.0, 0.0), Some(g), false, &mut nav));
        let mv = controller.pointer_up(point2(50.0, 0.0), &mut nav);
        assert_eq!(mv, Some("U'".parse().unwrap()));
        assert_eq!(nav.enabled_calls, vec![true, false, true]);
    }
}
