//! Planar kinematics for a fixed 5-link chain.
//!
//! The chain rests pointing straight up from its base pivot; each joint
//! angle is a delta in degrees applied on top of the previous link's
//! heading. Canvas coordinates, so y grows downward.

use egui::{Pos2, Vec2};

use crate::constants::{ANGLE_MAX, ANGLE_MIN, JOINT_COUNT, JOINT_HIT_RADIUS, LINK_LENGTH};

pub type JointAngles = [f32; JOINT_COUNT];

/// Heading of the chain with all joints at zero: straight up.
const REST_HEADING: f32 = -std::f32::consts::FRAC_PI_2;

/// One posable arm: its base pivot plus the joint angles in degrees.
#[derive(Clone, Debug)]
pub struct Arm {
    pub base: Pos2,
    pub angles: JointAngles,
}

impl Arm {
    pub fn new(base: Pos2) -> Self {
        Self {
            base,
            angles: [0.0; JOINT_COUNT],
        }
    }

    /// The base pivot followed by the end point of each link.
    pub fn joint_positions(&self) -> [Pos2; JOINT_COUNT + 1] {
        let mut points = [self.base; JOINT_COUNT + 1];
        let mut heading = REST_HEADING;
        for (i, angle) in self.angles.iter().enumerate() {
            heading += angle.to_radians();
            points[i + 1] = points[i] + LINK_LENGTH * Vec2::angled(heading);
        }
        points
    }

    /// Writes a joint angle, clamped into the legal range.
    pub fn set_angle(&mut self, joint: usize, degrees: f32) {
        self.angles[joint] = degrees.clamp(ANGLE_MIN, ANGLE_MAX);
    }

    pub fn set_angles(&mut self, angles: JointAngles) {
        for (joint, degrees) in angles.into_iter().enumerate() {
            self.set_angle(joint, degrees);
        }
    }

    /// Every joint negated, for driving the opposite arm in sync mode.
    pub fn mirrored(&self) -> JointAngles {
        let mut out = self.angles;
        for a in &mut out {
            *a = -*a;
        }
        out
    }
}

/// First pivot within grab range of the pointer. The end-effector point
/// (index `JOINT_COUNT`) has no joint behind it and is never returned.
pub fn joint_at(positions: &[Pos2; JOINT_COUNT + 1], pointer: Pos2) -> Option<usize> {
    positions[..JOINT_COUNT]
        .iter()
        .position(|p| p.distance(pointer) < JOINT_HIT_RADIUS)
}

/// Angle in degrees that would swing `joint`'s link toward the pointer.
///
/// Joint 0 is measured against the rest heading; every other joint is
/// measured against the direction of the link before it. The caller is
/// expected to clamp before storing.
pub fn angle_from_pointer(
    positions: &[Pos2; JOINT_COUNT + 1],
    joint: usize,
    pointer: Pos2,
) -> f32 {
    if joint == 0 {
        let d = pointer - positions[0];
        d.y.atan2(d.x).to_degrees() + 90.0
    } else {
        let prev = positions[joint - 1];
        let to_pointer = pointer - prev;
        let along_link = positions[joint] - prev;
        let raw = to_pointer.y.atan2(to_pointer.x).to_degrees()
            - along_link.y.atan2(along_link.x).to_degrees();
        normalize_degrees(raw)
    }
}

/// Wraps an angle into [-180, 180].
pub fn normalize_degrees(mut angle: f32) -> f32 {
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    const EPS: f32 = 1e-3;

    fn upright_arm() -> Arm {
        Arm::new(pos2(400.0, 500.0))
    }

    #[test]
    fn rest_pose_stacks_links_straight_up() {
        let positions = upright_arm().joint_positions();
        for (i, p) in positions.iter().enumerate() {
            assert!((p.x - 400.0).abs() < EPS);
            assert!((p.y - (500.0 - 80.0 * i as f32)).abs() < EPS);
        }
    }

    #[test]
    fn base_rotation_swings_the_whole_chain() {
        let mut arm = upright_arm();
        arm.set_angle(0, 90.0);
        let positions = arm.joint_positions();
        // Heading becomes horizontal, so the chain extends 400px along +x.
        assert!((positions[5].x - 800.0).abs() < EPS);
        assert!((positions[5].y - 500.0).abs() < EPS);
    }

    #[test]
    fn joint_angles_accumulate_down_the_chain() {
        let mut arm = upright_arm();
        arm.set_angle(1, 90.0);
        let positions = arm.joint_positions();
        // First link still vertical, everything after the elbow horizontal.
        assert!((positions[1].x - 400.0).abs() < EPS);
        assert!((positions[1].y - 420.0).abs() < EPS);
        assert!((positions[2].x - 480.0).abs() < EPS);
        assert!((positions[2].y - 420.0).abs() < EPS);
        assert!((positions[5].x - 720.0).abs() < EPS);
    }

    #[test]
    fn set_angle_clamps_to_limits() {
        let mut arm = upright_arm();
        arm.set_angle(2, 135.0);
        assert_eq!(arm.angles[2], 90.0);
        arm.set_angle(2, -200.0);
        assert_eq!(arm.angles[2], -90.0);
    }

    #[test]
    fn hit_test_picks_the_first_pivot_in_range() {
        let positions = upright_arm().joint_positions();
        assert_eq!(joint_at(&positions, pos2(403.0, 497.0)), Some(0));
        assert_eq!(joint_at(&positions, pos2(400.0, 420.0)), Some(1));
        assert_eq!(joint_at(&positions, pos2(350.0, 500.0)), None);
    }

    #[test]
    fn hit_test_boundary_is_exclusive() {
        let positions = upright_arm().joint_positions();
        assert_eq!(joint_at(&positions, pos2(410.0, 500.0)), None);
        assert_eq!(joint_at(&positions, pos2(409.9, 500.0)), Some(0));
    }

    #[test]
    fn end_effector_is_not_grabbable() {
        let positions = upright_arm().joint_positions();
        assert_eq!(joint_at(&positions, positions[5]), None);
    }

    #[test]
    fn base_solver_measures_from_vertical() {
        let positions = upright_arm().joint_positions();
        // Straight above the base is the rest pose.
        assert!(angle_from_pointer(&positions, 0, pos2(400.0, 400.0)).abs() < EPS);
        // Due right of the base is a quarter turn.
        assert!((angle_from_pointer(&positions, 0, pos2(500.0, 500.0)) - 90.0).abs() < EPS);
        // Due left is a quarter turn the other way.
        assert!((angle_from_pointer(&positions, 0, pos2(300.0, 500.0)) + 90.0).abs() < EPS);
    }

    #[test]
    fn solver_is_relative_to_the_previous_link() {
        let positions = upright_arm().joint_positions();
        // Pointer due right of the previous pivot while the previous link
        // points straight up: a quarter turn clockwise.
        let angle = angle_from_pointer(&positions, 1, pos2(500.0, 500.0));
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn solver_stays_finite_with_pointer_on_the_pivot() {
        let positions = upright_arm().joint_positions();
        assert!(angle_from_pointer(&positions, 0, positions[0]).is_finite());
        assert!(angle_from_pointer(&positions, 3, positions[2]).is_finite());
    }

    #[test]
    fn normalize_wraps_into_half_turn_range() {
        assert_eq!(normalize_degrees(270.0), -90.0);
        assert_eq!(normalize_degrees(-270.0), 90.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
    }

    #[test]
    fn mirrored_negates_every_joint() {
        let mut arm = upright_arm();
        arm.angles = [10.0, -20.0, 30.0, -40.0, 50.0];
        assert_eq!(arm.mirrored(), [-10.0, 20.0, -30.0, 40.0, -50.0]);
    }

    #[test]
    fn set_angles_clamps_each_entry() {
        let mut arm = upright_arm();
        arm.set_angles([120.0, -120.0, 45.0, 0.0, 89.9]);
        assert_eq!(arm.angles[0], 90.0);
        assert_eq!(arm.angles[1], -90.0);
        assert_eq!(arm.angles[2], 45.0);
    }
}
