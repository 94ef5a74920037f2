//! Steering decision for the rocket autopilot.
//!
//! Maps the rocket's kinematic state and a target point to a discrete turn
//! command, once per simulation tick. The decision steers the *effective
//! heading* — current drift blended with forward thrust — rather than the
//! nose alone, so the command tracks where the rocket will actually travel.

use funcrocket_core::commands::TurnCommand;
use funcrocket_core::constants::THRUST_BLEND_WEIGHT;
use funcrocket_core::types::{RocketState, Vec2};

/// Decide the turn command for the current tick.
///
/// Computes the signed angle from the effective heading to the bearing of
/// `target` and maps its sign to a command. Degenerate geometry — the target
/// sitting exactly on the rocket, or drift exactly cancelling thrust —
/// resolves to `TurnCommand::None`.
pub fn decide(rocket: &RocketState, target: Vec2) -> TurnCommand {
    let effective = rocket.velocity + rocket.facing() * THRUST_BLEND_WEIGHT;
    let desired = target - rocket.location;

    let angle = signed_angle(effective, desired);

    if angle == 0.0 {
        TurnCommand::None
    } else if angle < 0.0 {
        TurnCommand::Right
    } else {
        TurnCommand::Left
    }
}

/// Signed angle from `from` to `to` in radians.
///
/// Magnitude is the unsigned angle between the two directions; the sign of
/// the cross product picks the rotation direction. Returns 0.0 when either
/// vector has no direction to measure.
pub fn signed_angle(from: Vec2, to: Vec2) -> f64 {
    let (Some(a), Some(b)) = (from.normalized(), to.normalized()) else {
        return 0.0;
    };

    let cos = a.dot(b);
    let sin = a.cross(b);

    let rotation = if sin == 0.0 {
        // Exactly opposite bearings leave no cross product to pick a side.
        // Commit to a negative (rightward) rotation when the directions
        // oppose on both axes; otherwise the magnitude is zero anyway.
        if a.x * b.x < 0.0 && a.y * b.y < 0.0 {
            -1.0
        } else {
            1.0
        }
    } else if sin < 0.0 {
        -1.0
    } else {
        1.0
    };

    cos.clamp(-1.0, 1.0).acos() * rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use funcrocket_core::constants::START_HEADING;

    fn hovering(location: Vec2, heading: f64) -> RocketState {
        RocketState::new(location, Vec2::ZERO, heading)
    }

    #[test]
    fn test_target_dead_ahead_holds_heading() {
        // Heading straight up, target straight up. Offset length is a power
        // of two so normalization is exact and the angle is exactly zero.
        let rocket = hovering(Vec2::new(200.0, 500.0), START_HEADING);
        let target = rocket.location + Vec2::new(0.0, -4.0);

        assert_eq!(decide(&rocket, target), TurnCommand::None);
    }

    #[test]
    fn test_target_counter_clockwise_turns_left() {
        let rocket = hovering(Vec2::new(200.0, 500.0), START_HEADING);
        let ahead = Vec2::new(0.0, -4.0);
        let target = rocket.location + ahead.rotate(0.3);

        assert_eq!(decide(&rocket, target), TurnCommand::Left);
    }

    #[test]
    fn test_target_clockwise_turns_right() {
        let rocket = hovering(Vec2::new(200.0, 500.0), START_HEADING);
        let ahead = Vec2::new(0.0, -4.0);
        let target = rocket.location + ahead.rotate(-0.3);

        assert_eq!(decide(&rocket, target), TurnCommand::Right);
    }

    #[test]
    fn test_drift_outweighs_nose() {
        // Nose points up but a strong rightward drift dominates the blend:
        // the effective heading is mostly +x, so a target straight ahead of
        // the *nose* now sits on the negative-angle side of the blend.
        let rocket = RocketState::new(
            Vec2::new(200.0, 500.0),
            Vec2::new(50.0, 0.0),
            START_HEADING,
        );
        let target = rocket.location + Vec2::new(0.0, -100.0);

        assert_eq!(decide(&rocket, target), TurnCommand::Right);
    }

    #[test]
    fn test_coincident_target_holds_heading() {
        let rocket = hovering(Vec2::new(321.0, 123.0), 1.25);

        assert_eq!(decide(&rocket, rocket.location), TurnCommand::None);
    }

    #[test]
    fn test_cancelled_effective_heading_holds_heading() {
        // Drift exactly cancels the blended thrust vector.
        let heading = 1.0;
        let drift = -(Vec2::from_angle(heading) * THRUST_BLEND_WEIGHT);
        let rocket = RocketState::new(Vec2::new(100.0, 100.0), drift, heading);

        assert_eq!(decide(&rocket, Vec2::new(400.0, 300.0)), TurnCommand::None);
    }

    #[test]
    fn test_signed_angle_quarter_turns() {
        let right = Vec2::new(1.0, 0.0);
        let down = Vec2::new(0.0, 1.0);

        let ccw = signed_angle(right, down);
        assert!((ccw - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let cw = signed_angle(down, right);
        assert!((cw + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_signed_angle_opposite_on_axis_is_positive() {
        // Axis-aligned opposites never oppose on both axes, so the tie-break
        // keeps the positive rotation: a full half-turn to the left.
        let angle = signed_angle(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        assert_eq!(angle, std::f64::consts::PI);
    }

    #[test]
    fn test_signed_angle_opposite_off_axis_is_negative() {
        // Directions opposing on both axes take the rightward half-turn.
        let angle = signed_angle(Vec2::new(0.6, -0.8), Vec2::new(-0.6, 0.8));
        assert_eq!(angle, -std::f64::consts::PI);
    }

    #[test]
    fn test_signed_angle_degenerate_inputs_are_zero() {
        assert_eq!(signed_angle(Vec2::ZERO, Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(signed_angle(Vec2::new(1.0, 0.0), Vec2::ZERO), 0.0);
        assert_eq!(signed_angle(Vec2::ZERO, Vec2::ZERO), 0.0);
    }
}
