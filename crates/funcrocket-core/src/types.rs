//! Fundamental geometric and kinematic types.

use serde::{Deserialize, Serialize};

/// 2D vector in world space.
/// Screen convention: x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector along `angle` radians (angle 0 points along +x).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Dot product.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Signed cross product (z-component): `self.x * other.y - other.x * self.y`.
    /// Its sign picks the rotation direction from `self` to `other`.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Rotate by `angle` radians, same orientation as [`Vec2::cross`].
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Unit vector with the same direction, or `None` for the zero vector.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len == 0.0 {
            None
        } else {
            Some(self * (1.0 / len))
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, factor: f64) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

/// Playing-field dimensions, supplied by the simulation loop at field
/// evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

impl WorldBounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rocket kinematic state. Owned and integrated by the simulation loop;
/// this library only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RocketState {
    pub location: Vec2,
    pub velocity: Vec2,
    /// Facing angle in radians, 0 along +x.
    pub heading: f64,
}

impl RocketState {
    pub const fn new(location: Vec2, velocity: Vec2, heading: f64) -> Self {
        Self {
            location,
            velocity,
            heading,
        }
    }

    /// Unit vector along the current facing angle.
    pub fn facing(&self) -> Vec2 {
        Vec2::from_angle(self.heading)
    }
}

/// Motion tunables shared by every level. The simulation loop owns the
/// integration; these values parameterize it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Heading change per tick for a Left/Right command (radians).
    pub turn_rate: f64,
    /// Forward acceleration per tick while the engine burns.
    pub thrust: f64,
    /// Speed clamp applied after integration.
    pub max_speed: f64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            turn_rate: crate::constants::TURN_RATE,
            thrust: crate::constants::THRUST_ACCEL,
            max_speed: crate::constants::MAX_SPEED,
        }
    }
}
