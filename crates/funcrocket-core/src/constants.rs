//! Tuning constants for steering and the level catalog.

use std::f64::consts::FRAC_PI_2;

use crate::types::Vec2;

// --- Steering ---

/// Weight of the facing unit vector when blending with velocity to form the
/// effective heading. Higher values trust the nose over current drift.
pub const THRUST_BLEND_WEIGHT: f64 = 5.0;

// --- Standard physics ---

/// Heading change per tick for a Left/Right turn command (radians).
pub const TURN_RATE: f64 = 0.1;

/// Forward acceleration per tick while the engine burns.
pub const THRUST_ACCEL: f64 = 0.5;

/// Speed clamp applied by the stepper after integration.
pub const MAX_SPEED: f64 = 6.0;

// --- Level layout ---

/// Rocket spawn location, shared by every level.
pub const START_LOCATION: Vec2 = Vec2::new(200.0, 500.0);

/// Rocket spawn heading (radians): straight up the screen.
pub const START_HEADING: f64 = -FRAC_PI_2;

/// Target of the Zero and Heavy levels.
pub const NEAR_TARGET: Vec2 = Vec2::new(600.0, 200.0);

/// Target of the Up, BlackHole, WhiteHole and BlackAndWhite levels.
pub const FAR_TARGET: Vec2 = Vec2::new(700.0, 500.0);

// --- Field strengths ---

/// Uniform downward pull of the Heavy level.
pub const HEAVY_GRAVITY: f64 = 0.9;

/// Strength (and denominator offset) of the Up level's height field.
pub const UP_FIELD_STRENGTH: f64 = 300.0;

/// Amplitude gain of the BlackHole attractor.
pub const BLACK_HOLE_GAIN: f64 = 300.0;

/// Amplitude gain of the WhiteHole repulsor.
pub const WHITE_HOLE_GAIN: f64 = 140.0;
