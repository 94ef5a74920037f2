//! Gravity-field primitives and combinators for the level catalog.
//!
//! A field is a pure function of world bounds and position. Fields are
//! represented as data rather than closures so level definitions stay
//! comparable and serializable; one dispatch method evaluates every shape.
//! Levels compose these six shapes instead of writing bespoke force math.

use serde::{Deserialize, Serialize};

use funcrocket_core::types::{Vec2, WorldBounds};

/// Scalar force magnitude as a function of distance from a field source:
/// `gain * d / (d² + 1)`.
///
/// Zero at the source, peaks at distance 1, decays toward zero far away.
/// Finite everywhere, so a point field never blows up at its singularity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amplitude {
    pub gain: f64,
}

impl Amplitude {
    pub const fn new(gain: f64) -> Self {
        Self { gain }
    }

    /// Magnitude at distance `d` from the source.
    pub fn at(self, d: f64) -> f64 {
        self.gain * d / (d * d + 1.0)
    }

    /// Peak magnitude, reached at distance 1.
    pub fn peak(self) -> f64 {
        self.at(1.0)
    }
}

/// A gravity field: pure function of (bounds, position) to a force vector,
/// total over the whole playing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ForceField {
    /// No force anywhere.
    Zero,
    /// The same force at every position.
    Constant { force: Vec2 },
    /// Upward force strengthening toward the top edge of the world:
    /// `(0, -k / (bounds.height - y + k))`.
    HeightAttenuated { k: f64 },
    /// Pull toward `source`, scaled by the amplitude of the distance.
    PointAttractor { source: Vec2, amplitude: Amplitude },
    /// The inner field with its direction flipped: an attractor becomes a
    /// repulsor with the same falloff law.
    Inverted { inner: Box<ForceField> },
    /// Mean of two fields at every position.
    Averaged {
        a: Box<ForceField>,
        b: Box<ForceField>,
    },
}

impl ForceField {
    pub fn constant(force: Vec2) -> Self {
        ForceField::Constant { force }
    }

    pub fn height_attenuated(k: f64) -> Self {
        ForceField::HeightAttenuated { k }
    }

    pub fn point_attractor(source: Vec2, gain: f64) -> Self {
        ForceField::PointAttractor {
            source,
            amplitude: Amplitude::new(gain),
        }
    }

    /// Derive the repulsive counterpart of `inner`: same magnitude at every
    /// position, direction away from the source instead of toward it.
    pub fn inverted(inner: ForceField) -> Self {
        ForceField::Inverted {
            inner: Box::new(inner),
        }
    }

    /// Superpose two fields into their pointwise mean.
    pub fn averaged(a: ForceField, b: ForceField) -> Self {
        ForceField::Averaged {
            a: Box::new(a),
            b: Box::new(b),
        }
    }

    /// Force at `position`. A point field evaluated exactly at its source
    /// has no direction to point along and yields the zero vector.
    pub fn force_at(&self, bounds: WorldBounds, position: Vec2) -> Vec2 {
        match self {
            ForceField::Zero => Vec2::ZERO,
            ForceField::Constant { force } => *force,
            ForceField::HeightAttenuated { k } => {
                let k = *k;
                Vec2::new(0.0, -k / (bounds.height - position.y + k))
            }
            ForceField::PointAttractor { source, amplitude } => {
                let offset = *source - position;
                match offset.normalized() {
                    Some(direction) => direction * amplitude.at(offset.length()),
                    None => Vec2::ZERO,
                }
            }
            ForceField::Inverted { inner } => -inner.force_at(bounds, position),
            ForceField::Averaged { a, b } => {
                (a.force_at(bounds, position) + b.force_at(bounds, position)) * 0.5
            }
        }
    }
}
