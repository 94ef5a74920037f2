//! Level definitions — the six catalog levels and their gravity fields.
//!
//! Levels are not independent data: they share the spawn state, the physics
//! tunables, and a small field algebra. A new level is a new composition of
//! existing primitives, not new force math.

use serde::{Deserialize, Serialize};

use funcrocket_core::constants::{
    BLACK_HOLE_GAIN, FAR_TARGET, HEAVY_GRAVITY, NEAR_TARGET, START_HEADING, START_LOCATION,
    UP_FIELD_STRENGTH, WHITE_HOLE_GAIN,
};
use funcrocket_core::types::{Physics, RocketState, Vec2};

use crate::fields::ForceField;

/// Identifier for the built-in levels, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelId {
    Zero,
    Heavy,
    Up,
    BlackHole,
    WhiteHole,
    BlackAndWhite,
}

impl LevelId {
    /// Catalog order, as presented by the level-selection UI.
    pub const ALL: [LevelId; 6] = [
        LevelId::Zero,
        LevelId::Heavy,
        LevelId::Up,
        LevelId::BlackHole,
        LevelId::WhiteHole,
        LevelId::BlackAndWhite,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            LevelId::Zero => "Zero",
            LevelId::Heavy => "Heavy",
            LevelId::Up => "Up",
            LevelId::BlackHole => "BlackHole",
            LevelId::WhiteHole => "WhiteHole",
            LevelId::BlackAndWhite => "BlackAndWhite",
        }
    }
}

/// Everything the simulation loop needs to seed a run.
/// Built once at catalog construction time, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    pub rocket: RocketState,
    pub target: Vec2,
    pub field: ForceField,
    pub physics: Physics,
}

/// Build the definition for a given level.
pub fn build_level(id: LevelId) -> LevelDefinition {
    match id {
        LevelId::Zero => build_zero(),
        LevelId::Heavy => build_heavy(),
        LevelId::Up => build_up(),
        LevelId::BlackHole => build_black_hole(),
        LevelId::WhiteHole => build_white_hole(),
        LevelId::BlackAndWhite => build_black_and_white(),
    }
}

/// Build all six levels in catalog order.
pub fn catalog() -> Vec<LevelDefinition> {
    LevelId::ALL.iter().copied().map(build_level).collect()
}

/// Every level starts the rocket at the same pad, at rest, nose up.
fn spawn_state() -> RocketState {
    RocketState::new(START_LOCATION, Vec2::ZERO, START_HEADING)
}

fn definition(id: LevelId, target: Vec2, field: ForceField) -> LevelDefinition {
    LevelDefinition {
        name: id.name().to_string(),
        rocket: spawn_state(),
        target,
        field,
        physics: Physics::default(),
    }
}

/// Zero: free flight, no gravity.
fn build_zero() -> LevelDefinition {
    definition(LevelId::Zero, NEAR_TARGET, ForceField::Zero)
}

/// Heavy: uniform downward pull over the whole field.
fn build_heavy() -> LevelDefinition {
    definition(
        LevelId::Heavy,
        NEAR_TARGET,
        ForceField::constant(Vec2::new(0.0, HEAVY_GRAVITY)),
    )
}

/// Up: lift that strengthens as the rocket climbs toward the top edge.
fn build_up() -> LevelDefinition {
    definition(
        LevelId::Up,
        FAR_TARGET,
        ForceField::height_attenuated(UP_FIELD_STRENGTH),
    )
}

/// BlackHole: an attractor halfway between the pad and the target.
fn build_black_hole() -> LevelDefinition {
    let source = START_LOCATION + (FAR_TARGET - START_LOCATION) * 0.5;
    definition(
        LevelId::BlackHole,
        FAR_TARGET,
        ForceField::point_attractor(source, BLACK_HOLE_GAIN),
    )
}

/// WhiteHole: the attractor law re-pointed at the target and inverted into
/// a repulsor, so the falloff shape is shared rather than duplicated.
fn build_white_hole() -> LevelDefinition {
    definition(
        LevelId::WhiteHole,
        FAR_TARGET,
        ForceField::inverted(ForceField::point_attractor(FAR_TARGET, WHITE_HOLE_GAIN)),
    )
}

/// BlackAndWhite: the black and white hole fields superposed.
fn build_black_and_white() -> LevelDefinition {
    let black = build_black_hole();
    let white = build_white_hole();
    definition(
        LevelId::BlackAndWhite,
        FAR_TARGET,
        ForceField::averaged(black.field, white.field),
    )
}
