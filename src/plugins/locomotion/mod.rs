//! Locomotion plugin: run, bounded jumps, and platform phasing.
//!
//! Pipeline (FixedUpdate):
//! - probe_surroundings: ray casts write ground/head contact into `Locomotion`
//! - drive_locomotion: consume input, advance the state machine, write velocity
//!
//! Phasing is done without structural changes: the fighter keeps its collider
//! but its collision filters are emptied, so it collides with nothing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, state::GameState};

pub mod state;
pub mod systems;

pub use state::{horizontal_velocity, Locomotion, PhaseChange};

/// Probe origins relative to the fighter's centre (feet and head).
#[derive(Component, Debug, Clone, Copy)]
pub struct ProbeOffsets {
    pub feet: Vec2,
    pub head: Vec2,
}

impl ProbeOffsets {
    /// Probes at the bottom and top edge of a box of the given half height.
    pub fn for_half_height(half_height: f32) -> Self {
        Self { feet: Vec2::new(0.0, -half_height), head: Vec2::new(0.0, half_height) }
    }
}

#[inline]
pub fn solid_fighter_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Player,
        [Layer::World, Layer::Platform, Layer::Player, Layer::Projectile],
    )
}

#[inline]
pub fn phasing_fighter_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Player, [] as [Layer; 0])
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        (
            systems::probe_surroundings,
            systems::drive_locomotion.after(systems::probe_surroundings),
        )
            .run_if(in_state(GameState::InGame)),
    );
}
