//! Collision layers.

use avian2d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    /// Solid arena geometry (floor, side walls).
    World,
    /// Floating platforms. Probed as ground, same as `World`.
    Platform,
    Player,
    Projectile,
}

/// Layers that count as "ground" / "ceiling" for locomotion probes.
pub const OBSTACLE_LAYERS: [Layer; 2] = [Layer::World, Layer::Platform];
