//! Return commit: recycle projectiles back into the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive projectiles must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};
use super::pool::{inactive_projectile_layers, ProjectilePool};

pub fn return_to_pool_commit(
    mut pool: ResMut<ProjectilePool>,
    mut q: Query<
        (
            Entity,
            &mut ProjectileState,
            &mut Projectile,
            &mut Visibility,
            &mut LinearVelocity,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for (e, mut state, mut projectile, mut vis, mut vel, mut layers) in &mut q {
        if *state != ProjectileState::PendingReturn {
            continue;
        }

        *state = ProjectileState::Inactive;
        projectile.shooter = None;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_projectile_layers();

        pool.push_free(e);
    }
}
