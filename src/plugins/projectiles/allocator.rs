//! Spawn consumer: activate projectiles from the pool.
//!
//! The only writer of `ProjectilePool::free` on the way out. An empty pool
//! fails that one shot and nothing else.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::common::error::CombatError;
use crate::common::tunables::Tunables;

use super::components::{PooledProjectile, Projectile, ProjectileState};
use super::messages::SpawnProjectileRequest;
use super::pool::{active_projectile_layers, ProjectilePool};

pub fn allocate_projectiles_from_pool(
    tunables: Res<Tunables>,
    mut pool: ResMut<ProjectilePool>,
    mut reader: MessageReader<SpawnProjectileRequest>,
    mut q: Query<
        (
            &mut ProjectileState,
            &mut Projectile,
            &mut Transform,
            &mut LinearVelocity,
            &mut Visibility,
            &mut CollisionLayers,
        ),
        With<PooledProjectile>,
    >,
) {
    for req in reader.read() {
        let Some(e) = pool.pop_free() else {
            CombatError::instantiation("projectile pool exhausted").report();
            continue;
        };

        let Ok((mut state, mut projectile, mut tf, mut vel, mut vis, mut layers)) = q.get_mut(e)
        else {
            CombatError::instantiation(format!("pooled entity {e} lost its projectile components"))
                .report();
            continue;
        };

        *state = ProjectileState::Active;
        projectile.reset_for_fire(req.damage, req.shooter, tunables.projectile_lifetime);
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_projectile_layers();
    }
}
