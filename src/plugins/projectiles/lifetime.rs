use bevy::prelude::*;

use super::components::{PooledProjectile, Projectile, ProjectileState};

/// Active projectiles that outlive their lifetime go back to the pool.
pub fn expire_projectiles(
    time: Res<Time>,
    mut q: Query<(&mut Projectile, &mut ProjectileState), With<PooledProjectile>>,
) {
    for (mut projectile, mut state) in &mut q {
        if *state != ProjectileState::Active {
            continue;
        }
        projectile.lifetime.tick(time.delta());
        if projectile.lifetime.is_finished() {
            *state = ProjectileState::PendingReturn;
        }
    }
}
