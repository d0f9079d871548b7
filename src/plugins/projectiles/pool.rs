use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::error::{CombatError, Capability};
use crate::common::layers::Layer;
use crate::common::tunables::ProjectileTemplate;

use super::components::{PooledProjectile, Projectile, ProjectileState};

#[derive(Resource, Debug)]
pub struct ProjectilePool {
    free: Vec<Entity>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            free: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    #[inline]
    pub fn pop_free(&mut self) -> Option<Entity> {
        self.free.pop()
    }

    #[inline]
    pub fn push_free(&mut self, e: Entity) {
        self.free.push(e);
    }
}

#[inline]
pub fn active_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(
        Layer::Projectile,
        [Layer::World, Layer::Platform, Layer::Player],
    )
}

/// "Disabled" without structural changes: empty filters means we collide with nothing.
#[inline]
pub fn inactive_projectile_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Projectile, [] as [Layer; 0])
}

/// Pre-spawn pooled projectiles (inactive) from the `ProjectileTemplate`.
///
/// Without a template the pool stays empty and every shot fails to instantiate.
pub fn init_projectile_pool(
    mut commands: Commands,
    mut pool: ResMut<ProjectilePool>,
    template: Option<Res<ProjectileTemplate>>,
) {
    pool.free.clear();

    let Some(template) = template else {
        CombatError::misconfigured(
            "ProjectilePool",
            format!("no {}; pool left empty", Capability::ProjectileTemplate),
        )
        .report();
        return;
    };

    let cap = pool.capacity;
    pool.free.reserve(cap);

    for _ in 0..cap {
        let e = commands
            .spawn((
                Name::new("Projectile(Pooled)"),
                PooledProjectile,
                ProjectileState::Inactive,
                Projectile::default(),
                Sprite {
                    color: template.color,
                    custom_size: Some(Vec2::splat(template.radius * 2.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 2.0),
                Visibility::Hidden,
                RigidBody::Dynamic,
                Collider::circle(template.radius),
                // Triggers: report contacts, never push anything around.
                Sensor,
                GravityScale(0.0),
                inactive_projectile_layers(),
                LinearVelocity(Vec2::ZERO),
                CollisionEventsEnabled,
            ))
            .id();

        pool.free.push(e);
    }

    debug!("projectile pool ready: {cap} slots");
}
