//! Projectile contact routing.
//!
//! Avian reports trigger and solid contacts through the same `CollisionStart`
//! message, so this is the one place a projectile can be consumed. The
//! `ProjectileState` gate makes a second contact in the same step a no-op.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::error::{label, Capability, CombatError};
use crate::plugins::health::{DamageEvent, Health};
use crate::plugins::player::Player;
use crate::plugins::world::Wall;

use super::components::{PooledProjectile, Projectile, ProjectileState};

/// What a projectile does about one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRoute {
    /// Touched its own shooter.
    Ignore,
    /// Hit a player: deal damage (if it can take any) and go away.
    Damage,
    /// Hit a wall: go away.
    Absorb,
    /// Anything else: keep flying.
    PassThrough,
}

/// Classify a contact with `other`. The shooter check comes first.
pub fn route_contact(
    shooter: Option<Entity>,
    other: Entity,
    other_is_player: bool,
    other_is_wall: bool,
) -> ContactRoute {
    if shooter == Some(other) {
        ContactRoute::Ignore
    } else if other_is_player {
        ContactRoute::Damage
    } else if other_is_wall {
        ContactRoute::Absorb
    } else {
        ContactRoute::PassThrough
    }
}

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

pub fn resolve_projectile_contacts(
    mut started: MessageReader<CollisionStart>,
    // Fast "is this a pooled projectile?" check
    q_is_projectile: Query<(), With<PooledProjectile>>,
    mut q_projectiles: Query<(&Projectile, &mut ProjectileState), With<PooledProjectile>>,
    // Contact tags + optional damage capability on the other side
    q_tags: Query<(Has<Player>, Has<Wall>, Has<Health>, Option<&Name>)>,
    mut damage: MessageWriter<DamageEvent>,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let p1 = q_is_projectile.contains(t1.collider);
        let p2 = q_is_projectile.contains(t2.collider);
        if !(p1 ^ p2) {
            continue; // must be exactly one projectile
        }
        let (projectile_side, other_side) = if p1 { (t1, t2) } else { (t2, t1) };

        let Ok((projectile, mut state)) = q_projectiles.get_mut(projectile_side.collider) else {
            continue;
        };
        if *state != ProjectileState::Active {
            continue;
        }

        let other = other_side.gameplay_owner();
        let Ok((is_player, is_wall, has_health, name)) = q_tags.get(other) else {
            continue;
        };

        // The shooter may be reported by collider or by body.
        let route = if projectile.shooter == Some(other_side.collider) {
            ContactRoute::Ignore
        } else {
            route_contact(projectile.shooter, other, is_player, is_wall)
        };

        match route {
            ContactRoute::Ignore => {
                debug!("projectile touched its shooter; ignored");
            }
            ContactRoute::Damage => {
                if has_health {
                    damage.write(DamageEvent {
                        target: other,
                        amount: projectile.damage,
                        source: projectile.shooter,
                    });
                } else {
                    CombatError::missing(label(other, name), Capability::Health).report();
                }
                *state = ProjectileState::PendingReturn;
            }
            ContactRoute::Absorb => {
                *state = ProjectileState::PendingReturn;
            }
            ContactRoute::PassThrough => {}
        }
    }
}
