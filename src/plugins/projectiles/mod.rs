//! Projectiles plugin: **message-based producer → consumer** firing + pooling.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: request_fighter_shots                                 │
//!│      - reads: FighterInput.fire_pressed, Weapon cooldown, Facing     │
//!│      - writes: SpawnProjectileRequest                                │
//!│                                                                      │
//!│  (B) Consumer: allocate_projectiles_from_pool                        │
//!│      - pops ProjectilePool, writes Projectile/State/Transform/       │
//!│        Velocity/Visibility/CollisionLayers                           │
//!└──────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate / FixedPostUpdate (fixed dt)
//!┌──────────────────────────────────────────────────────────────────────┐
//!│  (C) expire_projectiles: lifetime -> PendingReturn                   │
//!│  (D) Avian emits CollisionStart                                      │
//!│  (E) resolve_projectile_contacts: route_contact -> DamageEvent,      │
//!│      PendingReturn                                                   │
//!│  (F) return_to_pool_commit: PendingReturn -> Inactive, push free     │
//!└──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Projectiles are never despawned: "destroyed" means returned to the pool.

pub mod allocator;
pub mod collision;
pub mod commit;
pub mod components;
pub mod lifetime;
pub mod messages;
pub mod pool;
pub mod request;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::player::gather_input;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().pool_capacity;

        app.insert_resource(pool::ProjectilePool::new(capacity))
            .add_message::<messages::SpawnProjectileRequest>()
            .add_systems(Startup, pool::init_projectile_pool);

        app.add_systems(
            Update,
            (
                request::validate_weapons,
                request::request_fighter_shots.after(gather_input),
                allocator::allocate_projectiles_from_pool.after(request::request_fighter_shots),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            lifetime::expire_projectiles.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                collision::resolve_projectile_contacts.after(CollisionEventSystems),
                commit::return_to_pool_commit.after(collision::resolve_projectile_contacts),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
