//! Health plugin: hit points, invincibility, death, respawn.
//!
//! ```text
//! FixedUpdate:      tick_health (invincibility + kill plane)
//!                   apply_heals
//!                   tick_respawn_countdowns -> process_respawns
//! FixedPostUpdate:  resolve_projectile_contacts -> apply_damage
//! Update:           init_new_health, advance_flashes
//! PostUpdate:       despawn_pending
//! ```
//!
//! The state machine itself lives on `Health` and has no ECS dependencies;
//! the systems only route messages into it and announce what happened.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::projectiles::collision::resolve_projectile_contacts;

pub mod components;
pub mod messages;
pub mod systems;

pub use components::*;
pub use messages::*;

pub fn plugin(app: &mut App) {
    app.add_message::<DamageEvent>()
        .add_message::<HealRequest>()
        .add_message::<RespawnRequest>()
        .add_message::<HealthChanged>()
        .add_message::<Damaged>()
        .add_message::<Died>()
        .add_message::<Respawned>();

    app.add_systems(
        FixedUpdate,
        (
            systems::tick_health,
            systems::apply_heals,
            systems::tick_respawn_countdowns,
            systems::process_respawns.after(systems::tick_respawn_countdowns),
        )
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        FixedPostUpdate,
        systems::apply_damage
            .after(resolve_projectile_contacts)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        Update,
        (systems::init_new_health, systems::advance_flashes).run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        systems::despawn_pending.run_if(in_state(GameState::InGame)),
    );
}
