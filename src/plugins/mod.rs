//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod core;
pub mod health;
pub mod locomotion;
pub mod match_end;
pub mod physics;
pub mod player;
pub mod projectiles;
pub mod world;

// Render-only
pub mod camera;
pub mod hud;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    match_end::plugin(app);
    player::plugin(app);
    locomotion::plugin(app);
    health::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
    hud::plugin(app);
}
