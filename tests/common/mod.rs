//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `duel_shooter::game::configure_headless` to install gameplay plugins.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use duel_shooter::plugins::match_end::MatchRoster;
use duel_shooter::plugins::player::PlayerSlot;

pub fn app_headless() -> App {
    let mut app = App::new();

    // Add AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));

    duel_shooter::game::configure_headless(&mut app);
    // `App::run` normally does this; tests drive `update()` by hand, and
    // plugins (e.g. avian's collision diagnostics) finish setup here.
    app.finish();
    app.cleanup();
    app
}

/// Boot into the match and return both fighters.
pub fn started_match() -> (App, Entity, Entity) {
    let mut app = app_headless();
    app.update();

    let roster = *app.world().resource::<MatchRoster>();
    let one = roster.get(PlayerSlot::One).expect("player one spawned");
    let two = roster.get(PlayerSlot::Two).expect("player two spawned");
    (app, one, two)
}

/// Like `started_match`, but every `app.update()` advances time by `step`,
/// so fixed-step physics runs deterministically.
pub fn stepped_match(step: std::time::Duration) -> (App, Entity, Entity) {
    let mut app = app_headless();
    app.insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(step));
    app.update();

    let roster = *app.world().resource::<MatchRoster>();
    let one = roster.get(PlayerSlot::One).expect("player one spawned");
    let two = roster.get(PlayerSlot::Two).expect("player two spawned");
    (app, one, two)
}
