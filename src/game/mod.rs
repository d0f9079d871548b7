//! Composition root.
//!
//! `configure_full` is the windowed game. `configure_headless` installs only
//! the gameplay plugins so integration tests can drive schedules by hand.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

#[cfg(target_os = "windows")]
use bevy::render::{
    settings::{Backends, PowerPreference, WgpuSettings},
    RenderPlugin,
};

const TITLE: &str = "Duel Shooter";
const RESOLUTION: (u32, u32) = (1280, 720);

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

fn primary_window() -> WindowPlugin {
    WindowPlugin {
        primary_window: Some(Window {
            title: TITLE.into(),
            resolution: WindowResolution::new(RESOLUTION.0, RESOLUTION.1),
            ..default()
        }),
        ..default()
    }
}

/// DX12 on the discrete GPU.
#[cfg(target_os = "windows")]
fn windows_renderer() -> RenderPlugin {
    RenderPlugin {
        render_creation: WgpuSettings {
            backends: Some(Backends::DX12),
            power_preference: PowerPreference::HighPerformance,
            ..default()
        }
        .into(),
        ..default()
    }
}

pub fn configure_full(app: &mut App) {
    let defaults = DefaultPlugins.set(primary_window());

    #[cfg(target_os = "windows")]
    let defaults = defaults.set(windows_renderer());

    app.add_plugins(defaults);
    configure_game(app);
    plugins::register_render(app);
}

/// Gameplay only: no window, renderer, camera, lights or HUD.
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
