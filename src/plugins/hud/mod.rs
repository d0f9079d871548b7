//! HUD plugin (render-only): health readouts and the game-over banner.
//!
//! The HUD is a tree of `Text2d` entities under a root that is pinned to the
//! camera each frame. Readouts only change when a `HealthChanged` arrives.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::plugins::camera::MainCamera;
use crate::plugins::health::HealthChanged;
use crate::plugins::match_end::{GameOverScreen, MatchEnded};
use crate::plugins::player::PlayerSlot;

#[derive(Component)]
struct HudRoot;

#[derive(Component)]
struct HealthReadout(PlayerSlot);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(
            Update,
            (update_health_readouts, show_winner).run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            PostUpdate,
            pin_hud_to_camera
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Hud"),
            HudRoot,
            Transform::from_xyz(0.0, 0.0, 900.0),
            Visibility::Visible,
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|hud| {
            for (slot, x) in [(PlayerSlot::One, -520.0), (PlayerSlot::Two, 520.0)] {
                hud.spawn((
                    HealthReadout(slot),
                    Text2d::new("HP --"),
                    TextFont { font_size: 24.0, ..default() },
                    Transform::from_xyz(x, 320.0, 0.0),
                ));
            }

            // Exists from the start, hidden until the match ends.
            hud.spawn((
                GameOverScreen,
                Text2d::new("GAME OVER"),
                TextFont { font_size: 72.0, ..default() },
                Transform::from_xyz(0.0, 0.0, 1.0),
                Visibility::Hidden,
            ));
        });
}

fn update_health_readouts(
    mut changes: MessageReader<HealthChanged>,
    q_slot: Query<&PlayerSlot>,
    mut q_readouts: Query<(&HealthReadout, &mut Text2d)>,
) {
    for change in changes.read() {
        let Ok(slot) = q_slot.get(change.entity) else {
            continue;
        };
        for (readout, mut text) in &mut q_readouts {
            if readout.0 == *slot {
                text.0 = format!("HP {}", change.current.max(0));
            }
        }
    }
}

fn show_winner(
    mut ended: MessageReader<MatchEnded>,
    mut q_banner: Query<&mut Text2d, With<GameOverScreen>>,
) {
    for ev in ended.read() {
        let line = match ev.winner {
            Some(PlayerSlot::One) => "GAME OVER\nPlayer 1 wins",
            Some(PlayerSlot::Two) => "GAME OVER\nPlayer 2 wins",
            None => "GAME OVER\nDraw",
        };
        for mut text in &mut q_banner {
            text.0 = line.to_owned();
        }
    }
}

fn pin_hud_to_camera(
    cam: Option<Single<&Transform, (With<MainCamera>, Without<HudRoot>)>>,
    hud: Option<Single<&mut Transform, (With<HudRoot>, Without<MainCamera>)>>,
) {
    let (Some(cam), Some(mut hud)) = (cam, hud) else {
        return;
    };
    hud.translation.x = cam.translation.x;
    hud.translation.y = cam.translation.y;
}
