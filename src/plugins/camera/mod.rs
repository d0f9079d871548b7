//! Camera plugin (render-only).
//!
//! Frames the midpoint of the tracked fighters with exponential smoothing.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera
//! PostUpdate:      follow_fighters (before transform propagation)
//! ```
//!
//! **B0001**: a system cannot hold `Query<&Transform>` and `Query<&mut Transform>`
//! unless Bevy can prove them disjoint; `Without<...>` filters encode that.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::match_end::MatchRoster;
use crate::plugins::player::Player;

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_fighters
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera { responsiveness: 3.0 },
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

/// Midpoint of every fighter still in the world, or `None` if none are.
fn fighters_midpoint<'a>(points: impl Iterator<Item = &'a Transform>) -> Option<Vec2> {
    let (sum, n) = points.fold((Vec2::ZERO, 0u32), |(sum, n), tf| {
        (sum + tf.translation.truncate(), n + 1)
    });
    (n > 0).then(|| sum / n as f32)
}

fn follow_fighters(
    time: Res<Time>,
    roster: Res<MatchRoster>,
    // Disjointness proof: Player entities are not MainCamera entities.
    q_fighters: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    // Disjointness proof: MainCamera entities are not Player entities.
    cam: Option<Single<(&mut Transform, &MainCamera), Without<Player>>>,
) {
    let Some(cam) = cam else {
        return;
    };
    let Some(target) = fighters_midpoint(roster.tracked().filter_map(|e| q_fighters.get(e).ok()))
    else {
        return;
    };

    let (mut tf_cam, main_cam) = cam.into_inner();
    let alpha = 1.0 - (-main_cam.responsiveness * time.delta_secs()).exp();

    tf_cam.translation.x += (target.x - tf_cam.translation.x) * alpha;
    tf_cam.translation.y += (target.y - tf_cam.translation.y) * alpha;
}
