//! Lighting plugin (Firefly) (render-only): one light per fighter.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::{BaseTint, Player};

#[derive(Component)]
pub struct FighterLight {
    pub owner: Entity,
}

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(
        Update,
        (attach_fighter_lights, follow_fighter_lights).run_if(in_state(GameState::InGame)),
    );
}

fn attach_fighter_lights(
    mut commands: Commands,
    q_new: Query<(Entity, &BaseTint), Added<Player>>,
) {
    for (owner, tint) in &q_new {
        let mut color = tint.0.to_srgba();
        // Light a little warmer and brighter than the sprite.
        color.red = (color.red + 0.3).min(1.0);
        color.green = (color.green + 0.3).min(1.0);
        color.blue = (color.blue + 0.2).min(1.0);

        commands.spawn((
            Name::new("FighterLight"),
            FighterLight { owner },
            PointLight2d {
                color: color.into(),
                radius: 380.0,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

/// Lights track their owner; a light whose owner is gone goes with it.
fn follow_fighter_lights(
    mut commands: Commands,
    q_owner: Query<&Transform, (With<Player>, Without<FighterLight>)>,
    mut q_light: Query<(Entity, &FighterLight, &mut Transform), Without<Player>>,
) {
    for (e, light, mut tf_light) in &mut q_light {
        let Ok(tf_owner) = q_owner.get(light.owner) else {
            commands.entity(e).despawn();
            continue;
        };
        tf_light.translation.x = tf_owner.translation.x;
        tf_light.translation.y = tf_owner.translation.y;
    }
}
