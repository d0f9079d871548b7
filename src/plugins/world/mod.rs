//! World plugin: spawns the arena (floor with a centre pit, side walls, platforms).
//!
//! Every piece of geometry carries the `Wall` tag so projectiles stop on it,
//! and sits on an obstacle layer so locomotion probes see it as ground.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

/// Contact tag: "this is a wall". Projectiles are absorbed by it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wall;

const HALF_W: f32 = 640.0;
const HALF_H: f32 = 360.0;
const FLOOR_TOP: f32 = -200.0;
const PIT_HALF_W: f32 = 60.0;
const THICKNESS: f32 = 30.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_arena, spawn_platforms));
}

fn solid_layers(member: Layer) -> CollisionLayers {
    CollisionLayers::new(member, [Layer::Player, Layer::Projectile])
}

fn spawn_block(commands: &mut Commands, name: &str, layer: Layer, color: Color, pos: Vec2, size: Vec2) {
    commands.spawn((
        Name::new(name.to_owned()),
        Wall,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(pos.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        solid_layers(layer),
        DespawnOnExit(GameState::InGame),
    ));
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);

    // Two floor halves with a pit between them.
    let floor_w = HALF_W - PIT_HALF_W;
    let floor_y = FLOOR_TOP - THICKNESS * 0.5;
    for (name, sign) in [("FloorLeft", -1.0), ("FloorRight", 1.0)] {
        spawn_block(
            &mut commands,
            name,
            Layer::World,
            wall_color,
            Vec2::new(sign * (PIT_HALF_W + floor_w * 0.5), floor_y),
            Vec2::new(floor_w, THICKNESS),
        );
    }

    for (name, sign) in [("WallLeft", -1.0), ("WallRight", 1.0)] {
        spawn_block(
            &mut commands,
            name,
            Layer::World,
            wall_color,
            Vec2::new(sign * (HALF_W + THICKNESS * 0.5), 0.0),
            Vec2::new(THICKNESS, HALF_H * 2.0),
        );
    }
}

fn spawn_platforms(mut commands: Commands) {
    let color = Color::srgb(0.32, 0.36, 0.42);
    let size = Vec2::new(220.0, 14.0);

    let layout = [
        ("PlatformLowLeft", Vec2::new(-300.0, -80.0)),
        ("PlatformLowRight", Vec2::new(300.0, -80.0)),
        ("PlatformHigh", Vec2::new(0.0, 40.0)),
    ];

    for (name, pos) in layout {
        spawn_block(&mut commands, name, Layer::Platform, color, pos, size);
    }
}
