//! Ground and head probes against the real arena, with physics stepping.

mod common;

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use duel_shooter::common::layers::Layer;
use duel_shooter::plugins::locomotion::Locomotion;
use duel_shooter::plugins::player::FIGHTER_SIZE;

const STEP: Duration = Duration::from_millis(16);

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn locomotion(app: &App, e: Entity) -> &Locomotion {
    app.world().get::<Locomotion>(e).expect("fighter has locomotion")
}

#[test]
fn fighters_spawn_airborne_then_land_on_the_floor() {
    let (mut app, one, two) = common::stepped_match(STEP);

    // Spawned 30 px above the floor: well past the probe distance.
    run_frames(&mut app, 3);
    assert!(!locomotion(&app, one).is_grounded());

    run_frames(&mut app, 180);
    for e in [one, two] {
        let loco = locomotion(&app, e);
        assert!(loco.is_grounded(), "fighter {e} should be standing on the floor");
        assert!(!loco.is_head_blocked());
    }
}

#[test]
fn platform_just_overhead_blocks_the_head() {
    let (mut app, one, two) = common::stepped_match(STEP);
    run_frames(&mut app, 180);

    let pos = app.world().get::<Position>(one).expect("fighter has a position").0;
    let half_height = FIGHTER_SIZE.y * 0.5;
    let slab = Vec2::new(60.0, 14.0);

    app.world_mut().spawn((
        Name::new("Overhang"),
        RigidBody::Static,
        Collider::rectangle(slab.x, slab.y),
        CollisionLayers::new(Layer::Platform, [Layer::Player]),
        Transform::from_xyz(pos.x, pos.y + half_height + 3.0 + slab.y * 0.5, 0.0),
    ));
    run_frames(&mut app, 5);

    assert!(locomotion(&app, one).is_head_blocked());
    assert!(locomotion(&app, one).is_grounded());
    assert!(!locomotion(&app, two).is_head_blocked());
}
