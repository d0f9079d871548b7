use bevy::prelude::*;
use avian2d::prelude::*;

use super::*;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::health::{DamageFlash, Health};
use crate::plugins::locomotion::Locomotion;
use crate::plugins::match_end::MatchRoster;

fn keys_with(pressed: &[KeyCode]) -> ButtonInput<KeyCode> {
    let mut keys = ButtonInput::<KeyCode>::default();
    for k in pressed {
        keys.press(*k);
    }
    keys
}

#[test]
fn spawn_creates_two_tracked_fighters() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<MatchRoster>();

    run_system_once(&mut world, super::spawn_fighters);

    let mut q = world.query::<(Entity, &PlayerSlot, &Health, &Player)>();
    let fighters: Vec<_> = q.iter(&world).map(|(e, slot, hp, _)| (e, *slot, hp.current())).collect();
    assert_eq!(fighters.len(), 2);

    let roster = *world.resource::<MatchRoster>();
    for (e, slot, hp) in fighters {
        assert_eq!(roster.get(slot), Some(e));
        assert_eq!(hp, 100);
    }
}

#[test]
fn fighters_opt_into_interpolation() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.init_resource::<MatchRoster>();

    run_system_once(&mut world, super::spawn_fighters);

    let n = world
        .query::<(&Player, &TranslationInterpolation)>()
        .iter(&world)
        .count();
    assert_eq!(n, 2);
}

#[test]
fn gather_input_reads_each_scheme() {
    let mut world = World::new();
    world.insert_resource(keys_with(&[KeyCode::KeyA, KeyCode::KeyW, KeyCode::ArrowRight]));
    let mut mouse = ButtonInput::<MouseButton>::default();
    mouse.press(MouseButton::Left);
    world.insert_resource(mouse);

    let one = world
        .spawn((ControlScheme::WASD, FighterInput::default(), Facing::Right))
        .id();
    let two = world
        .spawn((ControlScheme::ARROWS, FighterInput::default(), Facing::Left))
        .id();

    run_system_once(&mut world, super::gather_input);

    let in1 = *world.get::<FighterInput>(one).unwrap();
    assert_eq!(in1.axis, -1.0);
    assert!(in1.jump_pressed);
    assert!(!in1.fire_pressed);
    assert_eq!(*world.get::<Facing>(one).unwrap(), Facing::Left);

    let in2 = *world.get::<FighterInput>(two).unwrap();
    assert_eq!(in2.axis, 1.0);
    assert!(in2.fire_pressed);
    assert_eq!(*world.get::<Facing>(two).unwrap(), Facing::Right);
}

#[test]
fn left_wins_over_right() {
    let mut world = World::new();
    world.insert_resource(keys_with(&[KeyCode::KeyA, KeyCode::KeyD]));
    let e = world
        .spawn((ControlScheme::WASD, FighterInput::default(), Facing::Right))
        .id();

    run_system_once(&mut world, super::gather_input);

    assert_eq!(world.get::<FighterInput>(e).unwrap().axis, -1.0);
}

#[test]
fn jump_press_stays_latched_until_consumed() {
    let mut world = World::new();
    world.insert_resource(keys_with(&[KeyCode::KeyW]));
    let e = world
        .spawn((ControlScheme::WASD, FighterInput::default(), Facing::Right))
        .id();

    run_system_once(&mut world, super::gather_input);
    // Next frame: key still held but no longer "just pressed".
    world.resource_mut::<ButtonInput<KeyCode>>().clear();
    run_system_once(&mut world, super::gather_input);

    assert!(world.get::<FighterInput>(e).unwrap().jump_pressed);
}

#[test]
fn tint_shows_flash_and_phasing() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());

    let mut flash = DamageFlash::default();
    flash.start(0.1, 0.1);
    let mut loco = Locomotion::default();
    loco.record_probes(true, false);
    loco.try_manual_phase(0.5);

    let base = Color::srgb(0.2, 0.75, 0.9);
    let e = world
        .spawn((BaseTint(base), flash, loco, Sprite::default()))
        .id();

    run_system_once(&mut world, super::apply_fighter_tint);

    let color = world.get::<Sprite>(e).unwrap().color;
    assert_eq!(color, HIT_COLOR.with_alpha(0.5));

    world.get_mut::<DamageFlash>(e).unwrap().cancel();
    world.get_mut::<Locomotion>(e).unwrap().reset();
    run_system_once(&mut world, super::apply_fighter_tint);
    assert_eq!(world.get::<Sprite>(e).unwrap().color, base.with_alpha(1.0));
}
