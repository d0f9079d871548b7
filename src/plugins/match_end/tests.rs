use bevy::prelude::*;

use super::*;
use crate::common::test_utils::{drain_messages, ensure_messages, run_system_once};
use crate::plugins::health::Health;
use crate::plugins::player::PlayerSlot;

fn match_world() -> (World, Entity, Entity) {
    let mut world = World::new();
    world.init_resource::<MatchState>();
    world.init_resource::<Time<Virtual>>();
    ensure_messages::<MatchEnded>(&mut world);

    let one = world.spawn(Health::new(100, 0.0)).id();
    let two = world.spawn(Health::new(100, 0.0)).id();
    let mut roster = MatchRoster::default();
    roster.track(PlayerSlot::One, one);
    roster.track(PlayerSlot::Two, two);
    world.insert_resource(roster);

    world.spawn((GameOverScreen, Visibility::Hidden));
    (world, one, two)
}

fn kill(world: &mut World, e: Entity) {
    world.get_mut::<Health>(e).unwrap().force_kill();
}

fn screen_visibility(world: &mut World) -> Visibility {
    *world
        .query_filtered::<&Visibility, With<GameOverScreen>>()
        .single(world)
        .unwrap()
}

#[test]
fn observe_names_the_survivor() {
    let mut state = MatchState::default();
    assert_eq!(state.observe(100, 50), None);
    assert_eq!(state.observe(100, 0), Some(Some(PlayerSlot::One)));
    assert_eq!(state, MatchState::Ended { winner: Some(PlayerSlot::One) });

    let mut state = MatchState::default();
    assert_eq!(state.observe(-5, 10), Some(Some(PlayerSlot::Two)));
}

#[test]
fn observe_is_one_way() {
    let mut state = MatchState::default();
    assert_eq!(state.observe(0, 0), Some(None));
    assert_eq!(state.observe(0, 0), None);
    assert_eq!(state.observe(100, 100), None);
    assert_eq!(state, MatchState::Ended { winner: None });
}

#[test]
fn both_alive_keeps_match_running() {
    let (mut world, _, _) = match_world();

    run_system_once(&mut world, watch_for_match_end);

    assert_eq!(*world.resource::<MatchState>(), MatchState::Active);
    assert!(!world.resource::<Time<Virtual>>().is_paused());
    assert_eq!(screen_visibility(&mut world), Visibility::Hidden);
    assert!(drain_messages::<MatchEnded>(&mut world).is_empty());
}

#[test]
fn defeat_pauses_and_shows_screen_once() {
    let (mut world, _, two) = match_world();
    kill(&mut world, two);

    run_system_once(&mut world, watch_for_match_end);
    run_system_once(&mut world, watch_for_match_end);
    run_system_once(&mut world, watch_for_match_end);

    assert_eq!(
        *world.resource::<MatchState>(),
        MatchState::Ended { winner: Some(PlayerSlot::One) }
    );
    assert!(world.resource::<Time<Virtual>>().is_paused());
    assert_eq!(screen_visibility(&mut world), Visibility::Visible);
    assert_eq!(
        drain_messages::<MatchEnded>(&mut world),
        vec![MatchEnded { winner: Some(PlayerSlot::One) }]
    );
}

#[test]
fn simultaneous_defeat_has_no_winner() {
    let (mut world, one, two) = match_world();
    kill(&mut world, one);
    kill(&mut world, two);

    run_system_once(&mut world, watch_for_match_end);

    assert_eq!(*world.resource::<MatchState>(), MatchState::Ended { winner: None });
    assert_eq!(
        drain_messages::<MatchEnded>(&mut world),
        vec![MatchEnded { winner: None }]
    );
}

#[test]
fn despawned_fighter_counts_as_defeated() {
    let (mut world, one, _) = match_world();
    world.despawn(one);

    run_system_once(&mut world, watch_for_match_end);

    assert_eq!(
        *world.resource::<MatchState>(),
        MatchState::Ended { winner: Some(PlayerSlot::Two) }
    );
}

#[test]
fn incomplete_roster_never_ends_match() {
    let (mut world, one, _) = match_world();
    let mut roster = MatchRoster::default();
    roster.track(PlayerSlot::One, one);
    world.insert_resource(roster);
    kill(&mut world, one);

    run_system_once(&mut world, watch_for_match_end);

    assert_eq!(*world.resource::<MatchState>(), MatchState::Active);
    assert!(!world.resource::<Time<Virtual>>().is_paused());
}

#[test]
fn later_recovery_does_not_reopen_match() {
    let (mut world, _, two) = match_world();
    kill(&mut world, two);
    run_system_once(&mut world, watch_for_match_end);

    world.get_mut::<Health>(two).unwrap().respawn();
    run_system_once(&mut world, watch_for_match_end);

    assert!(world.resource::<MatchState>().is_ended());
    assert!(world.resource::<Time<Virtual>>().is_paused());
}

#[test]
fn reset_match_reactivates_and_resumes() {
    let (mut world, _, two) = match_world();
    kill(&mut world, two);
    run_system_once(&mut world, watch_for_match_end);

    run_system_once(&mut world, reset_match);

    assert_eq!(*world.resource::<MatchState>(), MatchState::Active);
    assert!(!world.resource::<Time<Virtual>>().is_paused());
}
