mod common;

use avian2d::prelude::*;
use bevy::prelude::*;

use duel_shooter::plugins::health::Health;
use duel_shooter::plugins::match_end::MatchState;
use duel_shooter::plugins::player::Player;
use duel_shooter::plugins::projectiles::pool::ProjectilePool;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(*app.world().resource::<MatchState>(), MatchState::Active);
}

#[test]
fn match_starts_with_two_full_health_fighters() {
    let (mut app, one, two) = common::started_match();

    for _ in 0..5 {
        app.update();
    }

    for e in [one, two] {
        let hp = app.world().get::<Health>(e).expect("fighter has health");
        assert_eq!(hp.current(), hp.max());
    }

    let fighters = app
        .world_mut()
        .query_filtered::<(), (With<Player>, With<TranslationInterpolation>)>()
        .iter(app.world())
        .count();
    assert_eq!(fighters, 2, "fighters opt in to smoothing via TranslationInterpolation");

    let pool = app.world().resource::<ProjectilePool>();
    assert_eq!(pool.free_len(), pool.capacity());
}
