//! Match end: watches both fighters and freezes the game when one drops.
//!
//! `MatchState` is one-way: `Active -> Ended`. The transition happens at most
//! once per match, so the clock is paused and the banner shown exactly once.

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::health::Health;
use crate::plugins::player::PlayerSlot;

pub mod clock;

pub use clock::SimClock;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchState {
    #[default]
    Active,
    Ended { winner: Option<PlayerSlot> },
}

impl MatchState {
    #[inline]
    pub fn is_ended(&self) -> bool {
        matches!(self, MatchState::Ended { .. })
    }

    /// Feed both fighters' current health. Returns the winner slot (if any)
    /// on the single call that ends the match; `None` otherwise.
    pub fn observe(&mut self, one: i32, two: i32) -> Option<Option<PlayerSlot>> {
        if self.is_ended() || (one > 0 && two > 0) {
            return None;
        }
        let winner = match (one > 0, two > 0) {
            (true, false) => Some(PlayerSlot::One),
            (false, true) => Some(PlayerSlot::Two),
            _ => None,
        };
        *self = MatchState::Ended { winner };
        Some(winner)
    }
}

/// The two fighters whose health decides the match.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct MatchRoster {
    slots: [Option<Entity>; 2],
}

impl MatchRoster {
    pub fn track(&mut self, slot: PlayerSlot, entity: Entity) {
        self.slots[slot.index()] = Some(entity);
    }

    pub fn get(&self, slot: PlayerSlot) -> Option<Entity> {
        self.slots[slot.index()]
    }

    pub fn tracked(&self) -> impl Iterator<Item = Entity> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Marker for the terminal display; hidden until the match ends.
#[derive(Component, Debug, Clone, Copy)]
pub struct GameOverScreen;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchEnded {
    pub winner: Option<PlayerSlot>,
}

pub fn plugin(app: &mut App) {
    app.init_resource::<MatchState>()
        .init_resource::<MatchRoster>()
        .add_message::<MatchEnded>()
        .add_systems(OnEnter(GameState::InGame), reset_match)
        .add_systems(Update, watch_for_match_end.run_if(in_state(GameState::InGame)));
}

fn reset_match(mut state: ResMut<MatchState>, mut clock: SimClock) {
    *state = MatchState::Active;
    clock.resume();
}

/// A tracked fighter that no longer exists was despawned by its death, so it
/// counts as zero health.
fn watch_for_match_end(
    roster: Res<MatchRoster>,
    mut state: ResMut<MatchState>,
    mut clock: SimClock,
    q_health: Query<&Health>,
    mut q_screen: Query<&mut Visibility, With<GameOverScreen>>,
    mut ended: MessageWriter<MatchEnded>,
    mut warned: Local<bool>,
) {
    if state.is_ended() {
        return;
    }

    let (Some(one), Some(two)) = (roster.get(PlayerSlot::One), roster.get(PlayerSlot::Two)) else {
        if !*warned {
            warn!("match roster incomplete; match end detection is inactive");
            *warned = true;
        }
        return;
    };

    let current = |e: Entity| q_health.get(e).map_or(0, Health::current);
    let Some(winner) = state.observe(current(one), current(two)) else {
        return;
    };

    clock.pause();
    for mut vis in &mut q_screen {
        *vis = Visibility::Visible;
    }
    ended.write(MatchEnded { winner });
    info!("Game over, winner: {winner:?}");
}

#[cfg(test)]
mod tests;
