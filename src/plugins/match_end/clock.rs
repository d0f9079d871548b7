//! Simulation clock service.
//!
//! Freezing the game goes through this param instead of poking
//! `Time<Virtual>` directly, so every pause/resume is visible at the call site.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

#[derive(SystemParam)]
pub struct SimClock<'w> {
    time: ResMut<'w, Time<Virtual>>,
}

impl SimClock<'_> {
    pub fn pause(&mut self) {
        if !self.time.is_paused() {
            self.time.pause();
            info!("simulation clock paused");
        }
    }

    pub fn resume(&mut self) {
        if self.time.is_paused() {
            self.time.unpause();
            info!("simulation clock resumed");
        }
    }

    pub fn is_paused(&self) -> bool {
        self.time.is_paused()
    }
}
