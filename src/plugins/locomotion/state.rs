use std::time::Duration;

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseChange {
    Started,
    Ended,
}

/// Movement state of one fighter: `{Grounded, Airborne} x {Normal, Phasing}`.
///
/// Contact flags are written by the probe system each tick; everything else
/// is driven from `drive_locomotion`. While phasing the fighter collides with
/// nothing; the jump budget only refills when grounded and solid.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    jump_count: u8,
    grounded: bool,
    head_blocked: bool,
    phase: Option<Timer>,
    enabled: bool,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            jump_count: 0,
            grounded: false,
            head_blocked: false,
            phase: None,
            enabled: true,
        }
    }
}

impl Locomotion {
    #[inline]
    pub fn jump_count(&self) -> u8 {
        self.jump_count
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    #[inline]
    pub fn is_head_blocked(&self) -> bool {
        self.head_blocked
    }

    #[inline]
    pub fn is_phasing(&self) -> bool {
        self.phase.is_some()
    }

    pub fn phase_remaining(&self) -> Duration {
        self.phase.as_ref().map_or(Duration::ZERO, Timer::remaining)
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn record_probes(&mut self, grounded: bool, head_blocked: bool) {
        self.grounded = grounded;
        self.head_blocked = head_blocked;
    }

    /// Count down an active phase. Returns `Ended` on the tick it expires.
    pub fn tick_phase(&mut self, delta: Duration) -> Option<PhaseChange> {
        let timer = self.phase.as_mut()?;
        timer.tick(delta);
        if timer.is_finished() {
            self.phase = None;
            Some(PhaseChange::Ended)
        } else {
            None
        }
    }

    fn start_phase(&mut self, duration: f32) -> Option<PhaseChange> {
        if self.is_phasing() {
            return None;
        }
        self.phase = Some(Timer::from_seconds(duration.max(0.0), TimerMode::Once));
        Some(PhaseChange::Started)
    }

    /// Drop-through on demand: only from the ground.
    pub fn try_manual_phase(&mut self, duration: f32) -> Option<PhaseChange> {
        if !self.grounded {
            return None;
        }
        self.start_phase(duration)
    }

    /// Jump-through: head hits a platform while still rising fast enough.
    pub fn try_auto_phase(
        &mut self,
        vertical_velocity: f32,
        min_velocity: f32,
        duration: f32,
    ) -> Option<PhaseChange> {
        if !self.head_blocked || vertical_velocity <= min_velocity {
            return None;
        }
        self.start_phase(duration)
    }

    /// Refill the jump budget when standing on something solid.
    /// Returns `true` if the count actually changed.
    pub fn settle(&mut self) -> bool {
        if self.grounded && !self.is_phasing() && self.jump_count != 0 {
            self.jump_count = 0;
            true
        } else {
            false
        }
    }

    pub fn try_jump(&mut self, max_jumps: u8) -> bool {
        if self.jump_count >= max_jumps {
            return false;
        }
        self.jump_count += 1;
        true
    }

    /// Back to a fresh, enabled, solid state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Horizontal speed for an input axis. Anything other than a clear left or
/// right counts as no input.
pub fn horizontal_velocity(axis: f32, move_speed: f32) -> f32 {
    if axis < 0.0 {
        -move_speed
    } else if axis > 0.0 {
        move_speed
    } else {
        0.0
    }
}
