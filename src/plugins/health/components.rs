use std::time::Duration;

use bevy::prelude::*;

/// Result of a single `Health::take_damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Dead or invincible: nothing changed.
    Ignored,
    Damaged { dealt: i32, remaining: i32 },
    Killed { dealt: i32 },
}

/// Hit points, death flag and the post-hit invincibility window.
///
/// Invariants:
/// - `0 <= current <= max`
/// - once dead, only `respawn` changes anything
#[derive(Component, Debug, Clone)]
pub struct Health {
    max: i32,
    current: i32,
    dead: bool,
    invincibility_window: f32,
    invincibility: Option<Timer>,
}

impl Health {
    pub fn new(max: i32, invincibility_window: f32) -> Self {
        let max = max.max(1);
        Self {
            max,
            current: max,
            dead: false,
            invincibility_window: invincibility_window.max(0.0),
            invincibility: None,
        }
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_some()
    }

    pub fn invincibility_remaining(&self) -> Duration {
        self.invincibility
            .as_ref()
            .map_or(Duration::ZERO, Timer::remaining)
    }

    /// Health as a fraction of max, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.current as f32 / self.max as f32
    }

    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.dead || self.is_invincible() {
            return DamageOutcome::Ignored;
        }

        let dealt = amount.max(0).min(self.current);
        self.current = (self.current - dealt).clamp(0, self.max);
        self.invincibility = Some(Timer::from_seconds(
            self.invincibility_window,
            TimerMode::Once,
        ));

        if self.current == 0 {
            self.dead = true;
            DamageOutcome::Killed { dealt }
        } else {
            DamageOutcome::Damaged { dealt, remaining: self.current }
        }
    }

    /// Returns the amount actually restored, or `None` if dead.
    pub fn heal(&mut self, amount: i32) -> Option<i32> {
        if self.dead {
            return None;
        }
        let healed = amount.max(0).min(self.max - self.current);
        self.current = (self.current + healed).clamp(0, self.max);
        Some(healed)
    }

    /// Advance the invincibility window. Returns `true` on the tick it ends.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.invincibility.as_mut() else {
            return false;
        };
        timer.tick(delta);
        if timer.is_finished() {
            self.invincibility = None;
            true
        } else {
            false
        }
    }

    /// Drop straight to zero (kill plane). Returns `false` if already dead.
    pub fn force_kill(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.current = 0;
        self.dead = true;
        true
    }

    pub fn respawn(&mut self) {
        self.dead = false;
        self.current = self.max;
        self.invincibility = None;
    }
}

/// Where a fighter reappears after `Respawn`.
///
/// `Vec3::ZERO` means "unset"; it is replaced by the spawn position when
/// the fighter's `Health` is first seen.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct RespawnPoint(pub Vec3);

impl RespawnPoint {
    pub fn set(&mut self, position: Vec3) {
        self.0 = position;
        debug!("respawn point moved to {position}");
    }
}

/// Red/normal flash shown after a hit.
///
/// Always present on a fighter; `start` replaces whatever sequence was running.
#[derive(Component, Debug, Clone, Default)]
pub struct DamageFlash {
    timer: Timer,
    steps_total: u32,
    step: u32,
}

impl DamageFlash {
    /// Flash for `total` seconds, toggling every `interval` seconds.
    pub fn start(&mut self, total: f32, interval: f32) {
        if !(total > 0.0 && interval > 0.0) {
            self.cancel();
            return;
        }
        self.steps_total = (total / interval).ceil() as u32;
        self.step = 0;
        self.timer = Timer::from_seconds(interval, TimerMode::Repeating);
    }

    pub fn cancel(&mut self) {
        self.steps_total = 0;
        self.step = 0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.step < self.steps_total
    }

    /// Even steps show the hit colour, odd steps the base colour.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.is_active() && self.step % 2 == 0
    }

    pub fn advance(&mut self, delta: Duration) {
        if !self.is_active() {
            return;
        }
        self.timer.tick(delta);
        self.step = (self.step + self.timer.times_finished_this_tick()).min(self.steps_total);
    }
}

/// Marker: remove at the end of the frame.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Dead fighter waiting for its respawn.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct RespawnCountdown(pub Timer);
