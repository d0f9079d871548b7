//! Tunable gameplay constants.
//!
//! Distances and speeds are in pixels. The defaults are authored in metres
//! and scaled by `pixels_per_meter`, so the feel matches a 1 unit = 1 m setup.

use bevy::prelude::*;

use crate::common::error::CombatError;

/// What happens to a fighter whose health reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeathPolicy {
    /// Remove the fighter from the world at the end of the frame.
    #[default]
    Despawn,
    /// Disable controls and respawn after `Tunables::respawn_delay`.
    Respawn,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub gravity: f32,

    // Locomotion
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub max_jumps: u8,
    pub ground_probe_distance: f32,
    pub head_probe_distance: f32,
    pub phase_duration: f32,
    pub phase_alpha: f32,
    pub min_phase_velocity: f32,

    // Health
    pub max_health: i32,
    pub invincibility: f32,
    pub flash_interval: f32,
    pub kill_plane_y: f32,
    pub respawn_delay: f32,
    pub death_policy: DeathPolicy,

    // Projectiles
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub projectile_damage: i32,
    pub fire_interval: f32,
    pub pool_capacity: usize,
}

impl Tunables {
    /// Build the defaults for a given world scale.
    pub fn with_scale(pixels_per_meter: f32) -> Self {
        let m = pixels_per_meter;
        Self {
            pixels_per_meter: m,
            gravity: 9.81 * m,

            move_speed: 5.0 * m,
            jump_impulse: 5.0 * m,
            max_jumps: jump_cap_from_fractional(0.5),
            ground_probe_distance: 0.2 * m,
            head_probe_distance: 0.2 * m,
            phase_duration: 0.5,
            phase_alpha: 0.5,
            min_phase_velocity: 0.1 * m,

            max_health: 100,
            invincibility: 0.1,
            flash_interval: 0.1,
            kill_plane_y: -10.0 * m,
            respawn_delay: 2.0,
            death_policy: DeathPolicy::Despawn,

            projectile_speed: 10.0 * m,
            projectile_lifetime: 5.0,
            projectile_damage: 25,
            fire_interval: 0.5,
            pool_capacity: 64,
        }
    }
}

impl Tunables {
    /// Settings that can't be used as written.
    ///
    /// None of these are fatal: durations are clamped to zero where they are
    /// turned into timers, and the rest degrade to "nothing happens".
    pub fn problems(&self) -> Vec<CombatError> {
        let durations = [
            ("respawn_delay", self.respawn_delay),
            ("projectile_lifetime", self.projectile_lifetime),
            ("fire_interval", self.fire_interval),
            ("phase_duration", self.phase_duration),
            ("invincibility", self.invincibility),
            ("flash_interval", self.flash_interval),
        ];

        let mut problems: Vec<CombatError> = durations
            .into_iter()
            .filter(|(_, secs)| !(*secs >= 0.0))
            .map(|(field, secs)| {
                CombatError::misconfigured("Tunables", format!("{field} = {secs}s; using 0s"))
            })
            .collect();

        if self.max_health <= 0 {
            problems.push(CombatError::misconfigured(
                "Tunables",
                format!("max_health = {}; fighters get 1", self.max_health),
            ));
        }
        if self.pool_capacity == 0 {
            problems.push(CombatError::misconfigured(
                "Tunables",
                "pool_capacity = 0; no shot can be fired",
            ));
        }
        problems
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self::with_scale(32.0)
    }
}

/// Convert a fractional jump cap into the number of jumps it actually grants.
///
/// A counter compared with `count < cap` allows `ceil(cap)` jumps, so a cap of
/// `0.5` is a single jump and `2.0` is a double jump.
pub fn jump_cap_from_fractional(cap: f32) -> u8 {
    if !cap.is_finite() || cap <= 0.0 {
        return 0;
    }
    cap.ceil().min(u8::MAX as f32) as u8
}

/// Projectile "prefab": everything needed to build a pooled projectile.
#[derive(Resource, Debug, Clone)]
pub struct ProjectileTemplate {
    pub radius: f32,
    pub color: Color,
}

impl Default for ProjectileTemplate {
    fn default() -> Self {
        Self { radius: 4.0, color: Color::srgb(1.0, 0.85, 0.3) }
    }
}
