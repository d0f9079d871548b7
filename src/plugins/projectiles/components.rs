use std::time::Duration;

use bevy::prelude::*;

use crate::common::error::CombatError;

#[derive(Component)]
pub struct PooledProjectile;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

#[derive(Component, Debug, Clone, Default)]
pub struct Projectile {
    pub damage: i32,
    pub shooter: Option<Entity>,
    pub lifetime: Timer,
}

impl Projectile {
    #[inline]
    pub fn reset_for_fire(&mut self, damage: i32, shooter: Option<Entity>, lifetime: f32) {
        self.damage = damage;
        self.shooter = shooter;
        self.lifetime = Timer::from_seconds(lifetime.max(0.0), TimerMode::Once);
    }
}

/// A fighter's gun: where shots leave from, what they hit for, how often.
#[derive(Component, Debug, Clone)]
pub struct Weapon {
    /// Muzzle offset from the fighter's centre, for a fighter facing right.
    pub fire_point: Option<Vec2>,
    pub damage: i32,
    cooldown: Timer,
}

impl Weapon {
    pub fn new(fire_point: Option<Vec2>, damage: i32, fire_interval: f32) -> Self {
        let mut cooldown = Timer::from_seconds(fire_interval.max(0.0), TimerMode::Once);
        // Ready on spawn.
        cooldown.tick(cooldown.duration());
        Self { fire_point, damage, cooldown }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.cooldown.is_finished()
    }

    pub fn tick(&mut self, delta: Duration) {
        self.cooldown.tick(delta);
    }

    /// Spend the cooldown. Returns `false` while still cooling down.
    pub fn trigger(&mut self) -> bool {
        if !self.is_ready() {
            return false;
        }
        self.cooldown.reset();
        true
    }

    /// A weapon without a fire point can never shoot.
    pub fn validate(&self, owner: impl Into<String>) -> Result<(), CombatError> {
        match self.fire_point {
            Some(_) => Ok(()),
            None => Err(CombatError::misconfigured(owner, "weapon has no fire point")),
        }
    }

    /// World-space muzzle position for a fighter at `origin` facing `dir`.
    pub fn muzzle(&self, origin: Vec2, dir: Vec2) -> Option<Vec2> {
        self.fire_point
            .map(|offset| origin + Vec2::new(offset.x * dir.x.signum(), offset.y))
    }
}
