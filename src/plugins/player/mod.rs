//! Player plugin: the two fighters, their controls, and how they look.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn both fighters, register them in `MatchRoster`
//! - Update: sample each fighter's `ControlScheme` into its `FighterInput`
//! - FixedUpdate: locomotion consumes `FighterInput` (see `plugins::locomotion`)
//! - Update: derive sprite colour from flash + phasing state
//!
//! Edge actions (jump, phase) are latched here and cleared by the fixed-step
//! consumer, so a press is never lost between render frames and fixed ticks.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::health::{DamageFlash, Health, RespawnPoint};
use crate::plugins::locomotion::{solid_fighter_layers, Locomotion, ProbeOffsets};
use crate::plugins::match_end::MatchRoster;
use crate::plugins::projectiles::components::Weapon;

/// Contact tag: "this is a player". Projectiles damage what carries it.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireButton {
    Key(KeyCode),
    Mouse(MouseButton),
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub phase: KeyCode,
    pub fire: FireButton,
}

impl ControlScheme {
    pub const WASD: Self = Self {
        left: KeyCode::KeyA,
        right: KeyCode::KeyD,
        jump: KeyCode::KeyW,
        phase: KeyCode::KeyS,
        fire: FireButton::Key(KeyCode::Space),
    };

    pub const ARROWS: Self = Self {
        left: KeyCode::ArrowLeft,
        right: KeyCode::ArrowRight,
        jump: KeyCode::ArrowUp,
        phase: KeyCode::ArrowDown,
        fire: FireButton::Mouse(MouseButton::Left),
    };
}

/// Input sampled for one fighter.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct FighterInput {
    /// -1, 0 or +1.
    pub axis: f32,
    pub jump_pressed: bool,
    pub phase_pressed: bool,
    pub fire_pressed: bool,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn direction(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

/// The fighter's own colour; flashes and phasing are applied on top of it.
#[derive(Component, Debug, Clone, Copy)]
pub struct BaseTint(pub Color);

const HIT_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const FIGHTER_SIZE: Vec2 = Vec2::new(24.0, 40.0);

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_fighters)
        .add_systems(
            Update,
            (gather_input, apply_fighter_tint).run_if(in_state(GameState::InGame)),
        );
}

fn fighter_setup(slot: PlayerSlot) -> (&'static str, ControlScheme, Facing, Color, Vec3) {
    match slot {
        PlayerSlot::One => (
            "Fighter1",
            ControlScheme::WASD,
            Facing::Right,
            Color::srgb(0.2, 0.75, 0.9),
            Vec3::new(-300.0, -150.0, 1.0),
        ),
        PlayerSlot::Two => (
            "Fighter2",
            ControlScheme::ARROWS,
            Facing::Left,
            Color::srgb(0.95, 0.55, 0.2),
            Vec3::new(300.0, -150.0, 1.0),
        ),
    }
}

fn spawn_fighters(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut roster: ResMut<MatchRoster>,
) {
    for slot in PlayerSlot::ALL {
        let (name, controls, facing, color, pos) = fighter_setup(slot);
        let fire_point = Vec2::new(FIGHTER_SIZE.x * 0.5 + 8.0, 4.0);

        let e = commands
            .spawn((
                (
                    Name::new(name),
                    Player,
                    slot,
                    controls,
                    FighterInput::default(),
                    facing,
                    BaseTint(color),
                ),
                (
                    Sprite {
                        color,
                        custom_size: Some(FIGHTER_SIZE),
                        ..default()
                    },
                    Transform::from_translation(pos),
                    RigidBody::Dynamic,
                    Collider::rectangle(FIGHTER_SIZE.x, FIGHTER_SIZE.y),
                    LockedAxes::ROTATION_LOCKED,
                    Friction::ZERO,
                    solid_fighter_layers(),
                    LinearVelocity::ZERO,
                    TranslationInterpolation,
                ),
                (
                    Locomotion::default(),
                    ProbeOffsets::for_half_height(FIGHTER_SIZE.y * 0.5),
                    Health::new(tunables.max_health, tunables.invincibility),
                    RespawnPoint::default(),
                    DamageFlash::default(),
                    Weapon::new(
                        Some(fire_point),
                        tunables.projectile_damage,
                        tunables.fire_interval,
                    ),
                ),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        roster.track(slot, e);
    }
}

/// Sample keyboard/mouse state for every fighter.
///
/// Input resources are optional so headless apps (no input plugin) just skip.
pub(crate) fn gather_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut q: Query<(&ControlScheme, &mut FighterInput, &mut Facing)>,
) {
    let Some(keys) = keys else {
        return;
    };

    for (scheme, mut input, mut facing) in &mut q {
        // Left wins when both are held.
        input.axis = if keys.pressed(scheme.left) {
            -1.0
        } else if keys.pressed(scheme.right) {
            1.0
        } else {
            0.0
        };

        if input.axis < 0.0 {
            *facing = Facing::Left;
        } else if input.axis > 0.0 {
            *facing = Facing::Right;
        }

        input.jump_pressed |= keys.just_pressed(scheme.jump);
        input.phase_pressed |= keys.just_pressed(scheme.phase);
        input.fire_pressed = match scheme.fire {
            FireButton::Key(k) => keys.just_pressed(k),
            FireButton::Mouse(b) => mouse.as_ref().is_some_and(|m| m.just_pressed(b)),
        };
    }
}

/// Sprite colour = base, or red while the hit flash is lit; translucent while phasing.
fn apply_fighter_tint(
    tunables: Res<Tunables>,
    mut q: Query<(&BaseTint, &DamageFlash, &Locomotion, &mut Sprite)>,
) {
    for (base, flash, loco, mut sprite) in &mut q {
        let color = if flash.is_lit() { HIT_COLOR } else { base.0 };
        let alpha = if loco.is_phasing() { tunables.phase_alpha } else { 1.0 };
        sprite.color = color.with_alpha(alpha);
    }
}

#[cfg(test)]
mod tests;
