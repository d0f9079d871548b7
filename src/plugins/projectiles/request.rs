use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::common::error::{label, Capability, CombatError};
use crate::common::tunables::Tunables;
use crate::plugins::locomotion::Locomotion;
use crate::plugins::player::{Facing, FighterInput};

use super::components::Weapon;
use super::messages::SpawnProjectileRequest;

/// Producer: turn a fire press into a `SpawnProjectileRequest`.
///
/// This system intentionally does **not** access the pool.
pub fn request_fighter_shots(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(
        Entity,
        &Transform,
        &Facing,
        &mut Weapon,
        &mut FighterInput,
        Option<&Locomotion>,
        Option<&Name>,
    )>,
    mut writer: MessageWriter<SpawnProjectileRequest>,
) {
    for (e, tf, facing, mut weapon, mut input, loco, name) in &mut q {
        weapon.tick(time.delta());

        if !std::mem::take(&mut input.fire_pressed) {
            continue;
        }
        if loco.is_some_and(|l| !l.is_enabled()) {
            continue;
        }
        if !weapon.trigger() {
            continue;
        }

        let dir = facing.direction();
        let Some(pos) = weapon.muzzle(tf.translation.truncate(), dir) else {
            CombatError::missing(label(e, name), Capability::FirePoint).report();
            continue;
        };

        writer.write(SpawnProjectileRequest {
            pos,
            vel: dir * tunables.projectile_speed,
            damage: weapon.damage,
            shooter: Some(e),
        });
        debug!("{} fired {:?}", label(e, name), facing);
    }
}

/// Startup check: a weapon without a fire point can never shoot.
pub fn validate_weapons(q: Query<(Entity, &Weapon, Option<&Name>), Added<Weapon>>) {
    for (e, weapon, name) in &q {
        if let Err(err) = weapon.validate(label(e, name)) {
            err.report();
        }
    }
}
