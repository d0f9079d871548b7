use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::error::label;
use crate::common::layers::OBSTACLE_LAYERS;
use crate::common::tunables::Tunables;
use crate::plugins::player::FighterInput;

use super::state::{horizontal_velocity, Locomotion, PhaseChange};
use super::{phasing_fighter_layers, solid_fighter_layers, ProbeOffsets};

/// Sample ground and head contact with short rays against obstacle layers.
pub fn probe_surroundings(
    spatial: SpatialQuery,
    tunables: Res<Tunables>,
    mut q: Query<(Entity, &Transform, &ProbeOffsets, &mut Locomotion)>,
) {
    for (e, tf, probes, mut loco) in &mut q {
        let filter = SpatialQueryFilter::from_mask(OBSTACLE_LAYERS).with_excluded_entities([e]);
        let origin = tf.translation.truncate();

        let grounded = spatial
            .cast_ray(
                origin + probes.feet,
                Dir2::NEG_Y,
                tunables.ground_probe_distance,
                true,
                &filter,
            )
            .is_some();
        let head_blocked = spatial
            .cast_ray(
                origin + probes.head,
                Dir2::Y,
                tunables.head_probe_distance,
                true,
                &filter,
            )
            .is_some();

        loco.record_probes(grounded, head_blocked);
    }
}

/// One locomotion tick: phase timer, phase entry, jump refill, run, jump.
pub fn drive_locomotion(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<(
        Entity,
        &mut Locomotion,
        &mut FighterInput,
        &mut LinearVelocity,
        &mut CollisionLayers,
        Option<&Name>,
    )>,
) {
    for (e, mut loco, mut input, mut vel, mut layers, name) in &mut q {
        // Edge actions are consumed every tick, even when controls are off.
        let jump = std::mem::take(&mut input.jump_pressed);
        let phase = std::mem::take(&mut input.phase_pressed);

        if !loco.is_enabled() {
            continue;
        }

        let mut change = loco.tick_phase(time.delta());

        if phase {
            change = loco.try_manual_phase(tunables.phase_duration).or(change);
        }
        change = loco
            .try_auto_phase(vel.0.y, tunables.min_phase_velocity, tunables.phase_duration)
            .or(change);

        loco.settle();

        vel.0.x = horizontal_velocity(input.axis, tunables.move_speed);

        if jump && loco.try_jump(tunables.max_jumps) {
            vel.0.y = 0.0;
            vel.0.y += tunables.jump_impulse;
        }

        match change {
            Some(PhaseChange::Started) => {
                *layers = phasing_fighter_layers();
                debug!("{} started phasing", label(e, name));
            }
            Some(PhaseChange::Ended) => {
                *layers = solid_fighter_layers();
                debug!("{} stopped phasing", label(e, name));
            }
            None => {}
        }
    }
}
