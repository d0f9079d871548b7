use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::common::error::{label, Capability, CombatError};
use crate::common::tunables::{DeathPolicy, Tunables};
use crate::plugins::locomotion::{solid_fighter_layers, Locomotion};

use super::components::*;
use super::messages::*;

/// Outgoing health notifications, bundled so every writer goes through one param.
#[derive(SystemParam)]
pub struct HealthNotices<'w> {
    changed: MessageWriter<'w, HealthChanged>,
    damaged: MessageWriter<'w, Damaged>,
    died: MessageWriter<'w, Died>,
    respawned: MessageWriter<'w, Respawned>,
}

/// Put a freshly killed fighter on its death path.
fn enter_death(
    commands: &mut Commands,
    entity: Entity,
    tunables: &Tunables,
    locomotion: Option<Mut<Locomotion>>,
    notices: &mut HealthNotices,
) {
    notices.died.write(Died { entity });

    match tunables.death_policy {
        DeathPolicy::Despawn => {
            commands.entity(entity).insert(PendingDespawn);
        }
        DeathPolicy::Respawn => {
            if let Some(mut loco) = locomotion {
                loco.set_enabled(false);
            }
            commands.entity(entity).insert(RespawnCountdown(Timer::from_seconds(
                tunables.respawn_delay.max(0.0),
                TimerMode::Once,
            )));
        }
    }
}

/// Announce starting health and default the respawn point to the spawn position.
pub fn init_new_health(
    mut q: Query<
        (Entity, &Health, &Transform, Option<&mut RespawnPoint>, Option<&Name>),
        Added<Health>,
    >,
    mut changed: MessageWriter<HealthChanged>,
) {
    for (e, hp, tf, point, name) in &mut q {
        if let Some(mut point) = point {
            if point.0 == Vec3::ZERO {
                point.0 = tf.translation;
            }
        }
        changed.write(HealthChanged { entity: e, current: hp.current() });
        info!("{} health ready: {}/{}", label(e, name), hp.current(), hp.max());
    }
}

/// Consume `DamageEvent`s. Each one reaches `Health::take_damage` exactly once.
pub fn apply_damage(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut incoming: MessageReader<DamageEvent>,
    mut q: Query<(
        &mut Health,
        Option<&mut DamageFlash>,
        Option<&mut Locomotion>,
        Option<&Name>,
    )>,
    mut notices: HealthNotices,
) {
    for ev in incoming.read() {
        let Ok((mut hp, flash, loco, name)) = q.get_mut(ev.target) else {
            CombatError::missing(label(ev.target, None), Capability::Health).report();
            continue;
        };
        let who = label(ev.target, name);

        let dealt = match hp.take_damage(ev.amount) {
            DamageOutcome::Ignored => {
                debug!("{who} ignored {} damage (dead or invincible)", ev.amount);
                continue;
            }
            DamageOutcome::Damaged { dealt, .. } | DamageOutcome::Killed { dealt } => dealt,
        };

        info!("{who} took {dealt} damage, {}/{} left", hp.current(), hp.max());
        notices.changed.write(HealthChanged { entity: ev.target, current: hp.current() });
        notices.damaged.write(Damaged { entity: ev.target, source: ev.source });

        if let Some(mut flash) = flash {
            flash.start(tunables.invincibility, tunables.flash_interval);
        }

        if hp.is_dead() {
            info!("{who} died");
            enter_death(&mut commands, ev.target, &tunables, loco, &mut notices);
        }
    }
}

pub fn apply_heals(
    mut incoming: MessageReader<HealRequest>,
    mut q: Query<(&mut Health, Option<&Name>)>,
    mut changed: MessageWriter<HealthChanged>,
) {
    for req in incoming.read() {
        let Ok((mut hp, name)) = q.get_mut(req.target) else {
            CombatError::missing(label(req.target, None), Capability::Health).report();
            continue;
        };
        let Some(healed) = hp.heal(req.amount) else {
            debug!("{} is dead; heal ignored", label(req.target, name));
            continue;
        };
        debug!("{} healed {healed}, now {}/{}", label(req.target, name), hp.current(), hp.max());
        changed.write(HealthChanged { entity: req.target, current: hp.current() });
    }
}

/// Per-tick upkeep: invincibility decay, then the kill-plane check.
pub fn tick_health(
    mut commands: Commands,
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q: Query<
        (Entity, &mut Health, &Transform, Option<&mut Locomotion>, Option<&Name>),
        Without<PendingDespawn>,
    >,
    mut notices: HealthNotices,
) {
    for (e, mut hp, tf, loco, name) in &mut q {
        if hp.tick(time.delta()) {
            debug!("{} is no longer invincible", label(e, name));
        }

        if tf.translation.y < tunables.kill_plane_y && hp.force_kill() {
            info!("{} fell out of the arena at y={}", label(e, name), tf.translation.y);
            notices.changed.write(HealthChanged { entity: e, current: 0 });
            enter_death(&mut commands, e, &tunables, loco, &mut notices);
        }
    }
}

pub fn advance_flashes(time: Res<Time>, mut q: Query<&mut DamageFlash>) {
    for mut flash in &mut q {
        flash.advance(time.delta());
    }
}

pub fn tick_respawn_countdowns(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut RespawnCountdown)>,
    mut requests: MessageWriter<RespawnRequest>,
) {
    for (e, mut countdown) in &mut q {
        countdown.tick(time.delta());
        if countdown.is_finished() {
            commands.entity(e).remove::<RespawnCountdown>();
            requests.write(RespawnRequest { entity: e });
        }
    }
}

/// Full reset: health, position, velocity, controls, colour.
pub fn process_respawns(
    mut commands: Commands,
    mut requests: MessageReader<RespawnRequest>,
    mut q: Query<(
        &mut Health,
        &mut Transform,
        Option<&RespawnPoint>,
        Option<&mut LinearVelocity>,
        Option<&mut Locomotion>,
        Option<&mut CollisionLayers>,
        Option<&mut DamageFlash>,
        Option<&Name>,
    )>,
    mut notices: HealthNotices,
) {
    for req in requests.read() {
        let Ok((mut hp, mut tf, point, vel, loco, layers, flash, name)) = q.get_mut(req.entity)
        else {
            CombatError::missing(label(req.entity, None), Capability::Health).report();
            continue;
        };

        hp.respawn();
        if let Some(point) = point {
            tf.translation = point.0;
        }
        if let Some(mut vel) = vel {
            vel.0 = Vec2::ZERO;
        }
        if let Some(mut loco) = loco {
            loco.reset();
        }
        if let Some(mut layers) = layers {
            *layers = solid_fighter_layers();
        }
        if let Some(mut flash) = flash {
            flash.cancel();
        }
        commands
            .entity(req.entity)
            .remove::<(PendingDespawn, RespawnCountdown)>();

        info!("{} respawned at {}", label(req.entity, name), tf.translation);
        notices.changed.write(HealthChanged { entity: req.entity, current: hp.current() });
        notices.respawned.write(Respawned { entity: req.entity });
    }
}

pub fn despawn_pending(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
