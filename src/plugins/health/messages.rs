//! Health inputs and notifications.
//!
//! Inputs (`DamageEvent`, `HealRequest`, `RespawnRequest`) are consumed exactly
//! once by the health systems. Notifications carry the owning entity so a
//! subscriber can follow one fighter or all of them.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
    pub source: Option<Entity>,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealRequest {
    pub target: Entity,
    pub amount: i32,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RespawnRequest {
    pub entity: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: i32,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Damaged {
    pub entity: Entity,
    pub source: Option<Entity>,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Died {
    pub entity: Entity,
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Respawned {
    pub entity: Entity,
}
