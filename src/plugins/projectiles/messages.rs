//! Buffered spawn requests.
//!
//! Producers create *intent*; the allocator is the single consumer that
//! touches the pool.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnProjectileRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub shooter: Option<Entity>,
}
