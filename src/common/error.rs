//! Gameplay error taxonomy.
//!
//! None of these cross a system boundary. The system that hits one logs it and
//! skips the single action it was performing; everything else keeps running.

use bevy::prelude::*;
use thiserror::Error;

/// A capability a contact or action expected to find on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Health,
    FirePoint,
    ProjectileTemplate,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Capability::Health => "health tracking",
            Capability::FirePoint => "fire point",
            Capability::ProjectileTemplate => "projectile template",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("{owner} has no {capability}; action skipped")]
    MissingCapability { owner: String, capability: Capability },

    #[error("{owner} is misconfigured: {reason}")]
    InvalidConfiguration { owner: String, reason: String },

    #[error("projectile could not be created: {reason}")]
    InstantiationFailure { reason: String },
}

impl CombatError {
    pub fn missing(owner: impl Into<String>, capability: Capability) -> Self {
        Self::MissingCapability { owner: owner.into(), capability }
    }

    pub fn misconfigured(owner: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { owner: owner.into(), reason: reason.into() }
    }

    pub fn instantiation(reason: impl Into<String>) -> Self {
        Self::InstantiationFailure { reason: reason.into() }
    }

    /// Log at the severity this kind of error warrants.
    pub fn report(&self) {
        match self {
            CombatError::InvalidConfiguration { .. } => error!("{self}"),
            CombatError::MissingCapability { .. } | CombatError::InstantiationFailure { .. } => {
                warn!("{self}")
            }
        }
    }
}

/// Human-readable label for an entity in diagnostics.
pub fn label(entity: Entity, name: Option<&Name>) -> String {
    match name {
        Some(n) => format!("{n} ({entity})"),
        None => format!("{entity}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_owner_and_capability() {
        let err = CombatError::missing("Fighter1", Capability::Health);
        assert_eq!(err.to_string(), "Fighter1 has no health tracking; action skipped");

        let err = CombatError::instantiation("pool exhausted");
        assert!(err.to_string().contains("pool exhausted"));
    }

    #[test]
    fn label_prefers_name() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        assert!(label(e, Some(&Name::new("Fighter2"))).starts_with("Fighter2"));
        assert_eq!(label(e, None), format!("{e}"));
    }
}
