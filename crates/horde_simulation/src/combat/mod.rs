//! Combat: контакт врага с игроком наносит урон с cooldown
//!
//! ECS ответственность:
//! - AttackCooldown: Ready / Cooling { expiry }
//! - DamageQueue игрока (append-only за тик)
//! - Events: ContactEvent (вход от physics bridge), AttackLanded (выход)
//!
//! Health/смерть: внешний коллаборатор, забирает DamageQueue.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod attacker;
pub mod contact;
pub mod events;

#[cfg(test)]
mod contact_tests;

// Re-export основных типов
pub use attacker::sweep_attack_cooldowns;
pub use contact::{assign_roles, resolve_contact_attacks, CombatRoles, Participant};
pub use events::{AttackLanded, ContactEvent};

/// Combat Plugin
///
/// Порядок выполнения (SimulationSet::Combat):
/// 1. sweep_attack_cooldowns: снятие истёкших cooldown
/// 2. resolve_contact_attacks: ContactEvent → DamageQueue + AttackLanded
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactEvent>().add_event::<AttackLanded>();

        app.add_systems(
            FixedUpdate,
            (sweep_attack_cooldowns, resolve_contact_attacks)
                .chain()
                .in_set(SimulationSet::Combat),
        );
    }
}
