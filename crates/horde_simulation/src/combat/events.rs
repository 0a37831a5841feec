//! Combat events

use bevy::prelude::*;

/// Контакт двух тел за этот тик (порядок a/b не определён)
///
/// Генерируется physics bridge (Rapier или headless detector),
/// потребляется Combat Resolver.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Событие: атака прошла, урон добавлен в DamageQueue цели
///
/// Для presentation (hit flash, звук); на логику симуляции не влияет.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AttackLanded {
    pub attacker: Entity,
    pub target: Entity,
    pub damage: f32,
}
