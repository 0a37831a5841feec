//! Combat компоненты: AttackProfile, AttackCooldown, DamageQueue

use bevy::prelude::*;

use crate::error::{SimulationError, SimulationResult};

/// Характеристики атаки врага (неизменны после spawn)
///
/// Required Components: AttackCooldown (стартует в Ready)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(AttackCooldown)]
pub struct AttackProfile {
    damage: f32,
    cooldown: f32,
}

impl AttackProfile {
    /// Инвариант: damage >= 0, cooldown > 0 (оба конечны)
    pub fn new(damage: f32, cooldown: f32) -> SimulationResult<Self> {
        if !damage.is_finite() || damage < 0.0 {
            return Err(SimulationError::InvalidConfig { field: "damage", value: damage });
        }
        if !cooldown.is_finite() || cooldown <= 0.0 {
            return Err(SimulationError::InvalidConfig { field: "cooldown", value: cooldown });
        }
        Ok(Self { damage, cooldown })
    }

    pub fn damage(&self) -> f32 {
        self.damage
    }

    /// Cooldown между атаками (секунды)
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }
}

/// Состояние cooldown атакующего
///
/// Одно значение enum на entity → не больше одного активного cooldown.
/// `Cooling { expiry }`: абсолютное время симуляции (секунды, f64),
/// до которого атака запрещена.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub enum AttackCooldown {
    #[default]
    Ready,
    Cooling { expiry: f64 },
}

impl AttackCooldown {
    pub fn is_cooling(&self) -> bool {
        matches!(self, AttackCooldown::Cooling { .. })
    }

    /// Check-then-set: true если атака разрешена (и cooldown запущен)
    pub fn try_begin(&mut self, now: f64, cooldown: f32) -> bool {
        if self.is_cooling() {
            return false;
        }
        *self = AttackCooldown::Cooling { expiry: now + cooldown as f64 };
        true
    }

    /// Снимает cooldown при now >= expiry (никогда раньше). true если снят.
    pub fn expire(&mut self, now: f64) -> bool {
        match *self {
            AttackCooldown::Cooling { expiry } if now >= expiry => {
                *self = AttackCooldown::Ready;
                true
            }
            _ => false,
        }
    }
}

/// Входящий урон игрока за тик
///
/// Append-only во время тика; внешний health коллаборатор забирает через
/// `drain`: каждое значение ровно один раз.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct DamageQueue {
    entries: Vec<f32>,
}

impl DamageQueue {
    pub fn push(&mut self, damage: f32) {
        self.entries.push(damage);
    }

    pub fn entries(&self) -> &[f32] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f32 {
        self.entries.iter().sum()
    }

    pub fn drain(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.entries)
    }
}

/// Забрать накопленный урон игрока (для health коллаборатора)
///
/// Entity без DamageQueue: нарушение контракта spawn → `ComponentMissing`.
pub fn drain_damage(world: &mut World, player: Entity) -> SimulationResult<Vec<f32>> {
    let mut queue = world
        .get_mut::<DamageQueue>(player)
        .ok_or_else(|| SimulationError::missing::<DamageQueue>(player))?;
    Ok(queue.drain())
}
