//! Authoring config персонажей
//!
//! Значения приходят извне (RON/JSON, редактор) и валидируются в компоненты
//! ДО spawn: невалидный config не создаёт entity.

use serde::{Deserialize, Serialize};

use crate::components::{AnimationRate, AttackProfile, BodyRadius, MoveSpeed};
use crate::error::{SimulationError, SimulationResult};

/// Общие параметры персонажа
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    /// Units/sec
    pub move_speed: f32,
    /// Кадров анимации в секунду (> 0)
    pub animation_fps: f32,
    pub body_radius: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            animation_fps: 10.0,
            body_radius: 0.5,
        }
    }
}

/// Провалидированные компоненты персонажа
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterComponents {
    pub speed: MoveSpeed,
    pub rate: AnimationRate,
    pub radius: BodyRadius,
}

impl CharacterConfig {
    pub fn validate(&self) -> SimulationResult<CharacterComponents> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(SimulationError::InvalidConfig {
                field: "move_speed",
                value: self.move_speed,
            });
        }
        if !self.body_radius.is_finite() || self.body_radius <= 0.0 {
            return Err(SimulationError::InvalidConfig {
                field: "body_radius",
                value: self.body_radius,
            });
        }

        Ok(CharacterComponents {
            speed: MoveSpeed(self.move_speed),
            rate: AnimationRate::new(self.animation_fps)?,
            radius: BodyRadius(self.body_radius),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub character: CharacterConfig,
}

/// Враг: персонаж + контактная атака
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub character: CharacterConfig,
    pub damage: f32,
    /// Секунды между атаками
    pub cooldown: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            character: CharacterConfig {
                move_speed: 2.5,
                ..CharacterConfig::default()
            },
            damage: 10.0,
            cooldown: 2.0,
        }
    }
}

impl EnemyConfig {
    pub fn validate(&self) -> SimulationResult<(CharacterComponents, AttackProfile)> {
        let character = self.character.validate()?;
        let profile = AttackProfile::new(self.damage, self.cooldown)?;
        Ok((character, profile))
    }
}
