//! Sprite animation компоненты (выход для presentation коллаборатора)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{SimulationError, SimulationResult};

/// Количество кадров в цикле анимации (Idle и Run)
pub const FRAME_COUNT: u8 = 6;

/// Частота анимации (кадров в секунду)
///
/// Инвариант: rate > 0 и конечен: проверяется при создании,
/// до того как entity станет live (иначе деление на ноль в threshold).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationRate(f32);

impl AnimationRate {
    pub fn new(frames_per_second: f32) -> SimulationResult<Self> {
        if !frames_per_second.is_finite() || frames_per_second <= 0.0 {
            return Err(SimulationError::InvalidConfig {
                field: "animation_fps",
                value: frames_per_second,
            });
        }
        Ok(Self(frames_per_second))
    }

    pub fn frames_per_second(&self) -> f32 {
        self.0
    }

    /// Время одного кадра (секунды)
    pub fn threshold(&self) -> f32 {
        1.0 / self.0
    }
}

/// Состояние анимации: текущий кадр + накопитель времени
///
/// Инварианты:
/// - frame ∈ [0, FRAME_COUNT)
/// - accumulator уменьшается ровно на threshold за пересечение, никогда
///   не сбрасывается в 0 (дробный остаток переносится → точная средняя частота)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
#[require(SpriteFrame)]
pub struct SpriteAnimation {
    pub frame: u8,
    pub accumulator: f32,
}

/// Категория спрайта
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AnimationCategory {
    #[default]
    Idle,
    Run,
}

impl AnimationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationCategory::Idle => "Idle",
            AnimationCategory::Run => "Run",
        }
    }
}

/// Что рисовать в этом тике: (category, frame)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpriteFrame {
    pub category: AnimationCategory,
    pub frame: u8,
}

impl SpriteFrame {
    /// Label вида `Run_3` для sprite presentation
    pub fn label(&self) -> String {
        format!("{}_{}", self.category.as_str(), self.frame)
    }
}

/// Flip спрайта врага (true = враг левее игрока)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct SpriteFlip(pub bool);
