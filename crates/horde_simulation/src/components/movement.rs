//! Movement компоненты: направление, скорость, velocity command, movement state

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Порог "движется / стоит" (и для facing hysteresis)
pub const MOVEMENT_THRESHOLD: f32 = 0.15;

/// Желаемое направление движения
///
/// Пишут: input (игрок) или enemy targeting (враги).
/// НЕ обязательно нормализовано: resolver принимает любую длину.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MoveDirection(pub Vec2);

/// Скорость движения (units/sec), неизменна после spawn
///
/// Required Components: MoveDirection, VelocityCommand, MovementState
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(MoveDirection, VelocityCommand, MovementState)]
pub struct MoveSpeed(pub f32);

/// Linear velocity command для физики (выход Movement Resolver)
///
/// Physics bridge копирует его в Rapier `Velocity` (или headless интегратор
/// двигает Transform напрямую).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct VelocityCommand(pub Vec2);

/// Производное состояние движения, пересчитывается каждый тик
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub enum MovementState {
    #[default]
    Idle,
    Run,
}

impl MovementState {
    pub fn from_velocity(velocity: Vec2) -> Self {
        if velocity.length() > MOVEMENT_THRESHOLD {
            MovementState::Run
        } else {
            MovementState::Idle
        }
    }
}

/// Направление взгляда спрайта (-1 / +1)
///
/// Hysteresis: меняется только когда |velocity.x| > MOVEMENT_THRESHOLD,
/// иначе сохраняет прошлое значение (нет мерцания около нуля).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct FacingDirection(pub f32);

impl Default for FacingDirection {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Знак направления прицеливания (-1 / +1), из input aim vector
///
/// Animation Driver сравнивает с ним направление движения:
/// движение "против прицела" = анимация бега в обратную сторону.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AimDirection(pub f32);

impl Default for AimDirection {
    fn default() -> Self {
        Self(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_state_threshold() {
        assert_eq!(MovementState::from_velocity(Vec2::ZERO), MovementState::Idle);
        assert_eq!(MovementState::from_velocity(Vec2::new(0.15, 0.0)), MovementState::Idle);
        assert_eq!(MovementState::from_velocity(Vec2::new(0.0, 0.2)), MovementState::Run);
        // Диагональ: каждая ось ниже порога, длина выше
        assert_eq!(MovementState::from_velocity(Vec2::new(0.12, 0.12)), MovementState::Run);
    }

    #[test]
    fn test_move_speed_requires_movement_components() {
        let mut world = World::new();
        let entity = world.spawn(MoveSpeed(3.0)).id();

        assert!(world.get::<MoveDirection>(entity).is_some());
        assert!(world.get::<VelocityCommand>(entity).is_some());
        assert_eq!(world.get::<MovementState>(entity), Some(&MovementState::Idle));
    }
}
