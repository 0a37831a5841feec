//! Camera target / aim point компоненты
//!
//! Симуляция только пишет позиции во внешние presentation объекты
//! (их lifecycle не наш).

use bevy::prelude::*;

/// Marker внешнего camera rig объекта (presentation слой)
///
/// Допустим ноль (ещё не загружен) или один; больше: ошибка.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CameraRig;

/// Init tag: player ещё не привязан к camera rig
///
/// Снимается через CommandBuffer после успешной привязки.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InitializeCameraTarget;

/// Ссылка игрока на camera rig (None: пока не привязан)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CameraTarget {
    pub rig: Option<Entity>,
}

/// Ссылка игрока на внешний объект-прицел (курсор в мире)
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct AimPoint {
    pub marker: Entity,
}
