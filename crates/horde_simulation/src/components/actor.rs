//! Базовые компоненты акторов: Player, Enemy, lifecycle флаги

use bevy::prelude::*;

use super::combat::DamageQueue;

/// Marker component для player-controlled entity
///
/// Singleton: симуляция ожидает ровно один Player в мире.
/// Targeting и camera проходы резолвят его явно через `resolve_player`
/// (ошибка при 0 или >1), никаких глобальных lookup.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(DamageQueue)]
pub struct Player;

/// Marker component для врагов (преследуют игрока)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(crate::components::SpriteFlip)]
pub struct Enemy;

/// Флаг уничтожения entity
///
/// `Pending` → entity попадает в CommandBuffer и удаляется на ближайшем flush
/// (конец тика), никогда не посреди прохода.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum DestroyFlag {
    #[default]
    Clear,
    Pending,
}

impl DestroyFlag {
    pub fn is_pending(&self) -> bool {
        matches!(self, DestroyFlag::Pending)
    }
}

/// Init tag: персонаж ещё не прошёл первичную настройку физического тела
///
/// Снимается через CommandBuffer после блокировки вращения.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct InitializeCharacter;

/// Радиус тела (метры). Используется headless contact detection.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BodyRadius(pub f32);

impl Default for BodyRadius {
    fn default() -> Self {
        Self(0.5)
    }
}
