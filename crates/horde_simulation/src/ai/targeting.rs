//! Enemy Targeting: прямое преследование игрока
//!
//! Игрок: singleton. Резолвится один раз за тик явным query
//! (0 → `NoPlayerEntity`, >1 → `MultiplePlayerEntities`) и передаётся
//! зависимым проходам по значению через `PlayerAnchor`.

use bevy::ecs::error::BevyError;
use bevy::prelude::*;

use crate::components::{Enemy, MoveDirection, Player, SpriteFlip};
use crate::error::{SimulationError, SimulationResult};

/// Игрок, зарезолвленный в этом тике
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPlayer {
    pub entity: Entity,
    pub position: Vec2,
}

/// Результат резолва игрока за текущий тик (None: не зарезолвлен)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerAnchor(pub Option<ResolvedPlayer>);

impl PlayerAnchor {
    pub fn get(&self) -> Option<ResolvedPlayer> {
        self.0
    }
}

/// Ровно один игрок или ошибка (никогда не выбираем "первого попавшегося")
pub fn resolve_player(
    players: impl IntoIterator<Item = (Entity, Vec2)>,
) -> SimulationResult<ResolvedPlayer> {
    let mut players = players.into_iter();

    let Some((entity, position)) = players.next() else {
        return Err(SimulationError::NoPlayerEntity);
    };

    let extra = players.count();
    if extra > 0 {
        return Err(SimulationError::MultiplePlayerEntities { count: extra + 1 });
    }

    Ok(ResolvedPlayer { entity, position })
}

/// Нормализация без деления на ноль: нулевой (или не конечный) вектор → ноль
pub fn normalize_safe(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// System: резолв игрока (первым в Targeting)
///
/// Ошибка уходит в error handler Bevy (по умолчанию panic: fail loudly);
/// anchor при этом сброшен, зависимые проходы пропускают тик.
pub fn resolve_player_anchor(
    players: Query<(Entity, &Transform), With<Player>>,
    mut anchor: ResMut<PlayerAnchor>,
) -> Result<(), BevyError> {
    let resolved = resolve_player(
        players
            .iter()
            .map(|(entity, transform)| (entity, transform.translation.truncate())),
    );

    match resolved {
        Ok(player) => {
            anchor.0 = Some(player);
            Ok(())
        }
        Err(error) => {
            anchor.0 = None;
            crate::logger::log_error(&format!("❌ Player resolve failed: {}", error));
            Err(error.into())
        }
    }
}

/// System: направление и flip каждого врага к игроку
pub fn steer_enemies_toward_player(
    anchor: Res<PlayerAnchor>,
    mut enemies: Query<(&Transform, &mut MoveDirection, &mut SpriteFlip), With<Enemy>>,
) {
    let Some(player) = anchor.get() else {
        return;
    };

    for (transform, mut direction, mut flip) in enemies.iter_mut() {
        let enemy_pos = transform.translation.truncate();

        direction.0 = normalize_safe(player.position - enemy_pos);

        let flip_x = enemy_pos.x < player.position.x;
        if flip.0 != flip_x {
            flip.0 = flip_x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_resolve_player_singleton() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        assert_eq!(
            resolve_player(Vec::<(Entity, Vec2)>::new()),
            Err(SimulationError::NoPlayerEntity)
        );
        assert_eq!(
            resolve_player([(a, Vec2::ZERO), (b, Vec2::ONE)]),
            Err(SimulationError::MultiplePlayerEntities { count: 2 })
        );
        assert_eq!(
            resolve_player([(a, Vec2::new(3.0, 4.0))]),
            Ok(ResolvedPlayer { entity: a, position: Vec2::new(3.0, 4.0) })
        );
    }

    #[test]
    fn test_normalize_safe_unit_or_zero() {
        assert_eq!(normalize_safe(Vec2::ZERO), Vec2::ZERO);

        for v in [Vec2::new(3.0, 4.0), Vec2::new(-0.001, 0.0), Vec2::new(1e6, -1e6)] {
            let n = normalize_safe(v);
            assert!(n.is_finite());
            assert!((n.length() - 1.0).abs() < 1e-5, "v={:?} n={:?}", v, n);
        }
    }

    #[test]
    fn test_enemies_steer_toward_player() {
        let mut world = World::new();
        let player = world.spawn((Player, Transform::from_xyz(0.0, 0.0, 0.0))).id();
        let left = world
            .spawn((Enemy, Transform::from_xyz(-3.0, 0.0, 0.0), MoveDirection::default()))
            .id();
        let stacked = world
            .spawn((Enemy, Transform::from_xyz(0.0, 0.0, 0.0), MoveDirection(Vec2::X)))
            .id();
        world.init_resource::<PlayerAnchor>();

        world.run_system_once(resolve_player_anchor).unwrap().unwrap();
        assert_eq!(world.resource::<PlayerAnchor>().get().map(|p| p.entity), Some(player));

        world.run_system_once(steer_enemies_toward_player).unwrap();

        assert_eq!(world.get::<MoveDirection>(left).unwrap().0, Vec2::X);
        assert_eq!(world.get::<SpriteFlip>(left), Some(&SpriteFlip(true)));

        // Совпадающие позиции → нулевой вектор, не NaN
        assert_eq!(world.get::<MoveDirection>(stacked).unwrap().0, Vec2::ZERO);
        assert_eq!(world.get::<SpriteFlip>(stacked), Some(&SpriteFlip(false)));
    }

    #[test]
    fn test_missing_player_fails_and_clears_anchor() {
        let mut world = World::new();
        world.insert_resource(PlayerAnchor(Some(ResolvedPlayer {
            entity: Entity::PLACEHOLDER,
            position: Vec2::ZERO,
        })));
        let enemy = world
            .spawn((Enemy, Transform::from_xyz(1.0, 0.0, 0.0), MoveDirection(Vec2::Y)))
            .id();

        let result = world.run_system_once(resolve_player_anchor).unwrap();
        assert!(result.is_err());
        assert_eq!(world.resource::<PlayerAnchor>().get(), None);

        // Без anchor враги не трогаются
        world.run_system_once(steer_enemies_toward_player).unwrap();
        assert_eq!(world.get::<MoveDirection>(enemy).unwrap().0, Vec2::Y);
    }
}
