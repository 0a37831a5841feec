//! Player input → MoveDirection / AimDirection
//!
//! Input capture внешний: хост раз в тик пишет `PlayerInput` resource.

use bevy::prelude::*;

use crate::components::{AimDirection, MoveDirection, Player, MOVEMENT_THRESHOLD};

/// Input игрока за тик
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    /// Вектор движения (stick / WASD), длина не обязательно 1
    pub movement: Vec2,
    /// Вектор прицеливания (от игрока к курсору)
    pub aim: Vec2,
}

/// Новый знак прицела; около нуля по X: прошлое значение (как facing)
pub fn aim_sign(aim: Vec2, previous: f32) -> f32 {
    if aim.x.abs() > MOVEMENT_THRESHOLD {
        aim.x.signum()
    } else {
        previous
    }
}

/// System: PlayerInput → компоненты игрока
pub fn apply_player_input(
    input: Res<PlayerInput>,
    mut players: Query<(&mut MoveDirection, Option<&mut AimDirection>), With<Player>>,
) {
    for (mut direction, aim) in players.iter_mut() {
        direction.0 = input.movement;

        if let Some(mut aim) = aim {
            aim.0 = aim_sign(input.aim, aim.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_aim_sign_hysteresis() {
        assert_eq!(aim_sign(Vec2::new(-1.0, 0.0), 1.0), -1.0);
        assert_eq!(aim_sign(Vec2::new(0.05, 1.0), -1.0), -1.0);
        assert_eq!(aim_sign(Vec2::new(0.5, -0.5), -1.0), 1.0);
    }

    #[test]
    fn test_input_written_only_to_player() {
        let mut world = World::new();
        world.insert_resource(PlayerInput {
            movement: Vec2::new(0.0, 1.0),
            aim: Vec2::new(-2.0, 0.0),
        });
        let player = world.spawn((Player, MoveDirection::default(), AimDirection(1.0))).id();
        let other = world.spawn(MoveDirection::default()).id();

        world.run_system_once(apply_player_input).unwrap();

        assert_eq!(world.get::<MoveDirection>(player).unwrap().0, Vec2::new(0.0, 1.0));
        assert_eq!(world.get::<AimDirection>(player).unwrap().0, -1.0);
        assert_eq!(world.get::<MoveDirection>(other).unwrap().0, Vec2::ZERO);
    }
}
