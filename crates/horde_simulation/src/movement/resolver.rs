//! Movement Resolver: direction × speed → velocity command + movement state

use bevy::prelude::*;

use crate::components::{
    FacingDirection, MoveDirection, MoveSpeed, MovementState, VelocityCommand, MOVEMENT_THRESHOLD,
};

/// Результат резолва для одной entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMovement {
    pub velocity: Vec2,
    pub state: MovementState,
    /// Новое значение facing; прошлое если |velocity.x| <= MOVEMENT_THRESHOLD
    pub facing: f32,
}

/// velocity = speed * direction (покомпонентно), state и facing: производные
pub fn resolve_velocity(direction: Vec2, speed: f32, previous_facing: f32) -> ResolvedMovement {
    let velocity = speed * direction;

    let facing = if velocity.x.abs() > MOVEMENT_THRESHOLD {
        velocity.x.signum()
    } else {
        previous_facing
    };

    ResolvedMovement {
        velocity,
        state: MovementState::from_velocity(velocity),
        facing,
    }
}

/// System: Movement Resolver
///
/// Entity без MoveDirection/MoveSpeed просто не попадают в query (не ошибка).
/// FacingDirection опционален.
pub fn resolve_movement(
    mut movers: Query<(
        &MoveDirection,
        &MoveSpeed,
        &mut VelocityCommand,
        &mut MovementState,
        Option<&mut FacingDirection>,
    )>,
) {
    for (direction, speed, mut velocity, mut state, facing) in movers.iter_mut() {
        let previous_facing = facing.as_deref().map_or(1.0, |f| f.0);
        let resolved = resolve_velocity(direction.0, speed.0, previous_facing);

        velocity.0 = resolved.velocity;
        // Пишем только при изменении: Changed<MovementState> не спамит
        if *state != resolved.state {
            *state = resolved.state;
        }
        if let Some(mut facing) = facing {
            if facing.0 != resolved.facing {
                facing.0 = resolved.facing;
            }
        }
    }
}
