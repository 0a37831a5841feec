//! Movement domain: input игрока и Movement Resolver
//!
//! Содержит:
//! - PlayerInput (resource от внешнего input capture)
//! - apply_player_input (Input set)
//! - resolve_movement (Movement set): VelocityCommand, MovementState, FacingDirection

use bevy::prelude::*;

use crate::SimulationSet;

pub mod input;
pub mod resolver;

pub use input::{aim_sign, apply_player_input, PlayerInput};
pub use resolver::{resolve_movement, resolve_velocity, ResolvedMovement};

/// Movement Plugin
///
/// Порядок выполнения:
/// 1. apply_player_input (SimulationSet::Input)
/// 2. resolve_movement (SimulationSet::Movement)
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>().add_systems(
            FixedUpdate,
            (
                apply_player_input.in_set(SimulationSet::Input),
                resolve_movement.in_set(SimulationSet::Movement),
            ),
        );
    }
}
