//! Enemy AI: только прямое преследование игрока
//!
//! Targeting единственный writer MoveDirection врагов.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod targeting;

pub use targeting::{
    normalize_safe, resolve_player, resolve_player_anchor, steer_enemies_toward_player,
    PlayerAnchor, ResolvedPlayer,
};

/// Targeting Plugin
///
/// Порядок выполнения (SimulationSet::Targeting):
/// 1. resolve_player_anchor: singleton резолв игрока
/// 2. steer_enemies_toward_player: MoveDirection + SpriteFlip врагов
pub struct TargetingPlugin;

impl Plugin for TargetingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerAnchor>().add_systems(
            FixedUpdate,
            (resolve_player_anchor, steer_enemies_toward_player)
                .chain()
                .in_set(SimulationSet::Targeting),
        );
    }
}
