//! Actor domain: spawn и lifecycle персонажей
//!
//! Содержит:
//! - config: authoring параметры (serde) игрока и врагов
//! - spawn: spawn_player / spawn_enemy / spawn_enemy_ring
//! - ActorPlugin: init tags в начале тика, destroy + flush в конце

use bevy::prelude::*;

use crate::deferred::{flush_command_buffer, queue_flagged_destroys, CommandBuffer};
use crate::physics::initialize_characters;
use crate::SimulationSet;

pub mod config;
pub mod spawn;


// Re-export основных типов
pub use config::{CharacterConfig, EnemyConfig, PlayerConfig};
pub use spawn::{spawn_enemy, spawn_enemy_ring, spawn_player};

/// Actor Plugin
///
/// Порядок выполнения:
/// - SimulationSet::Initialization: initialize_characters
/// - SimulationSet::Cleanup: queue_flagged_destroys → flush_command_buffer
///   (единственная точка структурных изменений за тик)
pub struct ActorPlugin;

impl Plugin for ActorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CommandBuffer>()
            .add_systems(
                FixedUpdate,
                initialize_characters.in_set(SimulationSet::Initialization),
            )
            .add_systems(
                FixedUpdate,
                (queue_flagged_destroys, flush_command_buffer)
                    .chain()
                    .in_set(SimulationSet::Cleanup),
            );
    }
}
