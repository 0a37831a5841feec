//! Порядок проходов внутри одного тика (FixedUpdate)
//!
//! ```text
//! Initialization → Input → Movement → PhysicsSync → Animation
//!   → Targeting → Combat (sweep → resolve) → Presentation → Cleanup (flush)
//! ```
//!
//! Каждый проход читает только то, что записали строго более ранние проходы.
//! FixedUpdate собирается с `ambiguity_detection = Error`: два неупорядоченных
//! writer'а одного компонента валят build расписания, а не дают гонку.

use bevy::ecs::schedule::{LogLevel as AmbiguityLevel, ScheduleBuildSettings};
use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Первичная настройка новых entity (init tags)
    Initialization,
    /// Внешний input → MoveDirection / AimDirection игрока
    Input,
    /// MoveDirection × MoveSpeed → VelocityCommand, MovementState, FacingDirection
    Movement,
    /// Обмен с физикой: velocity command наружу, contact events внутрь
    PhysicsSync,
    /// MovementState + dt → SpriteFrame
    Animation,
    /// Резолв игрока + направление врагов
    Targeting,
    /// Cooldown sweep, затем contact → damage
    Combat,
    /// Позиции camera rig / aim point
    Presentation,
    /// Destroy intents + единственный flush CommandBuffer
    Cleanup,
}

pub(crate) fn configure_simulation_schedule(app: &mut App) {
    app.configure_sets(
        FixedUpdate,
        (
            SimulationSet::Initialization,
            SimulationSet::Input,
            SimulationSet::Movement,
            SimulationSet::PhysicsSync,
            SimulationSet::Animation,
            SimulationSet::Targeting,
            SimulationSet::Combat,
            SimulationSet::Presentation,
            SimulationSet::Cleanup,
        )
            .chain(),
    );

    app.edit_schedule(FixedUpdate, |schedule| {
        schedule.set_build_settings(ScheduleBuildSettings {
            ambiguity_detection: AmbiguityLevel::Error,
            ..default()
        });
    });
}
