//! Spawn helpers для игрока и врагов
//!
//! Config валидируется ДО `commands.spawn`: при ошибке entity не создаётся.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use super::config::{CharacterComponents, EnemyConfig, PlayerConfig};
use crate::components::{
    AimDirection, CameraTarget, DestroyFlag, Enemy, FacingDirection, InitializeCameraTarget,
    InitializeCharacter, Player, SpriteAnimation,
};
use crate::error::SimulationResult;
use crate::physics::character_body;
use crate::DeterministicRng;

/// Компоненты, общие для всех персонажей
fn character_bundle(character: CharacterComponents, position: Vec2) -> impl Bundle {
    (
        Transform::from_translation(position.extend(0.0)),
        character.speed,
        character.rate,
        SpriteAnimation::default(),
        FacingDirection::default(),
        DestroyFlag::default(),
        InitializeCharacter,
        character_body(character.radius),
    )
}

/// Spawn игрока
///
/// Singleton не проверяется здесь: второй Player обнаружит Targeting
/// (`MultiplePlayerEntities`) в ближайшем тике.
pub fn spawn_player(
    commands: &mut Commands,
    config: &PlayerConfig,
    position: Vec2,
) -> SimulationResult<Entity> {
    let character = config.character.validate()?;

    let entity = commands
        .spawn((
            Player,
            AimDirection::default(),
            CameraTarget::default(),
            InitializeCameraTarget,
            character_bundle(character, position),
        ))
        .id();

    crate::logger::log_info(&format!("👤 Player {:?} spawned at {}", entity, position));
    Ok(entity)
}

/// Spawn врага с контактной атакой
pub fn spawn_enemy(
    commands: &mut Commands,
    config: &EnemyConfig,
    position: Vec2,
) -> SimulationResult<Entity> {
    let (character, profile) = config.validate()?;

    let entity = commands
        .spawn((Enemy, profile, character_bundle(character, position)))
        .id();

    crate::logger::log(&format!("👹 Enemy {:?} spawned at {}", entity, position));
    Ok(entity)
}

/// Spawn `count` врагов кольцом вокруг `center`
///
/// Углы и дистанция (radius ± 20%) из DeterministicRng: один seed → одна раскладка.
pub fn spawn_enemy_ring(
    commands: &mut Commands,
    rng: &mut DeterministicRng,
    config: &EnemyConfig,
    center: Vec2,
    radius: f32,
    count: usize,
) -> SimulationResult<Vec<Entity>> {
    // Валидация до первого spawn: либо все, либо ни одного
    config.validate()?;

    let mut enemies = Vec::with_capacity(count);
    for _ in 0..count {
        let angle = rng.rng.gen_range(0.0..TAU);
        let distance = radius * rng.rng.gen_range(0.8..=1.2);
        let position = center + Vec2::from_angle(angle) * distance;

        enemies.push(spawn_enemy(commands, config, position)?);
    }

    crate::logger::log_info(&format!(
        "👹 Enemy ring: {} enemies around {} (seed {})",
        enemies.len(),
        center,
        rng.seed
    ));
    Ok(enemies)
}
