//! Первичная настройка физического тела персонажа

use bevy::ecs::system::Deferred;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{BodyRadius, InitializeCharacter};
use crate::deferred::CommandBuffer;

/// Rapier компоненты персонажа (top-down: без гравитации)
///
/// Вращение НЕ заблокировано: это делает `initialize_characters` в первом тике.
pub fn character_body(radius: BodyRadius) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::ball(radius.0),
        radius,
        Velocity::zero(),
        LockedAxes::empty(),
        GravityScale(0.0),
        ActiveEvents::COLLISION_EVENTS,
    )
}

/// System: блокировка вращения новых персонажей (SimulationSet::Initialization)
///
/// Tag `InitializeCharacter` снимается через CommandBuffer (на flush в конце тика).
pub fn initialize_characters(
    mut characters: Query<(Entity, Option<&mut LockedAxes>), With<InitializeCharacter>>,
    mut buffer: Deferred<CommandBuffer>,
) {
    for (entity, locked) in characters.iter_mut() {
        if let Some(mut locked) = locked {
            *locked = LockedAxes::ROTATION_LOCKED;
        }
        buffer.record_remove_component::<InitializeCharacter>(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deferred::flush_command_buffer;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_rotation_locked_and_tag_removed_on_flush() {
        let mut world = World::new();
        world.init_resource::<CommandBuffer>();
        let character = world
            .spawn((character_body(BodyRadius(0.4)), InitializeCharacter))
            .id();

        world.run_system_once(initialize_characters).unwrap();

        assert_eq!(
            world.get::<LockedAxes>(character),
            Some(&LockedAxes::ROTATION_LOCKED)
        );
        // Tag снимается только на flush
        assert!(world.get::<InitializeCharacter>(character).is_some());
        assert_eq!(world.resource::<CommandBuffer>().len(), 1);

        flush_command_buffer(&mut world);

        assert!(world.get::<InitializeCharacter>(character).is_none());
        assert!(world.resource::<CommandBuffer>().is_empty());
    }

    #[test]
    fn test_initialized_character_is_skipped() {
        let mut world = World::new();
        world.init_resource::<CommandBuffer>();
        let character = world.spawn(character_body(BodyRadius::default())).id();

        world.run_system_once(initialize_characters).unwrap();

        assert_eq!(world.get::<LockedAxes>(character), Some(&LockedAxes::empty()));
        assert!(world.resource::<CommandBuffer>().is_empty());
    }
}
