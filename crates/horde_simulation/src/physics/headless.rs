//! Headless физика: без Rapier
//!
//! Прямая интеграция `Transform += VelocityCommand * dt` и контакт по
//! пересечению окружностей `BodyRadius`. Коллизионного отклика нет:
//! тела проходят сквозь друг друга.

use bevy::prelude::*;

use crate::combat::ContactEvent;
use crate::components::{BodyRadius, VelocityCommand};

/// System: VelocityCommand → Transform (z не трогаем)
pub fn integrate_velocity_commands(
    time: Res<Time>,
    mut bodies: Query<(&VelocityCommand, &mut Transform)>,
) {
    let delta = time.delta_secs();

    for (velocity, mut transform) in bodies.iter_mut() {
        if velocity.0 == Vec2::ZERO {
            continue;
        }
        transform.translation += (velocity.0 * delta).extend(0.0);
    }
}

/// Касаются ли две окружности (граница включительно)
pub fn bodies_touch(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    a.distance_squared(b) <= reach * reach
}

/// System: ContactEvent для каждой пересекающейся пары тел
pub fn detect_proximity_contacts(
    bodies: Query<(Entity, &Transform, &BodyRadius)>,
    mut events: EventWriter<ContactEvent>,
) {
    for [(a, transform_a, radius_a), (b, transform_b, radius_b)] in bodies.iter_combinations() {
        if bodies_touch(
            transform_a.translation.truncate(),
            radius_a.0,
            transform_b.translation.truncate(),
            radius_b.0,
        ) {
            events.write(ContactEvent { a, b });
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_bodies_touch_boundary() {
        assert!(bodies_touch(Vec2::ZERO, 0.5, Vec2::new(1.0, 0.0), 0.5));
        assert!(bodies_touch(Vec2::ZERO, 0.5, Vec2::new(0.3, 0.3), 0.1));
        assert!(!bodies_touch(Vec2::ZERO, 0.5, Vec2::new(1.01, 0.0), 0.5));
    }

    #[test]
    fn test_integration_uses_delta() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);
        let body = world
            .spawn((VelocityCommand(Vec2::new(2.0, -4.0)), Transform::from_xyz(1.0, 1.0, 5.0)))
            .id();

        world.run_system_once(integrate_velocity_commands).unwrap();

        assert_eq!(
            world.get::<Transform>(body).unwrap().translation,
            Vec3::new(2.0, -1.0, 5.0)
        );
    }

    #[test]
    fn test_proximity_contacts() {
        let mut world = World::new();
        world.init_resource::<Events<ContactEvent>>();
        let a = world.spawn((Transform::from_xyz(0.0, 0.0, 0.0), BodyRadius(0.5))).id();
        let b = world.spawn((Transform::from_xyz(0.8, 0.0, 0.0), BodyRadius(0.5))).id();
        world.spawn((Transform::from_xyz(10.0, 0.0, 0.0), BodyRadius(0.5)));

        world.run_system_once(detect_proximity_contacts).unwrap();

        let events: Vec<_> = world.resource_mut::<Events<ContactEvent>>().drain().collect();
        assert_eq!(events.len(), 1);
        let pair = [events[0].a, events[0].b];
        assert!(pair.contains(&a) && pair.contains(&b));
    }
}
