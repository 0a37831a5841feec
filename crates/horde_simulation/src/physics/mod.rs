//! Physics bridge: обмен с внешним физическим движком
//!
//! Симуляция не двигает тела сама: Movement Resolver выдаёт `VelocityCommand`,
//! а контакты приходят обратно как `ContactEvent`. Два взаимоисключающих backend:
//! - `RapierBridgePlugin`: bevy_rapier2d (Velocity + CollisionEvent)
//! - `HeadlessPhysicsPlugin`: интеграция Transform + proximity контакты
//!   (тесты, headless binary)

use bevy::prelude::*;

use crate::SimulationSet;

pub mod character;
pub mod headless;
pub mod rapier;

// Re-export основных типов
pub use character::{character_body, initialize_characters};
pub use headless::{detect_proximity_contacts, integrate_velocity_commands};
pub use rapier::{emit_active_contacts, sync_velocity_commands, track_collision_events, ActiveContacts};

/// Rapier backend
///
/// Rapier plugin (`RapierPhysicsPlugin`) добавляет хост; мост только читает
/// его `CollisionEvent` и пишет `Velocity`.
///
/// Порядок выполнения (SimulationSet::PhysicsSync):
/// 1. sync_velocity_commands: VelocityCommand → Velocity.linvel
/// 2. track_collision_events: Started/Stopped → ActiveContacts
/// 3. emit_active_contacts: ContactEvent на каждую касающуюся пару
pub struct RapierBridgePlugin;

impl Plugin for RapierBridgePlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::prelude::CollisionEvent;

        app.add_event::<CollisionEvent>()
            .init_resource::<ActiveContacts>()
            .add_systems(
                FixedUpdate,
                (sync_velocity_commands, track_collision_events, emit_active_contacts)
                    .chain()
                    .in_set(SimulationSet::PhysicsSync),
            );
    }
}

/// Headless backend (без Rapier)
///
/// Порядок выполнения (SimulationSet::PhysicsSync):
/// 1. integrate_velocity_commands: Transform += VelocityCommand * dt
/// 2. detect_proximity_contacts: пересечение BodyRadius → ContactEvent
pub struct HeadlessPhysicsPlugin;

impl Plugin for HeadlessPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            (integrate_velocity_commands, detect_proximity_contacts)
                .chain()
                .in_set(SimulationSet::PhysicsSync),
        );
    }
}
