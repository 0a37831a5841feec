//! HORDE Simulation Core
//!
//! Покадровая симуляция 2D action игры на Bevy 0.16 ECS:
//! игрок, орда врагов, контактный урон с cooldown.
//!
//! Порядок проходов в тике: см. `schedule::SimulationSet`.
//! Физика, рендер, health/смерть и input capture: внешние коллабораторы.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// Публичные модули
pub mod actor;
pub mod ai;
pub mod animation;
pub mod camera;
pub mod combat;
pub mod components;
pub mod deferred;
pub mod error;
pub mod logger;
pub mod movement;
pub mod physics;
pub mod schedule;

// Re-export базовых типов для удобства
pub use actor::{
    spawn_enemy, spawn_enemy_ring, spawn_player, ActorPlugin, CharacterConfig, EnemyConfig,
    PlayerConfig,
};
pub use ai::{PlayerAnchor, ResolvedPlayer, TargetingPlugin};
pub use animation::AnimationPlugin;
pub use camera::CameraPlugin;
pub use combat::{AttackLanded, CombatPlugin, ContactEvent};
pub use components::*;
pub use deferred::{CommandBuffer, FlushReport, StructuralIntent};
pub use error::{SimulationError, SimulationResult};
pub use logger::*;
pub use movement::{MovementPlugin, PlayerInput};
pub use physics::{ActiveContacts, HeadlessPhysicsPlugin, RapierBridgePlugin};
pub use schedule::SimulationSet;

/// Глобальные параметры симуляции
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Частота FixedUpdate (тиков в секунду)
    pub tick_hz: f64,
    pub log_level: LogLevel,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tick_hz: 60.0,
            log_level: LogLevel::Info,
        }
    }
}

impl SimulationSettings {
    pub fn timestep(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz)
    }
}

/// Главный plugin симуляции (объединяет все подсистемы)
///
/// Physics backend (`RapierBridgePlugin` или `HeadlessPhysicsPlugin`) хост
/// добавляет сам.
#[derive(Default)]
pub struct SimulationPlugin {
    pub settings: SimulationSettings,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        set_log_level(self.settings.log_level);

        app.insert_resource(self.settings)
            .insert_resource(Time::<Fixed>::from_hz(self.settings.tick_hz));

        // Seed по умолчанию, если хост не задал свой
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        schedule::configure_simulation_schedule(app);

        // Подсистемы (порядок регистрации не важен, порядок задают SimulationSet)
        app.add_plugins((
            ActorPlugin,
            MovementPlugin,
            AnimationPlugin,
            TargetingPlugin,
            CombatPlugin,
            CameraPlugin,
        ));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// SimulationPlugin + HeadlessPhysicsPlugin; `app.update()` продвигает время
/// ровно на один fixed timestep (TimeUpdateStrategy::ManualDuration).
pub fn create_headless_app(seed: u64) -> App {
    let settings = SimulationSettings::default();

    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(settings.timestep()))
        .add_plugins((SimulationPlugin { settings }, HeadlessPhysicsPlugin));

    app
}

/// Один тик напрямую: `Time += dt`, затем FixedUpdate
///
/// Для тестов: без Time<Real> и fixed accumulator.
pub fn advance_tick(app: &mut App, dt: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(dt);
    app.world_mut().run_schedule(FixedUpdate);
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
