//! Headless симуляция HORDE
//!
//! Игрок стоит в центре, кольцо врагов сходится к нему; каждые 60 тиков
//! печатаем накопленный урон.

use bevy::prelude::*;
use horde_simulation::{
    create_headless_app, drain_damage, log_error, spawn_enemy_ring, spawn_player,
    DeterministicRng, EnemyConfig, PlayerConfig, SimulationResult,
};

fn spawn_arena(world: &mut World) -> SimulationResult<Entity> {
    let mut rng = world
        .remove_resource::<DeterministicRng>()
        .unwrap_or_else(|| DeterministicRng::new(42));

    let result = {
        let mut commands = world.commands();
        spawn_player(&mut commands, &PlayerConfig::default(), Vec2::ZERO).and_then(|player| {
            spawn_enemy_ring(&mut commands, &mut rng, &EnemyConfig::default(), Vec2::ZERO, 8.0, 12)
                .map(|_| player)
        })
    };
    world.flush();
    world.insert_resource(rng);

    result
}

fn main() {
    let seed = 42;
    println!("Starting HORDE headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);

    let player = match spawn_arena(app.world_mut()) {
        Ok(player) => player,
        Err(error) => {
            log_error(&format!("❌ Arena spawn failed: {}", error));
            return;
        }
    };

    let mut total_damage = 0.0;

    // Запускаем 1000 тиков симуляции
    for tick in 0..1000 {
        app.update();

        if tick % 60 == 0 {
            match drain_damage(app.world_mut(), player) {
                Ok(hits) => total_damage += hits.iter().sum::<f32>(),
                Err(error) => {
                    log_error(&format!("❌ {}", error));
                    return;
                }
            }

            let entity_count = app.world().entities().len();
            println!(
                "Tick {}: {} entities, damage taken {:.1}",
                tick, entity_count, total_damage
            );
        }
    }

    println!("Simulation complete!");
}
