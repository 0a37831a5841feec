//! Тесты детерминизма
//!
//! Симуляция с одинаковым seed даёт идентичные результаты

use bevy::prelude::*;
use horde_simulation::*;

fn spawn_arena(app: &mut App) {
    let world = app.world_mut();
    let mut rng = world.remove_resource::<DeterministicRng>().unwrap();
    {
        let mut commands = world.commands();
        spawn_player(&mut commands, &PlayerConfig::default(), Vec2::ZERO).unwrap();
        spawn_enemy_ring(&mut commands, &mut rng, &EnemyConfig::default(), Vec2::ZERO, 6.0, 20)
            .unwrap();
    }
    world.flush();
    world.insert_resource(rng);
}

/// Прогон: игрок бегает по квадрату, враги преследуют
fn run_simulation(seed: u64, tick_count: usize) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut app = create_headless_app(seed);
    spawn_arena(&mut app);

    for tick in 0..tick_count {
        let movement = match (tick / 60) % 4 {
            0 => Vec2::X,
            1 => Vec2::Y,
            2 => Vec2::NEG_X,
            _ => Vec2::NEG_Y,
        };
        app.world_mut().insert_resource(PlayerInput { movement, aim: movement });
        app.update();
    }

    let world = app.world_mut();
    (
        world_snapshot::<Transform>(world),
        world_snapshot::<DamageQueue>(world),
        world_snapshot::<AttackCooldown>(world),
    )
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    let snapshot1 = run_simulation(SEED, TICK_COUNT);
    let snapshot2 = run_simulation(SEED, TICK_COUNT);

    assert_eq!(
        snapshot1, snapshot2,
        "Симуляция с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_different_seeds_differ() {
    let (transforms1, _, _) = run_simulation(1, 10);
    let (transforms2, _, _) = run_simulation(2, 10);

    assert_ne!(transforms1, transforms2, "Разные seed должны давать разную раскладку врагов");
}
