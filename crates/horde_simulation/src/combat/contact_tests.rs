//! Tests for contact → damage resolution.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;

    use crate::combat::*;
    use crate::components::*;

    fn participant(entity: Entity, is_player: bool, is_attacker: bool) -> Participant {
        Participant { entity, is_player, is_attacker }
    }

    #[test]
    fn test_assign_roles_either_order() {
        let enemy = Entity::from_raw(1);
        let player = Entity::from_raw(2);

        let expected = Some(CombatRoles { attacker: enemy, defender: player });
        assert_eq!(
            assign_roles(participant(enemy, false, true), participant(player, true, false)),
            expected
        );
        assert_eq!(
            assign_roles(participant(player, true, false), participant(enemy, false, true)),
            expected
        );
    }

    #[test]
    fn test_assign_roles_rejects_ambiguous_pairs() {
        let a = Entity::from_raw(1);
        let b = Entity::from_raw(2);

        // Враг ↔ враг
        assert_eq!(assign_roles(participant(a, false, true), participant(b, false, true)), None);
        // Игрок ↔ стена
        assert_eq!(assign_roles(participant(a, true, false), participant(b, false, false)), None);
        // Игрок-атакующий ↔ игрок-атакующий
        assert_eq!(assign_roles(participant(a, true, true), participant(b, true, true)), None);
        // Игрок с AttackProfile ↔ враг: оба атакующие
        assert_eq!(assign_roles(participant(a, true, true), participant(b, false, true)), None);
        assert_eq!(assign_roles(participant(b, false, true), participant(a, true, true)), None);
    }

    struct Arena {
        world: World,
        player: Entity,
    }

    impl Arena {
        fn new() -> Self {
            let mut world = World::new();
            world.insert_resource(Time::<()>::default());
            world.init_resource::<Events<ContactEvent>>();
            world.init_resource::<Events<AttackLanded>>();
            let player = world.spawn(Player).id();
            Self { world, player }
        }

        fn enemy(&mut self, damage: f32, cooldown: f32) -> Entity {
            let profile = AttackProfile::new(damage, cooldown).unwrap();
            self.world.spawn((Enemy, profile)).id()
        }

        /// Тик на абсолютном времени `at`: sweep → resolve
        fn tick(&mut self, at: f64, contacts: &[(Entity, Entity)]) {
            self.world
                .resource_mut::<Time>()
                .advance_to(Duration::from_secs_f64(at));
            self.world.resource_mut::<Events<ContactEvent>>().clear();
            for &(a, b) in contacts {
                self.world.send_event(ContactEvent { a, b });
            }
            self.world.run_system_once(sweep_attack_cooldowns).unwrap();
            self.world.run_system_once(resolve_contact_attacks).unwrap();
        }

        fn damage(&self) -> Vec<f32> {
            self.world.get::<DamageQueue>(self.player).unwrap().entries().to_vec()
        }
    }

    #[test]
    fn test_cooldown_timeline() {
        let mut arena = Arena::new();
        let enemy = arena.enemy(10.0, 2.0);
        let player = arena.player;

        arena.tick(0.0, &[(enemy, player)]);
        assert_eq!(arena.damage(), vec![10.0]);
        assert_eq!(
            arena.world.get::<AttackCooldown>(enemy),
            Some(&AttackCooldown::Cooling { expiry: 2.0 })
        );

        // t=1.0: ещё на cooldown
        arena.tick(1.0, &[(player, enemy)]);
        assert_eq!(arena.damage(), vec![10.0]);

        // t=2.1: sweep снял cooldown в этом же тике → снова бьёт
        arena.tick(2.1, &[(enemy, player)]);
        assert_eq!(arena.damage(), vec![10.0, 10.0]);
    }

    #[test]
    fn test_independent_attackers_same_tick() {
        let mut arena = Arena::new();
        let first = arena.enemy(10.0, 2.0);
        let second = arena.enemy(10.0, 2.0);
        let player = arena.player;

        arena.tick(0.5, &[(first, player), (player, second)]);

        // Одинаковые профили: каждый атакующий со своим cooldown, оба попадают
        assert_eq!(arena.damage(), vec![10.0, 10.0]);
        let cooling = AttackCooldown::Cooling { expiry: 2.5 };
        assert_eq!(arena.world.get::<AttackCooldown>(first), Some(&cooling));
        assert_eq!(arena.world.get::<AttackCooldown>(second), Some(&cooling));
        assert_eq!(arena.world.resource::<Events<AttackLanded>>().len(), 2);
    }

    #[test]
    fn test_repeat_contact_lands_once_per_tick() {
        let mut arena = Arena::new();
        let enemy = arena.enemy(10.0, 2.0);
        let player = arena.player;

        arena.tick(0.0, &[(enemy, player), (player, enemy), (enemy, player)]);

        assert_eq!(arena.damage(), vec![10.0]);
        let landed = arena.world.resource::<Events<AttackLanded>>();
        assert_eq!(landed.len(), 1);
    }

    #[test]
    fn test_mutual_attackers_are_dropped() {
        let mut arena = Arena::new();
        let a = arena.enemy(10.0, 2.0);
        let b = arena.enemy(10.0, 2.0);

        arena.tick(0.0, &[(a, b)]);

        assert!(arena.damage().is_empty());
        assert_eq!(arena.world.get::<AttackCooldown>(a), Some(&AttackCooldown::Ready));
        assert_eq!(arena.world.get::<AttackCooldown>(b), Some(&AttackCooldown::Ready));
    }

    #[test]
    fn test_armed_player_vs_enemy_is_dropped() {
        let mut arena = Arena::new();
        let enemy = arena.enemy(10.0, 2.0);
        let player = arena.player;
        arena
            .world
            .entity_mut(player)
            .insert(AttackProfile::new(5.0, 1.0).unwrap());

        arena.tick(0.0, &[(enemy, player), (player, enemy)]);

        assert!(arena.damage().is_empty());
        assert_eq!(arena.world.get::<AttackCooldown>(enemy), Some(&AttackCooldown::Ready));
        assert_eq!(arena.world.get::<AttackCooldown>(player), Some(&AttackCooldown::Ready));
        assert!(arena.world.resource::<Events<AttackLanded>>().is_empty());
    }

    #[test]
    fn test_contact_with_despawned_entity_is_ignored() {
        let mut arena = Arena::new();
        let enemy = arena.enemy(10.0, 2.0);
        let player = arena.player;
        arena.world.despawn(enemy);

        arena.tick(0.0, &[(enemy, player)]);

        assert!(arena.damage().is_empty());
    }
}
