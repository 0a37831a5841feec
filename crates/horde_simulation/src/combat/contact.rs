//! Combat Resolver: контакт тел → урон игроку
//!
//! Для каждого ContactEvent:
//! 1. Роли: ровно одна сторона игрок (Player + DamageQueue), другая атакующий
//!    (AttackProfile). Иначе контакт игнорируется (не ошибка, не логируем).
//! 2. Атакующий на cooldown → игнор.
//! 3. Иначе: damage → DamageQueue игрока, cooldown = now + AttackProfile.cooldown.
//!
//! Взаимные атакующие (обе стороны с AttackProfile) дропаются: роли неоднозначны.
//!
//! Check-then-set cooldown выполняется под эксклюзивным `&mut AttackCooldown`:
//! второй контакт того же атакующего в этом тике видит уже запущенный cooldown.
//! Разные атакующие независимы.

use bevy::prelude::*;

use crate::combat::{AttackLanded, ContactEvent};
use crate::components::{AttackCooldown, AttackProfile, DamageQueue, Player};

/// Сторона контакта и её способности
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub entity: Entity,
    pub is_player: bool,
    pub is_attacker: bool,
}

/// Роли в контакте
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatRoles {
    pub attacker: Entity,
    pub defender: Entity,
}

/// Роли однозначны только если подходит ровно одна ориентация пары
pub fn assign_roles(a: Participant, b: Participant) -> Option<CombatRoles> {
    // Обе стороны с AttackProfile: дропаем, даже если одна из них игрок
    if a.is_attacker && b.is_attacker {
        return None;
    }

    let a_attacks_b = b.is_player && a.is_attacker;
    let b_attacks_a = a.is_player && b.is_attacker;

    match (a_attacks_b, b_attacks_a) {
        (true, false) => Some(CombatRoles { attacker: a.entity, defender: b.entity }),
        (false, true) => Some(CombatRoles { attacker: b.entity, defender: a.entity }),
        _ => None,
    }
}

/// System: Combat Resolver (после sweep_attack_cooldowns)
pub fn resolve_contact_attacks(
    time: Res<Time>,
    mut contacts: EventReader<ContactEvent>,
    mut attackers: Query<(&AttackProfile, &mut AttackCooldown)>,
    mut players: Query<&mut DamageQueue, With<Player>>,
    mut landed: EventWriter<AttackLanded>,
) {
    let now = time.elapsed_secs_f64();

    for contact in contacts.read() {
        let participant = |entity: Entity| Participant {
            entity,
            is_player: players.contains(entity),
            is_attacker: attackers.contains(entity),
        };
        let Some(roles) = assign_roles(participant(contact.a), participant(contact.b)) else {
            continue;
        };

        let Ok((profile, mut cooldown)) = attackers.get_mut(roles.attacker) else {
            continue;
        };
        let Ok(mut queue) = players.get_mut(roles.defender) else {
            continue;
        };

        if !cooldown.try_begin(now, profile.cooldown()) {
            continue;
        }

        queue.push(profile.damage());
        landed.write(AttackLanded {
            attacker: roles.attacker,
            target: roles.defender,
            damage: profile.damage(),
        });

        crate::logger::log(&format!(
            "⚔️ {:?} hit {:?} for {} (cooldown until {:.2})",
            roles.attacker,
            roles.defender,
            profile.damage(),
            now + profile.cooldown() as f64
        ));
    }
}
