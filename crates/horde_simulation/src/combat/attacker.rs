//! Cooldown Sweep: снятие истёкших cooldown атакующих
//!
//! Работает ПЕРЕД resolve_contact_attacks в том же тике: атакующий, чей cooldown
//! истёк в этом тике, может атаковать в этом же тике.

use bevy::prelude::*;

use crate::components::AttackCooldown;

/// System: `Cooling { expiry }` → `Ready` при now >= expiry (никогда раньше)
pub fn sweep_attack_cooldowns(time: Res<Time>, mut cooldowns: Query<&mut AttackCooldown>) {
    let now = time.elapsed_secs_f64();

    for mut cooldown in cooldowns.iter_mut() {
        // Проверка до DerefMut: не трогаем change detection у Ready/не истёкших
        if matches!(*cooldown, AttackCooldown::Cooling { expiry } if now >= expiry) {
            cooldown.expire(now);
        }
    }
}
