//! Camera target / aim point: позиции внешних presentation объектов
//!
//! Camera rig живёт в presentation слое и может появиться позже игрока.
//! Привязка идёт через init tag `InitializeCameraTarget`: пока rig нет,
//! тег висит и проход повторяется каждый тик.

use bevy::ecs::error::BevyError;
use bevy::ecs::system::Deferred;
use bevy::prelude::*;

use crate::components::{
    AimPoint, CameraRig, CameraTarget, InitializeCameraTarget, MoveDirection, Player,
};
use crate::deferred::CommandBuffer;
use crate::error::SimulationError;
use crate::movement::PlayerInput;
use crate::SimulationSet;

/// Camera Plugin
///
/// - bind_camera_target (SimulationSet::Initialization)
/// - follow_camera_target → follow_aim_point (SimulationSet::Presentation)
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            bind_camera_target.in_set(SimulationSet::Initialization),
        )
        .add_systems(
            FixedUpdate,
            (follow_camera_target, follow_aim_point)
                .chain()
                .in_set(SimulationSet::Presentation),
        );
    }
}

/// Ноль rig → ждём (None), один → Some, больше → ошибка
pub fn resolve_camera_rig(
    rigs: impl IntoIterator<Item = Entity>,
) -> Result<Option<Entity>, SimulationError> {
    let mut rigs = rigs.into_iter();

    let Some(rig) = rigs.next() else {
        return Ok(None);
    };

    let extra = rigs.count();
    if extra > 0 {
        return Err(SimulationError::MultipleCameraRigs { count: extra + 1 });
    }

    Ok(Some(rig))
}

/// Точка, на которую смотрит камера: игрок, смещённый по направлению движения
pub fn camera_focus(player: Vec2, direction: Vec2) -> Vec2 {
    player + direction
}

/// System: привязка игрока к camera rig
pub fn bind_camera_target(
    mut pending: Query<(Entity, &mut CameraTarget), (With<Player>, With<InitializeCameraTarget>)>,
    rigs: Query<Entity, With<CameraRig>>,
    mut buffer: Deferred<CommandBuffer>,
) -> Result<(), BevyError> {
    if pending.is_empty() {
        return Ok(());
    }

    let rig = match resolve_camera_rig(rigs.iter()) {
        Ok(Some(rig)) => rig,
        Ok(None) => return Ok(()),
        Err(error) => {
            crate::logger::log_error(&format!("❌ Camera binding failed: {}", error));
            return Err(error.into());
        }
    };

    for (player, mut target) in pending.iter_mut() {
        target.rig = Some(rig);
        buffer.record_remove_component::<InitializeCameraTarget>(player);
        crate::logger::log_info(&format!("🎥 Camera rig {:?} bound to player {:?}", rig, player));
    }

    Ok(())
}

/// System: rig.xy = player.xy + MoveDirection (z rig сохраняется)
///
/// Rig, пропавший из мира,: тихий no-op.
pub fn follow_camera_target(
    players: Query<(&Transform, &MoveDirection, &CameraTarget), With<Player>>,
    mut rigs: Query<&mut Transform, (With<CameraRig>, Without<Player>)>,
) {
    for (transform, direction, target) in players.iter() {
        let Some(rig) = target.rig else {
            continue;
        };
        let Ok(mut rig_transform) = rigs.get_mut(rig) else {
            continue;
        };

        let focus = camera_focus(transform.translation.truncate(), direction.0);
        rig_transform.translation.x = focus.x;
        rig_transform.translation.y = focus.y;
    }
}

/// System: aim marker = player + input.aim (z marker сохраняется)
pub fn follow_aim_point(
    input: Res<PlayerInput>,
    players: Query<(&Transform, &AimPoint), With<Player>>,
    mut markers: Query<&mut Transform, (Without<Player>, Without<CameraRig>)>,
) {
    for (transform, aim_point) in players.iter() {
        let Ok(mut marker) = markers.get_mut(aim_point.marker) else {
            continue;
        };

        let point = transform.translation.truncate() + input.aim;
        marker.translation.x = point.x;
        marker.translation.y = point.y;
    }
}
