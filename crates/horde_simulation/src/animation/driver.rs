//! Per-entity state machine: {frame 0..6} × {Idle, Run}

use bevy::prelude::*;

use crate::components::{
    AimDirection, AnimationCategory, AnimationRate, FacingDirection, MoveDirection, MovementState,
    SpriteAnimation, SpriteFrame, FRAME_COUNT,
};

/// Следующий кадр: вперёд `(frame + 1) mod 6`, назад `(frame + 5) mod 6`
pub fn step_frame(frame: u8, forward: bool) -> u8 {
    if forward {
        (frame + 1) % FRAME_COUNT
    } else {
        (frame + FRAME_COUNT - 1) % FRAME_COUNT
    }
}

/// Направление проигрывания
///
/// Стоим или нет горизонтального движения → вперёд.
/// Иначе вперёд только если округлённый MoveDirection.x совпадает со знаком
/// прицела/facing; иначе персонаж пятится → кадры в обратном порядке.
pub fn plays_forward(state: MovementState, move_x: f32, reference_sign: f32) -> bool {
    if state == MovementState::Idle || move_x == 0.0 {
        return true;
    }
    move_x.round() == reference_sign
}

/// Один тик аккумулятора. true если кадр сменился.
///
/// Не больше одного шага за тик, даже если dt покрывает несколько threshold
/// (известное ограничение при просадках fps: остаток догоняется следующими тиками).
pub fn advance_animation(
    animation: &mut SpriteAnimation,
    threshold: f32,
    delta: f32,
    forward: bool,
) -> bool {
    animation.accumulator += delta;

    if animation.accumulator > threshold {
        animation.accumulator -= threshold;
        animation.frame = step_frame(animation.frame, forward);
        return true;
    }

    false
}

/// System: Animation Driver
///
/// Reference sign: AimDirection (игрок) → FacingDirection → +1.
pub fn drive_sprite_animation(
    time: Res<Time>,
    mut sprites: Query<(
        &AnimationRate,
        &MovementState,
        &MoveDirection,
        Option<&AimDirection>,
        Option<&FacingDirection>,
        &mut SpriteAnimation,
        &mut SpriteFrame,
    )>,
) {
    let delta = time.delta_secs();

    for (rate, state, direction, aim, facing, mut animation, mut sprite) in sprites.iter_mut() {
        let reference_sign = aim
            .map(|a| a.0)
            .or_else(|| facing.map(|f| f.0))
            .unwrap_or(1.0);
        let forward = plays_forward(*state, direction.0.x, reference_sign);

        advance_animation(&mut animation, rate.threshold(), delta, forward);

        let category = match state {
            MovementState::Idle => AnimationCategory::Idle,
            MovementState::Run => AnimationCategory::Run,
        };
        let next = SpriteFrame { category, frame: animation.frame };
        if *sprite != next {
            *sprite = next;
        }
    }
}
