//! Animation Driver: кадры спрайта из movement state и времени
//!
//! Presentation коллаборатор читает `SpriteFrame` (label `{category}_{frame}`)
//! и сам выбирает спрайт; симуляция ничего не рисует.

use bevy::prelude::*;

use crate::SimulationSet;

pub mod driver;

pub use driver::{advance_animation, drive_sprite_animation, plays_forward, step_frame};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            drive_sprite_animation.in_set(SimulationSet::Animation),
        );
    }
}
