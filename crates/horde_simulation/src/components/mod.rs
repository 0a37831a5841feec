//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - actor: Player / Enemy markers, lifecycle флаги (DestroyFlag, InitializeCharacter)
//! - movement: MoveDirection, MoveSpeed, VelocityCommand, MovementState, Facing/Aim
//! - animation: AnimationRate, SpriteAnimation, SpriteFrame, SpriteFlip
//! - combat: AttackProfile, AttackCooldown, DamageQueue
//! - camera: CameraRig, CameraTarget, AimPoint

pub mod actor;
pub mod animation;
pub mod camera;
pub mod combat;
pub mod movement;

// Re-exports для удобного импорта
pub use actor::*;
pub use animation::*;
pub use camera::*;
pub use combat::*;
pub use movement::*;
