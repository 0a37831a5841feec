//! Ошибки симуляции
//!
//! Два класса:
//! - структурные/config ошибки (`InvalidConfig`, `ComponentMissing`): прерывают spawn,
//!   entity не становится live
//! - нарушение singleton инварианта (`NoPlayerEntity`, `MultiplePlayerEntities`,
//!   `MultipleCameraRigs`): fallible Bevy системы возвращают их в error handler
//!
//! Per-tick no-op ситуации (контакт без ролей, атакующий на cooldown, нет camera rig)
//! ошибками НЕ являются.

use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Entity не имеет компонента, который обязателен по контракту spawn
    #[error("entity {entity:?} has no {component} component")]
    ComponentMissing {
        entity: Entity,
        component: &'static str,
    },

    #[error("no player entity in the world")]
    NoPlayerEntity,

    #[error("expected exactly one player entity, found {count}")]
    MultiplePlayerEntities { count: usize },

    #[error("expected at most one camera rig, found {count}")]
    MultipleCameraRigs { count: usize },

    /// Недопустимое значение в authoring config (rate <= 0, cooldown <= 0, NaN...)
    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
}

pub type SimulationResult<T> = Result<T, SimulationError>;

impl SimulationError {
    pub(crate) fn missing<C>(entity: Entity) -> Self {
        Self::ComponentMissing {
            entity,
            component: short_type_name::<C>(),
        }
    }
}

/// `horde_simulation::components::combat::DamageQueue` → `DamageQueue`,
/// `a::Foo<b::Bar>` → `Foo`
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
