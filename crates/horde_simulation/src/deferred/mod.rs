//! Deferred Command Buffer: структурные изменения мира только в одной точке тика
//!
//! Проходы (системы) НЕ удаляют entity и компоненты напрямую: они записывают
//! intent в свой локальный буфер (`Deferred<CommandBuffer>`). На sync point Bevy
//! локальные буферы сливаются в общий `CommandBuffer` resource (в порядке
//! выполнения систем), а `flush_command_buffer` (последняя система тика)
//! применяет всё разом, в порядке записи, и очищает буфер.
//!
//! Итерация никогда не видит собственных структурных побочных эффектов.
//! Без flush intents лежат бесконечно: точку flush выбирает вызывающий.

use std::any::TypeId;

use bevy::ecs::system::{Deferred, SystemBuffer, SystemMeta};
use bevy::prelude::*;

use crate::error::short_type_name;

/// Тип компонента, который можно удалить через буфер
#[derive(Clone, Copy)]
pub struct ComponentKind {
    type_id: TypeId,
    name: &'static str,
    remove: fn(&mut EntityWorldMut<'_>) -> bool,
}

impl ComponentKind {
    pub fn of<C: Component>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: short_type_name::<C>(),
            remove: remove_component::<C>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ComponentKind").field(&self.name).finish()
    }
}

// Имя только для Debug/логов: одноимённые компоненты из разных модулей различаются
impl PartialEq for ComponentKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

fn remove_component<C: Component>(entity: &mut EntityWorldMut<'_>) -> bool {
    entity.take::<C>().is_some()
}

/// Записанное структурное изменение
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralIntent {
    Destroy(Entity),
    RemoveComponent { entity: Entity, kind: ComponentKind },
}

/// Итог одного flush
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushReport {
    pub destroyed: usize,
    pub removed: usize,
    /// Intents по уже несуществующим entity / отсутствующим компонентам
    pub skipped: usize,
}

impl FlushReport {
    pub fn is_empty(&self) -> bool {
        self.destroyed == 0 && self.removed == 0 && self.skipped == 0
    }
}

/// Буфер структурных intents
///
/// Используется в двух ролях:
/// - `Resource`: общий буфер тика, применяется в `flush_command_buffer`
/// - `Deferred<CommandBuffer>`: локальный буфер системы (без конфликтов доступа,
///   системы могут идти параллельно); на sync point сливается в общий
#[derive(Resource, Debug, Default)]
pub struct CommandBuffer {
    intents: Vec<StructuralIntent>,
}

impl CommandBuffer {
    pub fn record_destroy(&mut self, entity: Entity) {
        self.intents.push(StructuralIntent::Destroy(entity));
    }

    pub fn record_remove(&mut self, entity: Entity, kind: ComponentKind) {
        self.intents.push(StructuralIntent::RemoveComponent { entity, kind });
    }

    pub fn record_remove_component<C: Component>(&mut self, entity: Entity) {
        self.record_remove(entity, ComponentKind::of::<C>());
    }

    /// Слить другой буфер (порядок сохраняется: сначала наши, потом его)
    pub fn append(&mut self, other: &mut CommandBuffer) {
        self.intents.append(&mut other.intents);
    }

    pub fn intents(&self) -> &[StructuralIntent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Применить все intents в порядке записи и очистить буфер
    ///
    /// Повторный destroy той же entity: no-op (skipped), т.е. destroy
    /// срабатывает ровно один раз. Flush пустого буфера: no-op.
    pub fn flush(&mut self, world: &mut World) -> FlushReport {
        let mut report = FlushReport::default();

        for intent in self.intents.drain(..) {
            match intent {
                StructuralIntent::Destroy(entity) => match world.get_entity_mut(entity) {
                    Ok(entity_mut) => {
                        entity_mut.despawn();
                        report.destroyed += 1;
                    }
                    Err(_) => report.skipped += 1,
                },
                StructuralIntent::RemoveComponent { entity, kind } => {
                    let removed = match world.get_entity_mut(entity) {
                        Ok(mut entity_mut) => (kind.remove)(&mut entity_mut),
                        Err(_) => false,
                    };
                    if removed {
                        report.removed += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
            }
        }

        report
    }
}

impl SystemBuffer for CommandBuffer {
    fn apply(&mut self, _system_meta: &SystemMeta, world: &mut World) {
        if self.intents.is_empty() {
            return;
        }
        world
            .get_resource_or_insert_with(CommandBuffer::default)
            .append(self);
    }
}

/// System: единственная точка структурной мутации за тик (exclusive)
pub fn flush_command_buffer(world: &mut World) {
    let Some(report) =
        world.try_resource_scope(|world, mut buffer: Mut<CommandBuffer>| buffer.flush(world))
    else {
        return;
    };

    if !report.is_empty() {
        crate::logger::log(&format!(
            "🧹 Flush: destroyed={} removed={} skipped={}",
            report.destroyed, report.removed, report.skipped
        ));
    }
}

/// System: entity с `DestroyFlag::Pending` → destroy intent
pub fn queue_flagged_destroys(
    flags: Query<(Entity, &crate::components::DestroyFlag)>,
    mut buffer: Deferred<CommandBuffer>,
) {
    for (entity, flag) in flags.iter() {
        if flag.is_pending() {
            buffer.record_destroy(entity);
        }
    }
}
