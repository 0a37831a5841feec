//! bevy_rapier2d мост: velocity наружу, контакты внутрь
//!
//! Rapier сообщает о контакте только на переходах (Started/Stopped).
//! Combat нужен контакт в КАЖДОМ тике касания (враг, прижатый к игроку,
//! бьёт снова как только истёк cooldown), поэтому пары хранятся в
//! `ActiveContacts` и переизлучаются каждый тик.

use std::collections::BTreeSet;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::combat::ContactEvent;
use crate::components::VelocityCommand;

/// Пары тел, касающихся в данный момент (упорядочены: детерминированный обход)
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveContacts {
    pairs: BTreeSet<(Entity, Entity)>,
}

impl ActiveContacts {
    fn key(a: Entity, b: Entity) -> (Entity, Entity) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    pub fn begin(&mut self, a: Entity, b: Entity) -> bool {
        self.pairs.insert(Self::key(a, b))
    }

    pub fn end(&mut self, a: Entity, b: Entity) -> bool {
        self.pairs.remove(&Self::key(a, b))
    }

    pub fn contains(&self, a: Entity, b: Entity) -> bool {
        self.pairs.contains(&Self::key(a, b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Entity, Entity)> + '_ {
        self.pairs.iter().copied()
    }
}

/// System: VelocityCommand → Rapier Velocity (angvel не трогаем)
pub fn sync_velocity_commands(mut bodies: Query<(&VelocityCommand, &mut Velocity)>) {
    for (command, mut velocity) in bodies.iter_mut() {
        if velocity.linvel != command.0 {
            velocity.linvel = command.0;
        }
    }
}

/// System: Rapier CollisionEvent → ActiveContacts
pub fn track_collision_events(
    mut collisions: EventReader<CollisionEvent>,
    mut contacts: ResMut<ActiveContacts>,
) {
    for event in collisions.read() {
        match *event {
            CollisionEvent::Started(a, b, _) => {
                contacts.begin(a, b);
            }
            CollisionEvent::Stopped(a, b, _) => {
                contacts.end(a, b);
            }
        }
    }
}

/// System: ContactEvent на каждую активную пару
pub fn emit_active_contacts(contacts: Res<ActiveContacts>, mut events: EventWriter<ContactEvent>) {
    for (a, b) in contacts.iter() {
        events.write(ContactEvent { a, b });
    }
}
