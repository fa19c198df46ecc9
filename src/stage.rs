//! Stage
//!
//! The minimal scene the per-frame tasks act on: named actors with a
//! position/heading transform, an optional patrol animation each, and a
//! camera. Rendering is left to the host; the stage only holds the state a
//! renderer would read.

use glam::{Quat, Vec3};
use slotmap::{SlotMap, new_key_type};

use crate::animation::Patrol;

new_key_type! {
    pub struct ActorHandle;
}

/// Position plus facing in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Degrees about +Z. 0° faces the model's forward axis (+Y).
    pub heading: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            heading: 0.0,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            heading: 0.0,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.heading.to_radians())
    }

    /// Direction the model faces.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }
}

#[derive(Debug)]
pub struct Actor {
    pub name: String,
    pub transform: Transform,
    patrol: Option<Patrol>,
}

impl Actor {
    #[must_use]
    pub fn patrol(&self) -> Option<&Patrol> {
        self.patrol.as_ref()
    }

    pub fn patrol_mut(&mut self) -> Option<&mut Patrol> {
        self.patrol.as_mut()
    }
}

#[derive(Debug, Default)]
pub struct Stage {
    actors: SlotMap<ActorHandle, Actor>,
    pub camera: Transform,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&mut self, name: impl Into<String>, position: Vec3) -> ActorHandle {
        self.actors.insert(Actor {
            name: name.into(),
            transform: Transform::from_position(position),
            patrol: None,
        })
    }

    /// Removes an actor. Its patrol, if any, is released with it.
    pub fn remove_actor(&mut self, handle: ActorHandle) -> Option<Actor> {
        let actor = self.actors.remove(handle);
        if let Some(actor) = &actor {
            log::debug!("Actor removed: {}", actor.name);
        }
        actor
    }

    /// Gives an actor a patrol, releasing any patrol it already had.
    ///
    /// Returns `false` (and drops `patrol`) if the handle is stale.
    pub fn attach_patrol(&mut self, handle: ActorHandle, patrol: Patrol) -> bool {
        let Some(actor) = self.actors.get_mut(handle) else {
            log::warn!("Attempted to attach a patrol to a missing actor.");
            return false;
        };
        let pose = patrol.pose();
        actor.transform.position = pose.position;
        actor.transform.heading = pose.heading;
        actor.patrol = Some(patrol);
        true
    }

    pub fn detach_patrol(&mut self, handle: ActorHandle) -> Option<Patrol> {
        self.actors.get_mut(handle).and_then(|a| a.patrol.take())
    }

    #[must_use]
    pub fn actor(&self, handle: ActorHandle) -> Option<&Actor> {
        self.actors.get(handle)
    }

    pub fn actor_mut(&mut self, handle: ActorHandle) -> Option<&mut Actor> {
        self.actors.get_mut(handle)
    }

    #[must_use]
    pub fn find_actor(&self, name: &str) -> Option<ActorHandle> {
        self.actors
            .iter()
            .find(|(_, a)| a.name == name)
            .map(|(h, _)| h)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn actors(&self) -> impl Iterator<Item = (ActorHandle, &Actor)> {
        self.actors.iter()
    }

    /// Advances every patrol by `dt` and writes its pose into the actor.
    pub fn update_patrols(&mut self, dt: f32) {
        for (_handle, actor) in &mut self.actors {
            if let Some(patrol) = &mut actor.patrol {
                patrol.update(dt);
                let pose = patrol.pose();
                actor.transform.position = pose.position;
                actor.transform.heading = pose.heading;
            }
        }
    }
}
