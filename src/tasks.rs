//! Per-Frame Task Driver
//!
//! A registry of named callbacks run once per frame, in registration order.
//! Each task is either [`TaskMode::Continuous`] (runs every frame until
//! removed) or [`TaskMode::Once`] (runs on the next frame, then is removed).
//!
//! Callbacks get the frame's context explicitly as `&mut Ctx` rather than
//! capturing shared outer state, so a task that animates the stage is just:
//!
//! ```rust,ignore
//! tasks.add("dolly", TaskMode::Continuous, |stage: &mut Stage, time: &FrameTime| {
//!     stage.camera.position = Vec3::new(0.0, -time.elapsed, 0.1 * time.elapsed);
//! });
//! ```
//!
//! Everything here is single-threaded and driven by the host's frame loop.

use slotmap::{SlotMap, new_key_type};

use crate::utils::time::FrameTime;

new_key_type! {
    pub struct TaskHandle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskMode {
    Continuous,
    Once,
}

pub type TaskFn<Ctx> = Box<dyn FnMut(&mut Ctx, &FrameTime)>;

/// The registration capability of a frame loop, independent of any engine.
pub trait FrameScheduler<Ctx> {
    fn register(&mut self, name: &str, mode: TaskMode, callback: TaskFn<Ctx>) -> TaskHandle;

    /// Returns `false` if the handle was not registered.
    fn remove(&mut self, handle: TaskHandle) -> bool;
}

struct Task<Ctx> {
    name: String,
    mode: TaskMode,
    callback: TaskFn<Ctx>,
}

pub struct TaskManager<Ctx> {
    tasks: SlotMap<TaskHandle, Task<Ctx>>,
    order: Vec<TaskHandle>,
}

impl<Ctx> Default for TaskManager<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> TaskManager<Ctx> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Registers a closure as a task.
    pub fn add<F>(&mut self, name: &str, mode: TaskMode, callback: F) -> TaskHandle
    where
        F: FnMut(&mut Ctx, &FrameTime) + 'static,
    {
        self.register(name, mode, Box::new(callback))
    }

    #[must_use]
    pub fn contains(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn name(&self, handle: TaskHandle) -> Option<&str> {
        self.tasks.get(handle).map(|t| t.name.as_str())
    }

    #[must_use]
    pub fn mode(&self, handle: TaskHandle) -> Option<TaskMode> {
        self.tasks.get(handle).map(|t| t.mode)
    }

    /// Handle of the first task registered under `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<TaskHandle> {
        self.order
            .iter()
            .copied()
            .find(|&h| self.tasks.get(h).is_some_and(|t| t.name == name))
    }

    /// Task names in run order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter_map(|&h| self.tasks.get(h).map(|t| t.name.as_str()))
    }

    /// Runs every registered task once, then drops the one-shot tasks.
    pub fn run_frame(&mut self, ctx: &mut Ctx, time: &FrameTime) {
        let mut finished = Vec::new();

        for &handle in &self.order {
            let Some(task) = self.tasks.get_mut(handle) else {
                continue;
            };
            (task.callback)(ctx, time);
            if task.mode == TaskMode::Once {
                finished.push(handle);
            }
        }

        for handle in finished {
            self.remove(handle);
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
        self.order.clear();
    }
}

impl<Ctx> FrameScheduler<Ctx> for TaskManager<Ctx> {
    fn register(&mut self, name: &str, mode: TaskMode, callback: TaskFn<Ctx>) -> TaskHandle {
        let handle = self.tasks.insert(Task {
            name: name.to_owned(),
            mode,
            callback,
        });
        self.order.push(handle);
        log::debug!("Task registered: {name} ({mode:?})");
        handle
    }

    fn remove(&mut self, handle: TaskHandle) -> bool {
        let Some(task) = self.tasks.remove(handle) else {
            return false;
        };
        self.order.retain(|&h| h != handle);
        log::debug!("Task removed: {}", task.name);
        true
    }
}
