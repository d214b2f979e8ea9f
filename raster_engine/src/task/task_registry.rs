use super::raster_task::*;

use std::sync::*;

///
/// Refers to a task owned by a renderer
///
/// Handles are generational: a handle to a task that has been disposed won't match a newer task that
/// re-uses the same slot.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle {
    pub (crate) index:      usize,
    pub (crate) generation: u64,
}

///
/// A task stored in the registry
///
struct TaskSlot {
    generation: u64,
    task:       Option<Arc<RasterTask>>,
}

///
/// Stores the tasks created by a renderer
///
pub struct TaskRegistry {
    slots:      Vec<TaskSlot>,
    free_slots: Vec<usize>,
}

impl TaskRegistry {
    pub fn new() -> TaskRegistry {
        TaskRegistry {
            slots:      vec![],
            free_slots: vec![],
        }
    }

    ///
    /// Stores a task, returning the handle for it
    ///
    pub fn allocate(&mut self, task: Arc<RasterTask>) -> TaskHandle {
        if let Some(index) = self.free_slots.pop() {
            // Re-use a slot from a task that was disposed
            let slot        = &mut self.slots[index];
            slot.generation += 1;
            slot.task       = Some(task);

            TaskHandle { index, generation: slot.generation }
        } else {
            // Add a new slot
            self.slots.push(TaskSlot { generation: 0, task: Some(task) });

            TaskHandle { index: self.slots.len()-1, generation: 0 }
        }
    }

    ///
    /// Retrieves the task with a particular handle, if it's still live
    ///
    pub fn get(&self, handle: TaskHandle) -> Option<&Arc<RasterTask>> {
        self.slots.get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.task.as_ref())
    }

    ///
    /// Removes a task from the registry, returning it
    ///
    pub fn release(&mut self, handle: TaskHandle) -> Option<Arc<RasterTask>> {
        let slot = self.slots.get_mut(handle.index).filter(|slot| slot.generation == handle.generation)?;
        let task = slot.task.take()?;

        self.free_slots.push(handle.index);
        Some(task)
    }

    ///
    /// The number of live tasks
    ///
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Iterates over the live tasks
    ///
    pub fn tasks(&self) -> impl '_ + Iterator<Item=&Arc<RasterTask>> {
        self.slots.iter().filter_map(|slot| slot.task.as_ref())
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        TaskRegistry::new()
    }
}
