use super::task_registry::*;
use crate::compositor::*;

///
/// A drawable that's used as a clip, mask or matte by another drawable
///
/// The source task is owned by the renderer: this only refers to it
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompositeEntry {
    pub method: CompositeMethod,
    pub source: TaskHandle,
}

impl CompositeEntry {
    #[inline]
    pub fn new(method: CompositeMethod, source: TaskHandle) -> CompositeEntry {
        CompositeEntry { method, source }
    }

    ///
    /// A clip path entry
    ///
    #[inline]
    pub fn clip(source: TaskHandle) -> CompositeEntry {
        CompositeEntry { method: CompositeMethod::ClipPath, source }
    }
}
