use super::composite_entry::*;
use super::update_flags::*;
use crate::coverage::*;
use crate::geometry::*;
use crate::pixel::*;

use smallvec::*;

///
/// The render target that a task was submitted for
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetInfo {
    pub width:          usize,
    pub height:         usize,
    pub color_space:    ColorSpace,
}

impl TargetInfo {
    #[inline]
    pub fn bounds(&self) -> BBox {
        BBox::of_surface(self.width, self.height)
    }

    #[inline]
    pub fn layout(&self) -> Option<ChannelLayout> {
        self.color_space.layout()
    }
}

///
/// The settings that a task is prepared with, common to shapes and images
///
#[derive(Clone, Debug)]
pub struct TaskSettings {
    pub target:     TargetInfo,
    pub transform:  Option<Transform>,
    pub opacity:    u8,
    pub flags:      UpdateFlags,
    pub composites: SmallVec<[CompositeEntry; 2]>,

    /// Coverage of the clip path entries, resolved when the task was submitted
    pub clips:      SmallVec<[Coverage; 2]>,
}

impl TaskSettings {
    pub fn new(target: TargetInfo) -> TaskSettings {
        TaskSettings {
            target:     target,
            transform:  None,
            opacity:    255,
            flags:      UpdateFlags::NONE,
            composites: smallvec![],
            clips:      smallvec![],
        }
    }

    #[inline]
    pub fn has_composites(&self) -> bool {
        !self.composites.is_empty()
    }

    ///
    /// Intersects some coverage with every clip path
    ///
    pub fn clip(&self, coverage: Coverage) -> Coverage {
        self.clips.iter().fold(coverage, |coverage, clip| coverage.intersect(clip))
    }
}
