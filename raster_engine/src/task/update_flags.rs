use std::ops::{BitOr, BitOrAssign, BitAnd};

///
/// Describes which properties of a drawable have changed since it was last prepared
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct UpdateFlags(u32);

impl UpdateFlags {
    pub const NONE:         UpdateFlags = UpdateFlags(0);
    pub const PATH:         UpdateFlags = UpdateFlags(1 << 0);
    pub const TRANSFORM:    UpdateFlags = UpdateFlags(1 << 1);
    pub const COLOR:        UpdateFlags = UpdateFlags(1 << 2);
    pub const GRADIENT:     UpdateFlags = UpdateFlags(1 << 3);
    pub const STROKE:       UpdateFlags = UpdateFlags(1 << 4);
    pub const IMAGE:        UpdateFlags = UpdateFlags(1 << 5);
    pub const ALL:          UpdateFlags = UpdateFlags(0x3f);

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    ///
    /// True if any of the flags in `flags` are set
    ///
    #[inline]
    pub fn intersects(&self, flags: UpdateFlags) -> bool {
        (self.0 & flags.0) != 0
    }

    ///
    /// True if all of the flags in `flags` are set
    ///
    #[inline]
    pub fn contains(&self, flags: UpdateFlags) -> bool {
        (self.0 & flags.0) == flags.0
    }
}

impl BitOr for UpdateFlags {
    type Output = UpdateFlags;

    #[inline]
    fn bitor(self, other: UpdateFlags) -> UpdateFlags {
        UpdateFlags(self.0 | other.0)
    }
}

impl BitOrAssign for UpdateFlags {
    #[inline]
    fn bitor_assign(&mut self, other: UpdateFlags) {
        self.0 |= other.0;
    }
}

impl BitAnd for UpdateFlags {
    type Output = UpdateFlags;

    #[inline]
    fn bitand(self, other: UpdateFlags) -> UpdateFlags {
        UpdateFlags(self.0 & other.0)
    }
}
