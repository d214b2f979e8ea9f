///
/// The ways a drawable can be combined with another drawable (the composite source)
///
/// The order here is significant: everything after `ClipPath` is a compositing method, everything before
/// `AddMask` (and after `ClipPath`) is a matte and everything from `AddMask` on is a mask.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompositeMethod {
    None,

    /// The source's coverage clips the drawable (coverage is intersected while the task is prepared)
    ClipPath,

    /// The drawable is scaled by the alpha channel of the source
    AlphaMask,

    /// The drawable is scaled by the inverse of the alpha channel of the source
    InvAlphaMask,

    /// The drawable is scaled by the luminance of the source
    LumaMask,

    /// The drawable is scaled by the inverse luminance of the source
    InvLumaMask,

    /// The drawable is added to the mask
    AddMask,

    /// The drawable is removed from the mask
    SubtractMask,

    /// The mask is kept only where the drawable is present
    IntersectMask,

    /// The mask is kept where exactly one of the mask and the drawable is present
    DifferenceMask,
}

impl CompositeMethod {
    ///
    /// True if this method uses a compositor image when drawing
    ///
    #[inline]
    pub fn is_compositing(&self) -> bool {
        *self > CompositeMethod::ClipPath
    }

    ///
    /// True if this method derives a mask value for each pixel of the compositor image
    ///
    #[inline]
    pub fn is_matting(&self) -> bool {
        self.is_compositing() && *self < CompositeMethod::AddMask
    }

    ///
    /// True if this method accumulates into the compositor image
    ///
    #[inline]
    pub fn is_masking(&self) -> bool {
        *self >= CompositeMethod::AddMask
    }

    ///
    /// The index of the mask value function for a matte method
    ///
    #[inline]
    pub fn matte_index(&self) -> Option<usize> {
        match self {
            CompositeMethod::AlphaMask      => Some(0),
            CompositeMethod::InvAlphaMask   => Some(1),
            CompositeMethod::LumaMask       => Some(2),
            CompositeMethod::InvLumaMask    => Some(3),
            _                               => None,
        }
    }
}
