///
/// The colour spaces a render target can use
///
/// The 'straight' variants are rendered as premultiplied pixels, and converted back to straight alpha when
/// the frame is finished.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Packed as `a<<24 | b<<16 | g<<8 | r` (bytes are `r, g, b, a` on little-endian machines)
    Abgr8888,

    /// Packed as `a<<24 | r<<16 | g<<8 | b`
    Argb8888,

    Abgr8888Straight,
    Argb8888Straight,

    /// One byte per pixel
    Grayscale8,
}

///
/// The order of the colour channels within a packed 32-bit pixel
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Abgr,
    Argb,
}

impl ColorSpace {
    ///
    /// The number of bytes used by each pixel
    ///
    #[inline]
    pub fn channel_size(&self) -> usize {
        match self {
            ColorSpace::Grayscale8  => 1,
            _                       => 4,
        }
    }

    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self, ColorSpace::Abgr8888Straight | ColorSpace::Argb8888Straight)
    }

    #[inline]
    pub fn is_grayscale(&self) -> bool {
        matches!(self, ColorSpace::Grayscale8)
    }

    ///
    /// The channel layout of this colour space, or `None` for a grayscale colour space
    ///
    #[inline]
    pub fn layout(&self) -> Option<ChannelLayout> {
        match self {
            ColorSpace::Abgr8888 | ColorSpace::Abgr8888Straight => Some(ChannelLayout::Abgr),
            ColorSpace::Argb8888 | ColorSpace::Argb8888Straight => Some(ChannelLayout::Argb),
            ColorSpace::Grayscale8                              => None,
        }
    }
}

impl ChannelLayout {
    ///
    /// Packs four channel values into a pixel
    ///
    #[inline]
    pub const fn join(self, r: u8, g: u8, b: u8, a: u8) -> u32 {
        match self {
            ChannelLayout::Abgr => (a as u32) << 24 | (b as u32) << 16 | (g as u32) << 8 | (r as u32),
            ChannelLayout::Argb => (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | (b as u32),
        }
    }

    ///
    /// Unpacks a pixel into its `[r, g, b, a]` channels
    ///
    #[inline]
    pub const fn split(self, c: u32) -> [u8; 4] {
        let low     = (c & 0xff) as u8;
        let green   = ((c >> 8) & 0xff) as u8;
        let high    = ((c >> 16) & 0xff) as u8;
        let alpha   = (c >> 24) as u8;

        match self {
            ChannelLayout::Abgr => [low, green, high, alpha],
            ChannelLayout::Argb => [high, green, low, alpha],
        }
    }

    ///
    /// Converts a pixel between the two layouts (the conversion is the same in both directions)
    ///
    #[inline]
    pub const fn swap_red_blue(c: u32) -> u32 {
        (c & 0xff00ff00) | ((c >> 16) & 0xff) | ((c & 0xff) << 16)
    }
}
