use super::blend::*;
use super::color_space::*;
use crate::compositor::*;

///
/// Function that extracts the mask value from a pixel of a compositor image
///
pub type MaskAlphaFn = fn(u32) -> u32;

///
/// Function that packs `r, g, b, a` channels into a pixel
///
pub type JoinFn = fn(u8, u8, u8, u8) -> u32;

///
/// The blending strategies for a render target
///
/// This is resolved once when a surface is bound (from its colour space), so the rasterizer never needs to
/// branch on the channel layout while processing pixels.
///
#[derive(Clone, Copy)]
pub struct Blender {
    /// Packs a colour into a pixel for the target
    pub join: JoinFn,

    /// Mask value functions for the matte composite methods (alpha, inverse alpha, luma, inverse luma)
    pub mask_alpha: [MaskAlphaFn; 4],

    /// The channel layout used by the target (`None` for grayscale targets)
    pub layout: Option<ChannelLayout>,
}

impl std::fmt::Debug for Blender {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.debug_struct("Blender").field("layout", &self.layout).finish()
    }
}

#[inline] fn join_abgr(r: u8, g: u8, b: u8, a: u8) -> u32    { ChannelLayout::Abgr.join(r, g, b, a) }
#[inline] fn join_argb(r: u8, g: u8, b: u8, a: u8) -> u32    { ChannelLayout::Argb.join(r, g, b, a) }
#[inline] fn join_gray(_r: u8, _g: u8, _b: u8, a: u8) -> u32 { a as u32 }

#[inline] fn mask_alpha(c: u32) -> u32      { alpha(c) }
#[inline] fn mask_inv_alpha(c: u32) -> u32  { ialpha(c) }

#[inline]
fn abgr_luma(c: u32) -> u32 {
    ((c & 0xff) * 54 + ((c >> 8) & 0xff) * 183 + ((c >> 16) & 0xff) * 19) >> 8
}

#[inline]
fn argb_luma(c: u32) -> u32 {
    (((c >> 16) & 0xff) * 54 + ((c >> 8) & 0xff) * 183 + (c & 0xff) * 19) >> 8
}

#[inline] fn abgr_inv_luma(c: u32) -> u32   { 255 - abgr_luma(c) }
#[inline] fn argb_inv_luma(c: u32) -> u32   { 255 - argb_luma(c) }

#[inline] fn gray_value(c: u32) -> u32      { c & 0xff }
#[inline] fn gray_inv_value(c: u32) -> u32  { 255 - (c & 0xff) }

impl Blender {
    ///
    /// Resolves the blending strategies for a colour space
    ///
    pub fn for_color_space(color_space: ColorSpace) -> Blender {
        match color_space.layout() {
            Some(ChannelLayout::Abgr) => Blender {
                join:       join_abgr,
                mask_alpha: [mask_alpha, mask_inv_alpha, abgr_luma, abgr_inv_luma],
                layout:     Some(ChannelLayout::Abgr),
            },

            Some(ChannelLayout::Argb) => Blender {
                join:       join_argb,
                mask_alpha: [mask_alpha, mask_inv_alpha, argb_luma, argb_inv_luma],
                layout:     Some(ChannelLayout::Argb),
            },

            None => Blender {
                join:       join_gray,
                mask_alpha: [gray_value, gray_inv_value, gray_value, gray_inv_value],
                layout:     None,
            },
        }
    }

    ///
    /// The function that reads the mask value for a matte composite method
    ///
    #[inline]
    pub fn matte(&self, method: CompositeMethod) -> Option<MaskAlphaFn> {
        method.matte_index().map(|idx| self.mask_alpha[idx])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn luma_of_white_and_black() {
        let abgr = Blender::for_color_space(ColorSpace::Abgr8888);
        let argb = Blender::for_color_space(ColorSpace::Argb8888);

        assert!((abgr.mask_alpha[2])(0xffffffff) == 255);
        assert!((argb.mask_alpha[2])(0xffffffff) == 255);
        assert!((abgr.mask_alpha[2])(0xff000000) == 0);
    }

    #[test]
    fn luma_reads_layout_channels() {
        let abgr    = Blender::for_color_space(ColorSpace::Abgr8888);
        let argb    = Blender::for_color_space(ColorSpace::Argb8888);
        let red     = (abgr.join)(255, 0, 0, 255);

        assert!((abgr.mask_alpha[2])(red) == (255 * 54) >> 8);
        assert!((argb.mask_alpha[2])((argb.join)(255, 0, 0, 255)) == (255 * 54) >> 8);
        assert!((argb.mask_alpha[2])(red) == (255 * 19) >> 8);
    }
}
