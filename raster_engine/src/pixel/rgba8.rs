use super::blend::*;

///
/// A straight-alpha (non-premultiplied) colour, in `[r, g, b, a]` order
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    #[inline] pub const fn r(&self) -> u8 { self.0[0] }
    #[inline] pub const fn g(&self) -> u8 { self.0[1] }
    #[inline] pub const fn b(&self) -> u8 { self.0[2] }
    #[inline] pub const fn a(&self) -> u8 { self.0[3] }

    ///
    /// Returns this colour with its alpha multiplied by an opacity value
    ///
    #[inline]
    pub fn with_opacity(&self, opacity: u8) -> Rgba8 {
        let [r, g, b, a] = self.0;
        Rgba8([r, g, b, multiply(a as u32, opacity as u32) as u8])
    }

    ///
    /// Returns the premultiplied channels of this colour
    ///
    #[inline]
    pub fn premultiplied(&self) -> [u8; 4] {
        let [r, g, b, a] = self.0;

        if a == 255 {
            self.0
        } else {
            let a32 = a as u32;
            [multiply(r as u32, a32) as u8, multiply(g as u32, a32) as u8, multiply(b as u32, a32) as u8, a]
        }
    }
}
