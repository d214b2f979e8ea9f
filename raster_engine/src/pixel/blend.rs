///
/// The alpha channel of a packed pixel
///
#[inline]
pub const fn alpha(c: u32) -> u32 {
    c >> 24
}

///
/// The inverse of the alpha channel of a packed pixel (`255 - alpha`)
///
#[inline]
pub const fn ialpha(c: u32) -> u32 {
    (!c) >> 24
}

///
/// Multiplies two 8-bit values, treating 255 as 1.0 (rounds to the nearest value)
///
#[inline]
pub const fn multiply(a: u32, b: u32) -> u32 {
    let t = a * b + 128;
    (t + (t >> 8)) >> 8
}

///
/// Scales every channel of a packed pixel by an 8-bit alpha value, treating 255 as 1.0
///
/// Each channel is computed as `round(c * a / 255)`, using the same rounding as `multiply()`
///
#[inline]
pub const fn alpha_blend(c: u32, a: u32) -> u32 {
    // Two channels are processed at once, each in a 16-bit slot
    let rb = (c & 0x00ff00ff) * a + 0x00800080;
    let rb = ((rb + ((rb >> 8) & 0x00ff00ff)) >> 8) & 0x00ff00ff;

    let ag = ((c >> 8) & 0x00ff00ff) * a + 0x00800080;
    let ag = (ag + ((ag >> 8) & 0x00ff00ff)) & 0xff00ff00;

    rb | ag
}

///
/// Mixes two packed pixels, with `a` as the weight of the source pixel
///
#[inline]
pub const fn interpolate(src: u32, dst: u32, a: u32) -> u32 {
    alpha_blend(src, a) + alpha_blend(dst, 255 - a)
}

///
/// The premultiplied 'source over' operation
///
#[inline]
pub const fn source_over(src: u32, dst: u32) -> u32 {
    src + alpha_blend(dst, ialpha(src))
}

///
/// Draws a source pixel over a destination pixel with an effective alpha (coverage multiplied by opacity)
///
#[inline]
pub const fn blend_pixel(src: u32, dst: u32, a: u32) -> u32 {
    if a == 255 {
        source_over(src, dst)
    } else {
        source_over(alpha_blend(src, a), dst)
    }
}
