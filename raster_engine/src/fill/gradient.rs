use crate::geometry::*;
use crate::pixel::*;

///
/// How a gradient is continued outside of its range
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spread {
    /// The end colours are extended
    Pad,

    /// The gradient is mirrored
    Reflect,

    /// The gradient restarts
    Repeat,
}

///
/// A colour at a position along a gradient (positions run from 0 to 1)
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color:  Rgba8,
}

///
/// A gradient that varies along a line
///
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub x1:         f32,
    pub y1:         f32,
    pub x2:         f32,
    pub y2:         f32,
    pub stops:      Vec<GradientStop>,
    pub spread:     Spread,

    /// Transform applied to the gradient before the drawable's own transform
    pub transform:  Option<Transform>,
}

///
/// A gradient that varies with the distance from a point
///
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub cx:         f32,
    pub cy:         f32,
    pub radius:     f32,
    pub stops:      Vec<GradientStop>,
    pub spread:     Spread,
    pub transform:  Option<Transform>,
}

///
/// How the fill or stroke of a shape is coloured
///
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba8),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl GradientStop {
    #[inline]
    pub fn new(offset: f32, color: Rgba8) -> GradientStop {
        GradientStop { offset, color }
    }
}

impl Paint {
    #[inline]
    pub fn is_gradient(&self) -> bool {
        !matches!(self, Paint::Solid(_))
    }

    ///
    /// The colour of a solid paint
    ///
    #[inline]
    pub fn solid_color(&self) -> Option<Rgba8> {
        match self {
            Paint::Solid(color) => Some(*color),
            _                   => None,
        }
    }

    ///
    /// True if drawing with this paint at a particular opacity can change any pixels
    ///
    #[inline]
    pub fn is_visible(&self, opacity: u8) -> bool {
        match self {
            Paint::Solid(color) => multiply(color.a() as u32, opacity as u32) > 0,
            _                   => opacity > 0,
        }
    }
}
