use crate::compositor::*;
use crate::error::*;
use crate::pixel::*;
use crate::surface::*;

///
/// The surface that a rasterizer draws to, along with the compositor attached to it (if there is one)
///
pub struct RasterTarget<'t, 'a> {
    pub surface:    &'t mut Surface<'a>,
    pub compositor: Option<&'t mut Compositor>,
}

impl<'t, 'a> RasterTarget<'t, 'a> {
    ///
    /// A target that draws directly to a surface
    ///
    #[inline]
    pub fn new(surface: &'t mut Surface<'a>) -> RasterTarget<'t, 'a> {
        RasterTarget { surface, compositor: None }
    }

    ///
    /// A target that draws to a surface through a compositor
    ///
    #[inline]
    pub fn with_compositor(surface: &'t mut Surface<'a>, compositor: Option<&'t mut Compositor>) -> RasterTarget<'t, 'a> {
        RasterTarget { surface, compositor }
    }

    ///
    /// The composite method that will be used when drawing to this target
    ///
    #[inline]
    pub fn method(&self) -> CompositeMethod {
        self.compositor.as_ref().map(|compositor| compositor.method()).unwrap_or(CompositeMethod::None)
    }
}

///
/// The compositor image and mask value function used to matte a grayscale surface
///
pub (crate) type GrayMatte<'c> = (&'c [u8], usize, MaskAlphaFn);

///
/// Finds the matte to apply when drawing to a grayscale surface
///
/// Grayscale surfaces can be matted, but can't accumulate masks
///
pub (crate) fn gray_matte(compositor: Option<&Compositor>) -> Result<Option<GrayMatte<'_>>, RasterError> {
    match compositor {
        None                                                    => Ok(None),
        Some(compositor) if compositor.method().is_matting()    => {
            let image       = compositor.image();
            let mask_alpha  = image.blender().matte(compositor.method()).ok_or(RasterError::InvalidCompositeMethod(compositor.method()))?;
            let mask        = image.gray().ok_or(RasterError::UnsupportedColorSpace(image.color_space()))?;

            Ok(Some((mask, image.stride(), mask_alpha)))
        }
        Some(_)                                                 => Err(RasterError::UnsupportedColorSpace(ColorSpace::Grayscale8)),
    }
}
