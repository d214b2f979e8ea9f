use super::pixel_source::*;
use super::raster_target::*;
use crate::compositor::*;
use crate::coverage::*;
use crate::error::*;
use crate::geometry::*;
use crate::pixel::*;
use crate::surface::*;

use tracing::{debug};

///
/// Draws a set of spans from a pixel source onto a target, using the target's compositor if it has one
///
/// Spans are clipped to the target surface, and must be ordered by y then x.
///
pub (crate) fn compose_spans<TSource, TSpans>(target: &mut RasterTarget, spans: TSpans, source: &TSource, opacity: u8) -> Result<(), RasterError>
where
    TSource:    PixelSource,
    TSpans:     Iterator<Item=CoverageSpan>,
{
    let bounds  = target.surface.bounds();
    let spans   = spans.filter_map(move |span| span.clip_to(&bounds));

    match target.compositor.as_deref_mut() {
        Some(compositor) if compositor.method().is_matting() => {
            matte_spans(target.surface, compositor, spans, source, opacity)
        }

        Some(compositor) if compositor.method().is_masking() => {
            mask_spans(compositor, spans, source, opacity)?;
            compositor.blit_onto(target.surface)
        }

        _ => blend_spans(target.surface, spans, source, opacity),
    }
}

///
/// Blends spans directly onto a surface
///
fn blend_spans<TSource, TSpans>(surface: &mut Surface, spans: TSpans, source: &TSource, opacity: u8) -> Result<(), RasterError>
where
    TSource:    PixelSource,
    TSpans:     Iterator<Item=CoverageSpan>,
{
    let color_space = surface.color_space();
    let stride      = surface.stride();
    let pixels      = surface.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;
    let opaque      = source.is_opaque();
    let mut row     = vec![];

    for span in spans {
        let len     = span.len as usize;
        let start   = (span.y as usize) * stride + (span.x as usize);
        let dst     = &mut pixels[start..(start + len)];
        let a       = multiply(span.coverage as u32, opacity as u32);

        row.resize(len, 0);
        source.fetch(span.x, span.y, &mut row[..len]);

        if a == 255 && opaque {
            dst.copy_from_slice(&row[..len]);
        } else {
            for (dst_pixel, src_pixel) in dst.iter_mut().zip(row.iter()) {
                *dst_pixel = blend_pixel(*src_pixel, *dst_pixel, a);
            }
        }
    }

    Ok(())
}

///
/// Blends spans onto a surface, scaled by the mask value read from the compositor image
///
fn matte_spans<TSource, TSpans>(surface: &mut Surface, compositor: &Compositor, spans: TSpans, source: &TSource, opacity: u8) -> Result<(), RasterError>
where
    TSource:    PixelSource,
    TSpans:     Iterator<Item=CoverageSpan>,
{
    let method      = compositor.method();
    let mask_alpha  = compositor.image().blender().matte(method).ok_or(RasterError::InvalidCompositeMethod(method))?;
    let mask        = compositor.image().image_view().ok_or(RasterError::UnsupportedColorSpace(compositor.image().color_space()))?;
    let color_space = surface.color_space();
    let stride      = surface.stride();
    let pixels      = surface.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;
    let mut row     = vec![];

    for span in spans {
        if span.y as usize >= mask.height() { continue; }

        let len         = (span.len as usize).min(mask.width().saturating_sub(span.x as usize));
        let start       = (span.y as usize) * stride + (span.x as usize);
        let dst         = &mut pixels[start..(start + len)];
        let mask_row    = &mask.row(span.y as usize)[(span.x as usize)..(span.x as usize + len)];
        let a           = multiply(span.coverage as u32, opacity as u32);

        row.resize(len, 0);
        source.fetch(span.x, span.y, &mut row[..len]);

        for ((dst_pixel, src_pixel), mask_pixel) in dst.iter_mut().zip(row.iter()).zip(mask_row.iter()) {
            let src     = alpha_blend(*src_pixel, multiply(a, mask_alpha(*mask_pixel)));
            *dst_pixel  = source_over(src, *dst_pixel);
        }
    }

    Ok(())
}

///
/// Combines spans into the compositor image using one of the masking methods
///
fn mask_spans<TSource, TSpans>(compositor: &mut Compositor, spans: TSpans, source: &TSource, opacity: u8) -> Result<(), RasterError>
where
    TSource:    PixelSource,
    TSpans:     Iterator<Item=CoverageSpan>,
{
    let method  = compositor.method();
    let bbox    = compositor.bbox();
    let image   = compositor.image_mut();
    let bounds  = image.bounds();
    let spans   = spans.filter_map(move |span| span.clip_to(&bounds));

    let mask_op: fn(u32, u32) -> u32 = match method {
        CompositeMethod::AddMask        => |src, cmp| src + alpha_blend(cmp, ialpha(src)),
        CompositeMethod::SubtractMask   => |src, cmp| alpha_blend(cmp, ialpha(src)),
        CompositeMethod::DifferenceMask => |src, cmp| alpha_blend(src, ialpha(cmp)) + alpha_blend(cmp, ialpha(src)),
        CompositeMethod::IntersectMask  => { return intersect_spans(image, bbox, spans, source, opacity); }
        other                           => { return Err(RasterError::InvalidCompositeMethod(other)); }
    };

    let color_space = image.color_space();
    let stride      = image.stride();
    let pixels      = image.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;
    let mut row     = vec![];

    for span in spans {
        let len     = span.len as usize;
        let start   = (span.y as usize) * stride + (span.x as usize);
        let cmp     = &mut pixels[start..(start + len)];
        let a       = multiply(span.coverage as u32, opacity as u32);

        row.resize(len, 0);
        source.fetch(span.x, span.y, &mut row[..len]);

        for (cmp_pixel, src_pixel) in cmp.iter_mut().zip(row.iter()) {
            let src     = if a == 255 { *src_pixel } else { alpha_blend(*src_pixel, a) };
            *cmp_pixel  = mask_op(src, *cmp_pixel);
        }
    }

    Ok(())
}

///
/// Intersects spans with the compositor image: the whole of the compositor's region is swept, so pixels
/// that aren't covered by any span are cleared
///
fn intersect_spans<TSource, TSpans>(image: &mut Surface, bbox: BBox, spans: TSpans, source: &TSource, opacity: u8) -> Result<(), RasterError>
where
    TSource:    PixelSource,
    TSpans:     Iterator<Item=CoverageSpan>,
{
    let bbox        = bbox.clip_to(image.width(), image.height());
    let color_space = image.color_space();
    let stride      = image.stride();
    let pixels      = image.rgba_mut().ok_or(RasterError::UnsupportedColorSpace(color_space))?;
    let mut spans   = spans.filter_map(move |span| span.clip_to(&bbox)).peekable();
    let mut row     = vec![];

    debug!("Intersect mask over region {:?}", bbox);

    for y in bbox.min_y..bbox.max_y {
        let row_start   = (y as usize) * stride;
        let mut x       = bbox.min_x;

        while let Some(span) = spans.next_if(|span| span.y == y) {
            // Nothing is drawn between the last span and this one
            if span.x > x {
                pixels[(row_start + x as usize)..(row_start + span.x as usize)].fill(0);
            }

            let len     = span.len as usize;
            let start   = row_start + (span.x as usize);
            let a       = multiply(span.coverage as u32, opacity as u32);

            row.resize(len, 0);
            source.fetch(span.x, span.y, &mut row[..len]);

            for (cmp_pixel, src_pixel) in pixels[start..(start + len)].iter_mut().zip(row.iter()) {
                let src     = if a == 255 { *src_pixel } else { alpha_blend(*src_pixel, a) };
                *cmp_pixel  = alpha_blend(*cmp_pixel, alpha(src));
            }

            x = x.max(span.end_x());
        }

        if x < bbox.max_x {
            pixels[(row_start + x as usize)..(row_start + bbox.max_x as usize)].fill(0);
        }
    }

    Ok(())
}
