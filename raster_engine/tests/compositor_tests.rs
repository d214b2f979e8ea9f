mod shapes;

use shapes::*;

use flo_raster_engine::*;
use flo_raster_engine::compositor::*;
use flo_raster_engine::geometry::*;
use flo_raster_engine::pixel::*;
use flo_raster_engine::task::*;

const RED:  u32 = 0xff0000ff;

///
/// Draws a shape into a composite layer, uses the layer with a composite method, then draws a second shape through it
///
/// Returns the pixels of the 100x100 target
///
fn masked(method: CompositeMethod, layer_shape: std::sync::Arc<RectShape>, drawn_shape: std::sync::Arc<RectShape>) -> Vec<u32> {
    let mut pixels  = buffer(100, 100);
    let engine      = RasterEngine::init_with_threads(2).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 100, 100, 100, ColorSpace::Abgr8888));
    assert!(renderer.pre_render());

    let layer_handle    = renderer.prepare_shape(layer_shape, None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let drawn_handle    = renderer.prepare_shape(drawn_shape, None, None, 255, &[], UpdateFlags::ALL).unwrap();

    let layer = renderer.begin_composite(BBox::new(0, 0, 100, 100)).unwrap();
    assert!(renderer.render_shape(layer_handle));
    assert!(renderer.begin_masking(layer, method));

    assert!(renderer.render_shape(drawn_handle));
    assert!(renderer.end_masking());
    assert!(renderer.post_render());

    drop(renderer);
    pixels
}

fn inside(x: usize, y: usize, rect: BBox) -> bool {
    rect.contains(x as i32, y as i32)
}

#[test]
fn intersect_mask_keeps_overlap() {
    let inner   = BBox::new(25, 25, 75, 75);
    let pixels  = masked(CompositeMethod::IntersectMask,
        RectShape::filled(BBox::new(0, 0, 100, 100), Rgba8([255, 0, 0, 255])),
        RectShape::filled(inner, Rgba8([0, 0, 255, 255])));

    for y in 0..100 {
        for x in 0..100 {
            let expected = if inside(x, y, inner) { RED } else { 0 };
            assert!(pixels[y*100 + x] == expected, "({}, {}): {:x}", x, y, pixels[y*100 + x]);
        }
    }
}

#[test]
fn subtract_mask_removes_drawing() {
    let inner   = BBox::new(25, 25, 75, 75);
    let pixels  = masked(CompositeMethod::SubtractMask,
        RectShape::filled(BBox::new(0, 0, 100, 100), Rgba8([255, 0, 0, 255])),
        RectShape::filled(inner, Rgba8([0, 0, 255, 255])));

    for y in 0..100 {
        for x in 0..100 {
            let expected = if inside(x, y, inner) { 0 } else { RED };
            assert!(pixels[y*100 + x] == expected, "({}, {}): {:x}", x, y, pixels[y*100 + x]);
        }
    }
}

#[test]
fn add_mask_combines_drawings() {
    let left    = BBox::new(0, 0, 50, 100);
    let right   = BBox::new(50, 0, 100, 100);
    let pixels  = masked(CompositeMethod::AddMask,
        RectShape::filled(left, Rgba8([255, 0, 0, 255])),
        RectShape::filled(right, Rgba8([0, 0, 255, 255])));

    assert!(pixels[10*100 + 10] == RED);
    assert!(pixels[10*100 + 90] == 0xffff0000, "{:x}", pixels[10*100 + 90]);
}

#[test]
fn difference_mask_clears_overlap() {
    let pixels  = masked(CompositeMethod::DifferenceMask,
        RectShape::filled(BBox::new(0, 0, 60, 100), Rgba8([255, 0, 0, 255])),
        RectShape::filled(BBox::new(40, 0, 100, 100), Rgba8([0, 0, 255, 255])));

    assert!(pixels[10*100 + 10] == RED);
    assert!(pixels[10*100 + 50] == 0, "{:x}", pixels[10*100 + 50]);
    assert!(pixels[10*100 + 90] == 0xffff0000, "{:x}", pixels[10*100 + 90]);
}

#[test]
fn alpha_mask_scales_by_mask_alpha() {
    let inner   = BBox::new(25, 25, 75, 75);
    let pixels  = masked(CompositeMethod::AlphaMask,
        RectShape::filled(inner, Rgba8([255, 255, 255, 128])),
        RectShape::filled(BBox::new(0, 0, 100, 100), Rgba8([255, 0, 0, 255])));

    assert!(pixels[50*100 + 50] == 0x80000080, "{:x}", pixels[50*100 + 50]);
    assert!(pixels[5*100 + 5] == 0, "{:x}", pixels[5*100 + 5]);
}

#[test]
fn inverse_alpha_mask_scales_by_inverse_alpha() {
    let inner   = BBox::new(25, 25, 75, 75);
    let pixels  = masked(CompositeMethod::InvAlphaMask,
        RectShape::filled(inner, Rgba8([255, 255, 255, 128])),
        RectShape::filled(BBox::new(0, 0, 100, 100), Rgba8([255, 0, 0, 255])));

    assert!(pixels[50*100 + 50] == 0x7f00007f, "{:x}", pixels[50*100 + 50]);
    assert!(pixels[5*100 + 5] == RED, "{:x}", pixels[5*100 + 5]);
}

#[test]
fn luma_mask_uses_brightness() {
    let pixels  = masked(CompositeMethod::LumaMask,
        RectShape::filled(BBox::new(0, 0, 50, 100), Rgba8([255, 255, 255, 255])),
        RectShape::filled(BBox::new(0, 0, 100, 100), Rgba8([255, 0, 0, 255])));

    assert!(pixels[10*100 + 10] == RED, "{:x}", pixels[10*100 + 10]);
    assert!(pixels[10*100 + 90] == 0, "{:x}", pixels[10*100 + 90]);
}

#[test]
fn composite_layer_blends_at_opacity() {
    let mut pixels  = buffer(10, 10);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 10, 10, 10, ColorSpace::Abgr8888));

    let handle  = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 10, 10), Rgba8([255, 0, 0, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let layer   = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();

    assert!(renderer.render_shape(handle));
    assert!(renderer.end_composite(layer, 128));
    drop(renderer);

    assert!(pixels.iter().all(|pixel| *pixel == 0x80000080), "{:x?}", pixels);
}

#[test]
fn composite_layers_must_end_in_order() {
    let mut pixels  = buffer(10, 10);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 10, 10, 10, ColorSpace::Abgr8888));

    let outer = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();
    let inner = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();

    assert!(outer != inner);
    assert!(!renderer.end_composite(outer, 255));
    assert!(renderer.end_composite(inner, 255));
    assert!(renderer.end_composite(outer, 255));
    assert!(!renderer.end_masking());
}

#[test]
fn clip_path_method_cannot_mask() {
    let mut pixels  = buffer(10, 10);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 10, 10, 10, ColorSpace::Abgr8888));

    let layer = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();
    assert!(!renderer.begin_masking(layer, CompositeMethod::ClipPath));
    assert!(renderer.end_composite(layer, 255));
}

#[test]
fn grayscale_layer_is_matted() {
    let mut pixels  = vec![0u8; 10*10];
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_gray_target(&mut pixels, 10, 10, 10));

    let matte   = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 5, 10), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let drawn   = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 10, 10), Rgba8([255, 0, 0, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();

    let layer = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();
    assert!(renderer.render_shape(matte));
    assert!(renderer.begin_masking(layer, CompositeMethod::AlphaMask));

    let group = renderer.begin_composite(BBox::new(0, 0, 10, 10)).unwrap();
    assert!(renderer.render_shape(drawn));
    assert!(renderer.end_composite(group, 255));
    assert!(renderer.end_masking());
    drop(renderer);

    assert!(pixels[2*10 + 2] == 255, "{}", pixels[2*10 + 2]);
    assert!(pixels[7*10 + 7] == 0, "{}", pixels[7*10 + 7]);
}

#[test]
fn grayscale_composed_shape_is_matted() {
    let mut pixels  = vec![0u8; 40*40];
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_gray_target(&mut pixels, 40, 40, 40));

    let matte   = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 20, 40), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let shape   = RectShape::stroked(BBox::new(10, 10, 30, 30), Rgba8([255, 0, 0, 255]), 4.0, Rgba8([0, 0, 255, 255]));
    let drawn   = renderer.prepare_shape(shape, None, None, 128, &[], UpdateFlags::ALL).unwrap();

    let layer = renderer.begin_composite(BBox::new(0, 0, 40, 40)).unwrap();
    assert!(renderer.render_shape(matte));
    assert!(renderer.begin_masking(layer, CompositeMethod::AlphaMask));

    assert!(renderer.render_shape(drawn));
    assert!(renderer.end_masking());
    drop(renderer);

    assert!(pixels[15*40 + 15] == 128, "{}", pixels[15*40 + 15]);
    assert!(pixels[25*40 + 25] == 0, "{}", pixels[25*40 + 25]);
}
