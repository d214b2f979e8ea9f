mod shapes;

use shapes::*;

use flo_raster_engine::*;
use flo_raster_engine::compositor::*;
use flo_raster_engine::geometry::*;
use flo_raster_engine::pixel::*;
use flo_raster_engine::task::*;

#[test]
fn translucent_stroked_shape_is_composed_first() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut pixels  = buffer(40, 40);
    let engine      = RasterEngine::init_with_threads(2).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 40, 40, 40, ColorSpace::Abgr8888));
    assert!(renderer.pre_render());

    let shape   = RectShape::stroked(BBox::new(10, 10, 30, 30), Rgba8([255, 0, 0, 255]), 4.0, Rgba8([0, 0, 255, 255]));
    let handle  = renderer.prepare_shape(shape, None, None, 128, &[], UpdateFlags::ALL).unwrap();

    assert!(renderer.render_shape(handle));
    assert!(renderer.post_render());
    drop(renderer);

    // Where the stroke overlaps the fill, only the stroke is visible
    assert!(pixels[11*40 + 11] == 0x80800000, "{:x}", pixels[11*40 + 11]);
    assert!(pixels[11*40 + 11] != 0xc0800040);

    assert!(pixels[20*40 + 20] == 0x80000080, "{:x}", pixels[20*40 + 20]);
    assert!(pixels[9*40 + 9] == 0x80800000, "{:x}", pixels[9*40 + 9]);
    assert!(pixels[5*40 + 5] == 0);
}

#[test]
fn opaque_stroked_shape_draws_stroke_over_fill() {
    let mut pixels  = buffer(40, 40);
    let engine      = RasterEngine::init_with_threads(2).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 40, 40, 40, ColorSpace::Abgr8888));

    let shape   = RectShape::stroked(BBox::new(10, 10, 30, 30), Rgba8([255, 0, 0, 255]), 4.0, Rgba8([0, 0, 255, 255]));
    let handle  = renderer.prepare_shape(shape, None, None, 255, &[], UpdateFlags::ALL).unwrap();

    assert!(renderer.bounds(handle) == Some(BBox::new(8, 8, 32, 32)), "{:?}", renderer.bounds(handle));
    assert!(renderer.render_shape(handle));
    drop(renderer);

    assert!(pixels[11*40 + 11] == 0xffff0000);
    assert!(pixels[20*40 + 20] == 0xff0000ff);
}

#[test]
fn dispose_twice() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();

    assert!(renderer.task_count() == 1);
    assert!(renderer.dispose_task(handle));
    assert!(renderer.dispose_task(handle));
    assert!(renderer.task_phase(handle).is_none());
    assert!(renderer.task_count() == 0);
}

#[test]
fn stale_handle_is_not_rendered() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let old_handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.dispose_task(old_handle));

    let new_handle = renderer.prepare_shape(RectShape::filled(BBox::new(4, 4, 8, 8), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();

    assert!(old_handle != new_handle);
    assert!(!renderer.render_shape(old_handle));
    assert!(renderer.render_shape(new_handle));
    drop(renderer);

    assert!(pixels[0] == 0);
    assert!(pixels[7*8 + 7] == 0xffffffff);
}

#[test]
fn unchanged_shape_keeps_task() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let shape   = RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 255, 255, 255]));
    let first   = renderer.prepare_shape(shape.clone(), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let second  = renderer.prepare_shape(shape.clone(), Some(first), None, 255, &[], UpdateFlags::NONE).unwrap();
    let third   = renderer.prepare_shape(shape, Some(first), Some(Transform::translate(4.0, 4.0)), 255, &[], UpdateFlags::TRANSFORM).unwrap();

    assert!(first == second);
    assert!(first == third);
    assert!(renderer.task_count() == 1);
    assert!(renderer.bounds(first) == Some(BBox::new(4, 4, 8, 8)), "{:?}", renderer.bounds(first));
}

#[test]
fn shape_kind_mismatch_fails() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    assert!(!renderer.render_image(handle));
}

#[test]
fn invalid_targets_are_rejected() {
    let mut short       = buffer(4, 3);
    let mut narrow      = buffer(4, 4);
    let mut gray_pixels = buffer(4, 4);
    let engine          = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer    = engine.renderer();

    assert!(!renderer.bind_target(&mut short, 4, 4, 4, ColorSpace::Abgr8888));
    assert!(!renderer.bind_target(&mut narrow, 2, 4, 4, ColorSpace::Abgr8888));
    assert!(!renderer.bind_target(&mut gray_pixels, 4, 4, 4, ColorSpace::Grayscale8));
    assert!(renderer.target_color_space().is_none());

    // Nothing can be prepared without a target
    assert!(renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 255, 255, 255])), None, None, 255, &[], UpdateFlags::ALL).is_none());
    assert!(!renderer.pre_render());
}

#[test]
fn overflowing_stride_is_rejected() {
    let mut pixels      = buffer(16, 1);
    let mut gray_pixels = vec![0u8; 16];
    let engine          = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer    = engine.renderer();

    assert!(!renderer.bind_target(&mut pixels, usize::MAX / 2, 4, 4, ColorSpace::Abgr8888));
    assert!(!renderer.bind_gray_target(&mut gray_pixels, usize::MAX, 4, 4));
    assert!(renderer.target_color_space().is_none());
}

#[test]
fn shape_that_becomes_visible_is_drawn() {
    let mut pixels  = buffer(4, 4);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 4, 4, 4, ColorSpace::Abgr8888));

    let hidden  = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 0, 0, 0])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.bounds(hidden).is_none(), "{:?}", renderer.bounds(hidden));

    // Only the colour changes, but the shape now needs its coverage
    let visible = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 0, 0, 255])), Some(hidden), None, 255, &[], UpdateFlags::COLOR).unwrap();
    assert!(visible == hidden);
    assert!(renderer.bounds(visible) == Some(BBox::new(0, 0, 4, 4)), "{:?}", renderer.bounds(visible));

    assert!(renderer.render_shape(visible));
    drop(renderer);

    assert!(pixels.iter().all(|pixel| *pixel == 0xff0000ff), "{:x?}", pixels);
}

#[test]
fn grayscale_target_draws_alpha() {
    let mut pixels  = vec![0u8; 4*4];
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_gray_target(&mut pixels, 4, 4, 4));
    assert!(renderer.target_color_space() == Some(ColorSpace::Grayscale8));

    let handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 2, 4), Rgba8([10, 20, 30, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.render_shape(handle));
    drop(renderer);

    assert!(pixels[0] == 255);
    assert!(pixels[1] == 255);
    assert!(pixels[2] == 0);
}

#[test]
fn straight_target_is_unpremultiplied_after_render() {
    let mut pixels  = buffer(4, 4);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 4, 4, 4, ColorSpace::Abgr8888Straight));
    assert!(renderer.pre_render());

    let handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([255, 0, 0, 255])), None, None, 128, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.render_shape(handle));
    assert!(renderer.post_render());
    drop(renderer);

    assert!(pixels[0] == 0x800000ff, "{:x}", pixels[0]);
}

#[test]
fn clip_path_limits_drawing() {
    let mut pixels  = buffer(16, 16);
    let engine      = RasterEngine::init_with_threads(2).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 16, 16, 16, ColorSpace::Abgr8888));

    let clip_rect   = BBox::new(4, 4, 8, 12);
    let clip        = renderer.prepare_shape(RectShape::filled(clip_rect, Rgba8([0, 0, 0, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    let shape       = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 16, 16), Rgba8([255, 0, 0, 255])), None, None, 255, &[CompositeEntry::clip(clip)], UpdateFlags::ALL).unwrap();

    assert!(renderer.bounds(shape) == Some(clip_rect), "{:?}", renderer.bounds(shape));
    assert!(renderer.render_shape(shape));
    drop(renderer);

    for y in 0..16 {
        for x in 0..16 {
            let expected = if clip_rect.contains(x as i32, y as i32) { 0xff0000ff } else { 0 };
            assert!(pixels[y*16 + x] == expected, "({}, {}): {:x}", x, y, pixels[y*16 + x]);
        }
    }
}

#[test]
fn unknown_clip_source_fails() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let clip = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 4, 4), Rgba8([0, 0, 0, 255])), None, None, 255, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.dispose_task(clip));

    let shape = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 8, 8), Rgba8([255, 0, 0, 255])), None, None, 255, &[CompositeEntry::new(CompositeMethod::ClipPath, clip)], UpdateFlags::ALL);
    assert!(shape.is_none());
    assert!(renderer.task_count() == 0);
}

#[test]
fn zero_opacity_draws_nothing() {
    let mut pixels  = buffer(8, 8);
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 8, 8, 8, ColorSpace::Abgr8888));

    let handle = renderer.prepare_shape(RectShape::filled(BBox::new(0, 0, 8, 8), Rgba8([255, 0, 0, 255])), None, None, 0, &[], UpdateFlags::ALL).unwrap();
    assert!(renderer.render_shape(handle));
    drop(renderer);

    assert!(pixels.iter().all(|pixel| *pixel == 0));
}

#[test]
fn renderers_share_engine() {
    let engine = RasterEngine::init_with_threads(1).unwrap();

    let first   = engine.renderer();
    let second  = engine.renderer();
    assert!(engine.live_renderers() == 2);

    drop(first);
    drop(second);
    assert!(engine.live_renderers() == 0);
    assert!(engine.terminate());
}

#[test]
fn engine_with_live_renderer_does_not_terminate() {
    let engine      = RasterEngine::init_with_threads(1).unwrap();
    let renderer    = engine.renderer();

    assert!(!engine.terminate());
    drop(renderer);
}
