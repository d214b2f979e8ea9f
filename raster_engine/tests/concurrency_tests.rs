mod shapes;

use shapes::*;

use flo_raster_engine::*;
use flo_raster_engine::geometry::*;
use flo_raster_engine::pixel::*;
use flo_raster_engine::task::*;

use rand::prelude::*;
use rand::rngs::StdRng;

use std::sync::*;

///
/// Generates a set of random shapes, some with strokes
///
fn random_shapes(count: usize, seed: u64) -> Vec<(Arc<RectShape>, u8)> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count).map(|_| {
        let x       = rng.gen_range(0..96);
        let y       = rng.gen_range(0..96);
        let w       = rng.gen_range(4..32);
        let h       = rng.gen_range(4..32);
        let rect    = BBox::new(x, y, x + w, y + h);
        let fill    = Rgba8([rng.gen(), rng.gen(), rng.gen(), rng.gen()]);
        let opacity = rng.gen_range(64..=255);

        let shape = if rng.gen_bool(0.5) {
            RectShape::stroked(rect, fill, 2.0, Rgba8([rng.gen(), rng.gen(), rng.gen(), 255]))
        } else {
            RectShape::filled(rect, fill)
        };

        (shape, opacity)
    }).collect()
}

///
/// Renders a set of shapes using an engine with a particular number of worker threads
///
fn render(threads: usize, shapes: &[(Arc<RectShape>, u8)]) -> Vec<u32> {
    let mut pixels  = buffer(128, 128);
    let engine      = RasterEngine::init_with_threads(threads).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 128, 128, 128, ColorSpace::Abgr8888));
    assert!(renderer.pre_render());

    // Prepare everything first so the workers run while the other shapes are being queued
    let handles = shapes.iter()
        .map(|(shape, opacity)| renderer.prepare_shape(shape.clone(), None, None, *opacity, &[], UpdateFlags::ALL).unwrap())
        .collect::<Vec<_>>();

    for handle in handles {
        assert!(renderer.render_shape(handle));
    }

    assert!(renderer.post_render());
    drop(renderer);

    pixels
}

#[test]
fn threaded_render_matches_inline_render() {
    let shapes      = random_shapes(64, 1234);
    let inline      = render(0, &shapes);
    let threaded    = render(4, &shapes);

    assert!(inline.iter().any(|pixel| *pixel != 0));
    assert!(inline == threaded);
}

#[test]
fn sync_and_done_can_be_repeated() {
    let shapes      = random_shapes(16, 99);
    let mut pixels  = buffer(128, 128);
    let engine      = RasterEngine::init_with_threads(3).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 128, 128, 128, ColorSpace::Abgr8888));

    let handles = shapes.iter()
        .map(|(shape, opacity)| renderer.prepare_shape(shape.clone(), None, None, *opacity, &[], UpdateFlags::ALL).unwrap())
        .collect::<Vec<_>>();

    assert!(renderer.sync());
    assert!(renderer.sync());

    for handle in handles.iter() {
        assert!(renderer.task_phase(*handle) == Some(TaskPhase::Done));
    }

    assert!(renderer.clear());
    assert!(renderer.clear());
    assert!(renderer.task_count() == 16);

    for handle in handles {
        assert!(renderer.dispose_task(handle));
    }

    assert!(renderer.task_count() == 0);
}

#[test]
fn tasks_can_be_prepared_again() {
    let mut pixels  = buffer(32, 32);
    let engine      = RasterEngine::init_with_threads(2).unwrap();
    let mut renderer = engine.renderer();

    assert!(renderer.bind_target(&mut pixels, 32, 32, 32, ColorSpace::Abgr8888));

    let shape       = RectShape::filled(BBox::new(0, 0, 8, 8), Rgba8([255, 0, 0, 255]));
    let mut handle  = None;

    for offset in 0..8 {
        let transform = Transform::translate(offset as f32 * 2.0, 0.0);
        handle = renderer.prepare_shape(shape.clone(), handle, Some(transform), 255, &[], UpdateFlags::TRANSFORM);
    }

    let handle = handle.unwrap();
    assert!(renderer.bounds(handle) == Some(BBox::new(14, 0, 22, 8)));
    assert!(renderer.render_shape(handle));
    drop(renderer);

    assert!(pixels[0] == 0);
    assert!(pixels[14] == 0xff0000ff);
}
