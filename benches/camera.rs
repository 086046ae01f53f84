use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use freelook::traits::{InputHandler, Key, KeyAction};
use freelook::{InputTracker, MovementDirection, OrientationCamera, SceneState};
use glam::Vec3;

/// Benchmark: one mouse-look step, including the basis rebuild
fn bench_process_look(c: &mut Criterion) {
    let mut camera = OrientationCamera::new(Vec3::ZERO);

    c.bench_function("process_look", |b| {
        b.iter(|| camera.process_look(black_box(1.5), black_box(-0.75), true))
    });
}

/// Benchmark: view matrix from the current basis
fn bench_view_matrix(c: &mut Criterion) {
    let mut camera = OrientationCamera::new(Vec3::new(1.0, 2.0, 3.0));
    camera.process_look(30.0, 12.0, true);

    c.bench_function("view_matrix", |b| {
        b.iter(|| black_box(camera.view_matrix()))
    });
}

/// Benchmark: movement in each direction
fn bench_movement(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement");
    for grounded in [false, true] {
        group.bench_with_input(BenchmarkId::new("grounded", grounded), &grounded, |b, &grounded| {
            let mut camera = OrientationCamera::new(Vec3::ZERO);
            b.iter(|| {
                for direction in [
                    MovementDirection::Forward,
                    MovementDirection::Right,
                    MovementDirection::Backward,
                    MovementDirection::Left,
                ] {
                    if grounded {
                        camera.process_movement_grounded(direction, black_box(0.016));
                    } else {
                        camera.process_movement(direction, black_box(0.016));
                    }
                }
            })
        });
    }
    group.finish();
}

/// Benchmark: a burst of cursor events followed by one poll
fn bench_cursor_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_burst");
    for events in [1usize, 16, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(events), &events, |b, &events| {
            let mut tracker = InputTracker::new();
            b.iter(|| {
                for i in 0..events {
                    tracker.on_cursor_moved(i as f32, (i * 2) as f32);
                }
                black_box(tracker.poll_cursor_delta())
            })
        });
    }
    group.finish();
}

/// Benchmark: a full frame update with movement keys held
fn bench_scene_update(c: &mut Criterion) {
    let mut scene = SceneState::default();
    let mut input = InputTracker::new();
    input.on_key(Key::W.code(), KeyAction::Press);
    input.on_key(Key::D.code(), KeyAction::Press);

    c.bench_function("scene_update", |b| {
        b.iter(|| {
            input.on_cursor_moved(400.0, 300.0);
            input.on_scroll(0.0, 0.1);
            scene.update(&mut input, black_box(0.016));
        })
    });
}

criterion_group!(
    benches,
    bench_process_look,
    bench_view_matrix,
    bench_movement,
    bench_cursor_burst,
    bench_scene_update
);
criterion_main!(benches);
