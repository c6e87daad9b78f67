use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slide_maze::core::{apply_move, create_level, generate, level_config, undo};
use slide_maze::types::Direction;

fn bench_generate_small(c: &mut Criterion) {
    let params = level_config(1);

    c.bench_function("generate_level_1", |b| {
        b.iter(|| generate(black_box(&params)))
    });
}

fn bench_generate_large(c: &mut Criterion) {
    let params = level_config(250);

    c.bench_function("generate_level_250", |b| {
        b.iter(|| generate(black_box(&params)))
    });
}

fn bench_create_level(c: &mut Criterion) {
    c.bench_function("create_level_100", |b| {
        b.iter(|| create_level(black_box(100), None))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let state = create_level(50, None);
    let direction = Direction::ALL
        .into_iter()
        .find(|&d| apply_move(&state, d).player_pos != state.player_pos)
        .expect("some legal move");

    c.bench_function("apply_move", |b| {
        b.iter(|| apply_move(black_box(&state), direction))
    });
}

fn bench_undo(c: &mut Criterion) {
    let state = create_level(50, None);
    let direction = Direction::ALL
        .into_iter()
        .find(|&d| apply_move(&state, d).player_pos != state.player_pos)
        .expect("some legal move");
    let moved = apply_move(&state, direction);

    c.bench_function("undo", |b| b.iter(|| undo(black_box(&moved))));
}

criterion_group!(
    benches,
    bench_generate_small,
    bench_generate_large,
    bench_create_level,
    bench_apply_move,
    bench_undo
);
criterion_main!(benches);
