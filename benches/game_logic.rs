use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_puzzles::core::{Board, ColorGrid, SimpleRng, SumGrid};
use tui_puzzles::types::GRID_SIZE;

fn bench_board_generate(c: &mut Criterion) {
    c.bench_function("board_generate", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| Board::generate(black_box(&mut rng)))
    });
}

fn bench_rotation(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::generate(&mut rng);

    c.bench_function("rotation_begin_commit", |b| {
        b.iter(|| {
            let mut board = black_box(board.clone());
            if let Some(plan) = board.begin_rotation() {
                board.commit_rotation(plan);
            }
        })
    });
}

fn bench_token_move(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::generate(&mut rng);
    // Find any selectable cell once, outside the measured loop.
    let mut target = None;
    'scan: for col in 0..4 {
        for row in 1..5 {
            if board.is_selectable(col, row) {
                target = Some((col, row));
                break 'scan;
            }
        }
    }

    c.bench_function("move_begin_commit", |b| {
        b.iter(|| {
            let mut board = black_box(board.clone());
            if let Some((col, row)) = target {
                if let Some(plan) = board.begin_move(col, row) {
                    board.commit_move(plan);
                }
            }
        })
    });
}

fn bench_sum_grid_generate(c: &mut Criterion) {
    c.bench_function("sum_grid_generate", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| SumGrid::generate(black_box(&mut rng)))
    });
}

fn bench_color_grid_complete(c: &mut Criterion) {
    let mut highlighted = ColorGrid::from_numbers([Some(5); GRID_SIZE]);
    for idx in (0..GRID_SIZE).step_by(2) {
        let _ = highlighted.cycle(idx);
    }

    c.bench_function("color_grid_complete", |b| {
        b.iter(|| {
            let mut grid = black_box(highlighted.clone());
            grid.complete()
        })
    });
}

criterion_group!(
    benches,
    bench_board_generate,
    bench_rotation,
    bench_token_move,
    bench_sum_grid_generate,
    bench_color_grid_complete
);
criterion_main!(benches);
