use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{
    collides, Board, GameEngine, GameSnapshot, MoveOutcome, Piece, RandomPieces,
};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::in_memory(RandomPieces::new(12345));
    engine.start();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if black_box(engine.tick()) == MoveOutcome::ToppedOut {
                engine.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_completed_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::default();
    for x in 0..9 {
        board.set(x, 19, true);
    }
    let piece = Piece::spawn(PieceKind::T, 10).translated(0, 17);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(&board), black_box(&piece)))
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut engine = GameEngine::in_memory(RandomPieces::new(12345));
    engine.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            engine.apply_action(GameAction::MoveLeft);
            engine.apply_action(GameAction::Rotate);
            engine.apply_action(GameAction::MoveRight);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = GameEngine::in_memory(RandomPieces::new(12345));
    engine.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| engine.snapshot_into(black_box(&mut snap)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_move_and_rotate,
    bench_snapshot
);
criterion_main!(benches);
