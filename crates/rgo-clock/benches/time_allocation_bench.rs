use criterion::{criterion_group, criterion_main, Criterion};
use rgo_clock::{allocate, get_time, Board, ClockState, Stone};
use std::hint::black_box;

fn midgame_board() -> Board {
    let mut board = Board::new(19, 19);
    for y in 0..19 {
        for x in 0..19 {
            if (x * 7 + y * 3) % 5 == 0 {
                board.set_stone(x, y, if (x + y) % 2 == 0 { Stone::Black } else { Stone::White });
            }
        }
    }
    board
}

fn bench_get_time(c: &mut Criterion) {
    let board = midgame_board();
    let fischer = ClockState::fischer_time(600.0, 10.0);
    let byoyomi = ClockState::canadian_or_byoyomi_time(0.0, 30.0, 5, 1);

    c.bench_function("get_time_fischer_19x19", |b| {
        b.iter(|| black_box(get_time(black_box(&board), &fischer, 0.5)))
    });

    c.bench_function("get_time_byoyomi_19x19", |b| {
        b.iter(|| black_box(get_time(black_box(&board), &byoyomi, 0.5)))
    });

    c.bench_function("allocate_only", |b| {
        b.iter(|| black_box(allocate(&fischer, black_box(150.0), 0.5)))
    });
}

criterion_group!(benches, bench_get_time);
criterion_main!(benches);
