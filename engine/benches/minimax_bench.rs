use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::{Board, Difficulty, Mark, Position, SessionRng, calculate_move};

fn bench_minimax_empty_board(c: &mut Criterion) {
    c.bench_function("minimax_empty_board", |b| {
        b.iter(|| {
            let board = Board::new();
            let mut rng = SessionRng::new(0);
            calculate_move(Difficulty::Hard, &board, Mark::X, &mut rng)
        });
    });
}

fn bench_minimax_midgame(c: &mut Criterion) {
    c.bench_function("minimax_midgame", |b| {
        let mut board = Board::new();
        let moves = [
            (Position::new(1, 1), Mark::X),
            (Position::new(0, 0), Mark::O),
            (Position::new(2, 0), Mark::X),
            (Position::new(0, 2), Mark::O),
        ];
        for (pos, mark) in moves {
            board.place(pos, mark).unwrap();
        }

        b.iter(|| {
            let mut rng = SessionRng::new(0);
            calculate_move(Difficulty::Hard, &board, Mark::X, &mut rng)
        });
    });
}

fn bench_minimax_self_play_full_game(c: &mut Criterion) {
    c.bench_function("minimax_self_play_full_game", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut rng = SessionRng::new(0);
            let mut current_mark = Mark::X;

            while let Ok(pos) = calculate_move(Difficulty::Hard, &board, current_mark, &mut rng) {
                if board.place(pos, current_mark).is_err() {
                    break;
                }
                current_mark = current_mark.opponent();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_minimax_empty_board,
    bench_minimax_midgame,
    bench_minimax_self_play_full_game
);
criterion_main!(benches);
