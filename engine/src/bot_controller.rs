use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{Difficulty, Mark, NoLegalMove, Position};
use crate::win_detector::winning_line;

pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Position, NoLegalMove> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng),
        Difficulty::Medium => calculate_heuristic_move(board, bot_mark, rng),
        Difficulty::Hard => calculate_minimax_move(board, bot_mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<Position, NoLegalMove> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(NoLegalMove);
    }
    Ok(moves[rng.random_index(moves.len())])
}

// Win if possible, otherwise block, otherwise random. Both scans are
// row-major and take the first hit.
fn calculate_heuristic_move(
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Result<Position, NoLegalMove> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(NoLegalMove);
    }
    let opponent = bot_mark.opponent();

    for &pos in &moves {
        if winning_line(&board.with_mark(pos, bot_mark), bot_mark).is_some() {
            return Ok(pos);
        }
    }

    for &pos in &moves {
        if winning_line(&board.with_mark(pos, opponent), opponent).is_some() {
            return Ok(pos);
        }
    }

    calculate_random_move(board, rng)
}

// Exhaustive search, depth bounded by the number of empty cells. Only
// a strictly greater score replaces the best move, so ties break to
// the first move in row-major order.
fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<Position, NoLegalMove> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(NoLegalMove);
    }

    let mut best_score = i32::MIN;
    let mut best_move = moves[0];
    for &pos in &moves {
        let score = minimax(&board.with_mark(pos, bot_mark), false, bot_mark);
        if score > best_score {
            best_score = score;
            best_move = pos;
        }
    }
    Ok(best_move)
}

fn minimax(board: &Board, is_maximizing: bool, bot_mark: Mark) -> i32 {
    if winning_line(board, bot_mark).is_some() {
        return 1;
    }
    let opponent = bot_mark.opponent();
    if winning_line(board, opponent).is_some() {
        return -1;
    }
    if board.is_full() {
        return 0;
    }

    if is_maximizing {
        let mut best = i32::MIN;
        for pos in board.legal_moves() {
            let score = minimax(&board.with_mark(pos, bot_mark), false, bot_mark);
            best = best.max(score);
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in board.legal_moves() {
            let score = minimax(&board.with_mark(pos, opponent), true, bot_mark);
            best = best.min(score);
        }
        best
    }
}
