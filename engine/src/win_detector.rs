use crate::board::{BOARD_SIZE, Board};
use crate::types::{Cell, GameStatus, Mark, Position, WinningLine};

// Rows, then columns, then the two diagonals; the first completed line
// in that fixed order is the one reported.
pub fn winning_line(board: &Board, mark: Mark) -> Option<WinningLine> {
    let target = Cell::Marked(mark);

    for row in 0..BOARD_SIZE {
        if board.cell(row, 0) == target
            && board.cell(row, 1) == target
            && board.cell(row, 2) == target
        {
            return Some(WinningLine::new(
                mark,
                Position::new(row, 0),
                Position::new(row, 2),
            ));
        }
    }

    for col in 0..BOARD_SIZE {
        if board.cell(0, col) == target
            && board.cell(1, col) == target
            && board.cell(2, col) == target
        {
            return Some(WinningLine::new(
                mark,
                Position::new(0, col),
                Position::new(2, col),
            ));
        }
    }

    if board.cell(0, 0) == target && board.cell(1, 1) == target && board.cell(2, 2) == target {
        return Some(WinningLine::new(
            mark,
            Position::new(0, 0),
            Position::new(2, 2),
        ));
    }

    if board.cell(0, 2) == target && board.cell(1, 1) == target && board.cell(2, 0) == target {
        return Some(WinningLine::new(
            mark,
            Position::new(0, 2),
            Position::new(2, 0),
        ));
    }

    None
}

pub fn check_win(board: &Board) -> Option<WinningLine> {
    winning_line(board, Mark::X).or_else(|| winning_line(board, Mark::O))
}

// Win for either mark is checked before fullness, so a board that
// fills up on a winning move is a win, not a draw.
pub fn game_status(board: &Board) -> GameStatus {
    if let Some(line) = check_win(board) {
        return GameStatus::Won(line);
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
