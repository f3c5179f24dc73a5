/*
 * Move legality and check detection.
 *
 * Three layers, each built on the one before it:
 * - is_geometric_move_valid: shape and path rules per piece kind, no
 *   notion of check
 * - is_square_attacked: scan every piece of one team through the
 *   geometric validator against a target square
 * - is_move_safe: geometry, friendly-capture rejection, then the move is
 *   played on a scratch copy of the board and the mover's king is tested
 *   for attack in the resulting position
 *
 * All functions take the board explicitly and report failure as `false`;
 * off-board squares and a missing king reject the query instead of
 * panicking.
 */

use crate::board::{in_board, Board, PieceKind, Square, Team, BOARD_SIZE};

// Every square strictly between `from` and `to`, walking by one signum
// step at a time, must be empty. Both endpoints are excluded. Callers
// guarantee the two squares share a rank, file or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_col = (to.col - from.col).signum();
    let mut row = from.row + step_row;
    let mut col = from.col + step_col;
    while row != to.row || col != to.col {
        if board.piece_at(Square::new(row, col)).is_some() {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}

// Castling preconditions: an unmoved king, a matching unmoved corner rook
// on the same row, and nothing standing between them. Whether the king is
// currently checked or crosses an attacked square is not inspected here.
fn castle_allowed(board: &Board, from: Square, to: Square, team: Team) -> bool {
    let king = match board.piece_at(from) {
        Some(p) if p.kind == PieceKind::King && p.team == team => p,
        _ => return false,
    };
    if king.moved {
        return false;
    }
    let rook_col = if to.col > from.col { BOARD_SIZE - 1 } else { 0 };
    let corner = Square::new(from.row, rook_col);
    match board.piece_at(corner) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.team == team && !rook.moved => {
            path_clear(board, from, corner)
        }
        _ => false,
    }
}

// Shape and reach of a single piece kind, ignoring check. The destination
// may hold a piece of either team; capturing a teammate is rejected one
// layer up, in is_move_safe.
pub fn is_geometric_move_valid(
    board: &Board,
    from: Square,
    to: Square,
    kind: PieceKind,
    team: Team,
) -> bool {
    if !in_board(from) || !in_board(to) || from == to {
        return false;
    }
    let d_row = to.row - from.row;
    let d_col = to.col - from.col;
    let a_row = d_row.abs();
    let a_col = d_col.abs();
    let empty = board.piece_at(to).is_none();

    match kind {
        PieceKind::Pawn => {
            let dir = team.forward();
            // single advance onto a free square
            if d_col == 0 && d_row == dir && empty {
                return true;
            }
            // double advance from the home row, both squares free
            if d_col == 0
                && d_row == dir * 2
                && from.row == team.home_row()
                && empty
                && path_clear(board, from, to)
            {
                return true;
            }
            // diagonal capture, only onto an occupied square
            a_col == 1 && d_row == dir && !empty
        }
        PieceKind::Rook => (d_row == 0 || d_col == 0) && path_clear(board, from, to),
        PieceKind::Bishop => a_row == a_col && path_clear(board, from, to),
        PieceKind::Knight => (a_row == 2 && a_col == 1) || (a_row == 1 && a_col == 2),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || a_row == a_col) && path_clear(board, from, to)
        }
        PieceKind::King => {
            if a_row <= 1 && a_col <= 1 {
                return true;
            }
            d_row == 0 && a_col == 2 && castle_allowed(board, from, to, team)
        }
    }
}

// Whether some piece of `team` could geometrically capture `square`.
// A pawn's straight advance is not a capture, so it never attacks.
pub fn is_square_attacked(board: &Board, square: Square, team: Team) -> bool {
    if !in_board(square) {
        return false;
    }
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Square::new(row, col);
            if let Some(piece) = board.piece_at(from) {
                if piece.team == team
                    && is_geometric_move_valid(board, from, square, piece.kind, team)
                {
                    return true;
                }
            }
        }
    }
    false
}

// The single legality entry point: geometrically valid, not a capture of
// a teammate, and the mover's own king is not attacked once the move is
// played. The hypothetical position lives on a scratch copy, so the
// caller's board is untouched on every path, the king-less one included.
pub fn is_move_safe(board: &Board, from: Square, to: Square, kind: PieceKind, team: Team) -> bool {
    if !is_geometric_move_valid(board, from, to, kind, team) {
        return false;
    }
    if let Some(target) = board.piece_at(to) {
        if target.team == team {
            return false;
        }
    }
    let m = match board.make_move(from, to) {
        Some(m) => m,
        None => return false,
    };
    let mut scratch = board.clone();
    scratch.apply_move(&m);
    match scratch.king_position(team) {
        Some(king) => !is_square_attacked(&scratch, king, team.opponent()),
        None => false,
    }
}
