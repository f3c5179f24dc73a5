use engine::board::{Board, Piece, Square, BOARD_SIZE};

// Text rendering of the board, ranks 8 down to 1, files a to h.
pub fn draw_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{} ", BOARD_SIZE - row));
        for col in 0..BOARD_SIZE {
            match board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    out.push(' ');
                    out.push_str(piece.glyph());
                }
                None => out.push_str(" ·"),
            }
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

pub fn draw_captured(captured: &[Piece]) -> String {
    captured
        .iter()
        .map(|p| p.glyph())
        .collect::<Vec<_>>()
        .join(" ")
}
