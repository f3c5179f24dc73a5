/*
 * Turn controller on top of the rules functions. The engine decides
 * whether a move is legal; the controller owns whose turn it is, commits
 * accepted moves to the board (castling rook included), promotes pawns
 * on the far rank and keeps enough history to take moves back.
 */

use crate::board::{Board, Move, Piece, PieceKind, Square, Team, BOARD_SIZE};
use crate::rules::{is_move_safe, is_square_attacked};

// One committed turn: the primary move plus the rook co-move when the
// primary move was castling.
#[derive(Clone, Copy, Debug)]
struct PlayedMove {
    mv: Move,
    rook: Option<Move>,
}

pub struct Game {
    pub board: Board,
    pub turn: Team,
    pub captured: Vec<Piece>,
    history: Vec<PlayedMove>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::init(),
            turn: Team::White,
            captured: vec![],
            history: vec![],
        }
    }

    pub fn from_fen(fen: &str) -> Option<Self> {
        let (board, turn) = Board::from_fen(fen)?;
        Some(Game {
            board,
            turn,
            captured: vec![],
            history: vec![],
        })
    }

    // Commit gate. The move must belong to the side to move and pass
    // is_move_safe; only then does the board change.
    pub fn try_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        let piece = match self.board.piece_at(from) {
            Some(p) if p.team == self.turn => p,
            _ => return false,
        };
        if !is_move_safe(&self.board, from, to, piece.kind, piece.team) {
            return false;
        }
        let m = match self.board.make_move(from, to) {
            Some(m) => m,
            None => return false,
        };
        self.board.apply_move(&m);
        if let Some(captured) = m.capture {
            self.captured.push(captured);
        }

        // the king moved two columns: castling, bring the rook across
        let rook = if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let (rook_from, rook_to) = if to.col > from.col {
                (Square::new(from.row, BOARD_SIZE - 1), Square::new(from.row, 5))
            } else {
                (Square::new(from.row, 0), Square::new(from.row, 3))
            };
            let rook_move = self.board.make_move(rook_from, rook_to);
            if let Some(rm) = &rook_move {
                self.board.apply_move(rm);
            }
            rook_move
        } else {
            None
        };

        // promotion on the far rank, queen unless the caller named a kind
        if piece.kind == PieceKind::Pawn && to.row == piece.team.promotion_row() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            self.board.place_piece(
                to,
                Piece {
                    kind,
                    team: piece.team,
                    moved: true,
                },
            );
        }

        self.history.push(PlayedMove { mv: m, rook });
        self.turn = self.turn.opponent();
        true
    }

    // Reverse the latest commit. undo_move puts the recorded pre-move
    // pieces back, which also demotes a promoted pawn.
    pub fn undo(&mut self) -> bool {
        let played = match self.history.pop() {
            Some(p) => p,
            None => return false,
        };
        if let Some(rook) = &played.rook {
            self.board.undo_move(rook);
        }
        self.board.undo_move(&played.mv);
        if played.mv.capture.is_some() {
            self.captured.pop();
        }
        self.turn = played.mv.team;
        true
    }

    pub fn in_check(&self, team: Team) -> bool {
        match self.board.king_position(team) {
            Some(king) => is_square_attacked(&self.board, king, team.opponent()),
            None => false,
        }
    }

    // Destinations a front end may highlight for the piece on `from`.
    pub fn legal_targets(&self, from: Square) -> Vec<Square> {
        let mut targets = vec![];
        let piece = match self.board.piece_at(from) {
            Some(p) if p.team == self.turn => p,
            _ => return targets,
        };
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let to = Square::new(row, col);
                if is_move_safe(&self.board, from, to, piece.kind, piece.team) {
                    targets.push(to);
                }
            }
        }
        targets
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
