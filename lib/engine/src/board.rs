/*
 * Board state for western chess.
 *
 * - 8x8 grid, row 0 is Black's home rank (rank 8), row 7 is White's (rank 1)
 * - a square holds at most one Piece; Piece carries its team, kind and a
 *   `moved` flag that feeds castling legality
 * - Move records the moving piece with its pre-move flags and the captured
 *   occupant of the target square, which is what makes undo_move exact
 * - the board stores occupancy only; whose turn it is lives in the Game
 *   controller and is passed into the rules functions as a parameter
 */

use std::fmt;

use crate::constant::FEN_MAP;

pub const BOARD_SIZE: i32 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opponent(&self) -> Team {
        if self == &Team::White {
            Team::Black
        } else {
            Team::White
        }
    }
    // White pawns move toward row 0, Black pawns toward row 7.
    pub fn forward(&self) -> i32 {
        if self == &Team::White { -1 } else { 1 }
    }
    pub fn home_row(&self) -> i32 {
        if self == &Team::White { 6 } else { 1 }
    }
    pub fn back_rank(&self) -> i32 {
        if self == &Team::White { 7 } else { 0 }
    }
    pub fn promotion_row(&self) -> i32 {
        if self == &Team::White { 0 } else { 7 }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn material_value(&self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, team: Team) -> Piece {
        Piece {
            kind,
            team,
            moved: false,
        }
    }

    pub fn as_moved(&self) -> Piece {
        Piece {
            moved: true,
            ..*self
        }
    }

    pub fn glyph(&self) -> &'static str {
        match (self.team, self.kind) {
            (Team::White, PieceKind::Pawn) => "♙",
            (Team::White, PieceKind::Knight) => "♘",
            (Team::White, PieceKind::Bishop) => "♗",
            (Team::White, PieceKind::Rook) => "♖",
            (Team::White, PieceKind::Queen) => "♕",
            (Team::White, PieceKind::King) => "♔",
            (Team::Black, PieceKind::Pawn) => "♟",
            (Team::Black, PieceKind::Knight) => "♞",
            (Team::Black, PieceKind::Bishop) => "♝",
            (Team::Black, PieceKind::Rook) => "♜",
            (Team::Black, PieceKind::Queen) => "♛",
            (Team::Black, PieceKind::King) => "♚",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    pub fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    // "e2" style coordinates; None when the text is not a board square.
    pub fn parse(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0] as i32 - 'a' as i32;
        let rank = bytes[1] as i32 - '1' as i32;
        let sq = Square::new(BOARD_SIZE - 1 - rank, col);
        if in_board(sq) { Some(sq) } else { None }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col as u8) as char,
            BOARD_SIZE - self.row
        )
    }
}

pub fn in_board(sq: Square) -> bool {
    sq.row >= 0 && sq.row < BOARD_SIZE && sq.col >= 0 && sq.col < BOARD_SIZE
}

// A move request. `piece` is the mover as it stood before the move and
// `capture` is whatever occupied the target square at that moment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Move {
    pub team: Team,
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub capture: Option<Piece>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    // Standard start position.
    pub fn init() -> Self {
        use PieceKind::*;
        let mut board = Board::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, kind) in back_rank.iter().enumerate() {
            board.place_piece(Square::new(0, col as i32), Piece::new(*kind, Team::Black));
            board.place_piece(Square::new(7, col as i32), Piece::new(*kind, Team::White));
        }
        for col in 0..BOARD_SIZE {
            board.place_piece(Square::new(1, col), Piece::new(Pawn, Team::Black));
            board.place_piece(Square::new(6, col), Piece::new(Pawn, Team::White));
        }
        board
    }

    // Placement, side to move and castling rights; the en-passant and
    // clock fields are accepted but ignored.
    pub fn from_fen(fen: &str) -> Option<(Board, Team)> {
        let mut board = Board::empty();
        let mut parts = fen.split(' ');
        let placement = parts.next()?;
        let mut row = 0;
        for rank in placement.split('/') {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(d) = c.to_digit(10) {
                    col += d as i32;
                } else {
                    let (team, kind) = *FEN_MAP.get(&c)?;
                    if !in_board(Square::new(row, col)) {
                        return None;
                    }
                    board.place_piece(Square::new(row, col), Piece::new(kind, team));
                    col += 1;
                }
            }
            row += 1;
        }
        let turn = match parts.next() {
            Some("b") => Team::Black,
            _ => Team::White,
        };
        // An absent castling right means that corner rook already moved.
        let rights = parts.next().unwrap_or("-");
        let corners = [
            ('K', Square::new(7, 7)),
            ('Q', Square::new(7, 0)),
            ('k', Square::new(0, 7)),
            ('q', Square::new(0, 0)),
        ];
        for (flag, corner) in corners {
            if rights.contains(flag) {
                continue;
            }
            if let Some(rook) = board.piece_at(corner) {
                if rook.kind == PieceKind::Rook {
                    board.place_piece(corner, rook.as_moved());
                }
            }
        }
        Some((board, turn))
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if in_board(sq) {
            self.squares[sq.row as usize][sq.col as usize]
        } else {
            None
        }
    }

    pub fn place_piece(&mut self, sq: Square, piece: Piece) {
        if in_board(sq) {
            self.squares[sq.row as usize][sq.col as usize] = Some(piece);
        }
    }

    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        if in_board(sq) {
            self.squares[sq.row as usize][sq.col as usize].take()
        } else {
            None
        }
    }

    // Full scan of all 64 squares. No king on the board is a supported
    // outcome, not an error.
    pub fn king_position(&self, team: Team) -> Option<Square> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.kind == PieceKind::King && piece.team == team {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    // Build a move request by reading the occupants of both squares.
    pub fn make_move(&self, from: Square, to: Square) -> Option<Move> {
        let piece = self.piece_at(from)?;
        Some(Move {
            team: piece.team,
            from,
            to,
            piece,
            capture: self.piece_at(to),
        })
    }

    pub fn apply_move(&mut self, m: &Move) {
        self.remove_piece(m.from);
        self.place_piece(m.to, m.piece.as_moved());
    }

    // Restores the pre-move piece value (flags included) and the capture.
    pub fn undo_move(&mut self, m: &Move) {
        self.place_piece(m.from, m.piece);
        match m.capture {
            Some(captured) => self.place_piece(m.to, captured),
            None => {
                self.remove_piece(m.to);
            }
        }
    }
}
