use std::{collections::HashMap, sync::LazyLock};

use crate::board::{PieceKind, Team};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub static FEN_MAP: LazyLock<HashMap<char, (Team, PieceKind)>> = LazyLock::new(|| {
    HashMap::from([
        ('p', (Team::Black, PieceKind::Pawn)),
        ('n', (Team::Black, PieceKind::Knight)),
        ('b', (Team::Black, PieceKind::Bishop)),
        ('r', (Team::Black, PieceKind::Rook)),
        ('q', (Team::Black, PieceKind::Queen)),
        ('k', (Team::Black, PieceKind::King)),
        ('P', (Team::White, PieceKind::Pawn)),
        ('N', (Team::White, PieceKind::Knight)),
        ('B', (Team::White, PieceKind::Bishop)),
        ('R', (Team::White, PieceKind::Rook)),
        ('Q', (Team::White, PieceKind::Queen)),
        ('K', (Team::White, PieceKind::King)),
    ])
});
