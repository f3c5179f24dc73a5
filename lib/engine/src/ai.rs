/*
 * Move choosers. Every candidate comes out of legal_moves, so the
 * choosers themselves carry no legality logic; they only rank.
 */

use crate::board::{Board, Move, Square, Team, BOARD_SIZE};
use crate::rules::is_move_safe;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strength {
    Random,
    Greedy,
    Material,
}

// Every fully legal move for `team`, by brute scan of all from/to pairs.
pub fn legal_moves(board: &Board, team: Team) -> Vec<Move> {
    let mut moves = vec![];
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let from = Square::new(row, col);
            let piece = match board.piece_at(from) {
                Some(p) if p.team == team => p,
                _ => continue,
            };
            for to_row in 0..BOARD_SIZE {
                for to_col in 0..BOARD_SIZE {
                    let to = Square::new(to_row, to_col);
                    if is_move_safe(board, from, to, piece.kind, team) {
                        if let Some(m) = board.make_move(from, to) {
                            moves.push(m);
                        }
                    }
                }
            }
        }
    }
    moves
}

pub fn choose_move(board: &Board, team: Team, strength: Strength) -> Option<Move> {
    let moves = legal_moves(board, team);
    if moves.is_empty() {
        return None;
    }
    let chosen = match strength {
        Strength::Random => moves[fastrand::usize(..moves.len())],
        Strength::Greedy => greedy_pick(&moves),
        Strength::Material => material_pick(board, team, &moves),
    };
    Some(chosen)
}

// The highest-valued capture when one exists, otherwise any move.
fn greedy_pick(moves: &[Move]) -> Move {
    let best = moves
        .iter()
        .filter_map(|m| m.capture.map(|c| c.kind.material_value()))
        .max();
    match best {
        Some(value) => {
            let captures: Vec<&Move> = moves
                .iter()
                .filter(|m| m.capture.map(|c| c.kind.material_value()) == Some(value))
                .collect();
            *captures[fastrand::usize(..captures.len())]
        }
        None => moves[fastrand::usize(..moves.len())],
    }
}

// Material balance for `team`, in centipawns.
fn material_balance(board: &Board, team: Team) -> i32 {
    let mut balance = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if let Some(piece) = board.piece_at(Square::new(row, col)) {
                if piece.team == team {
                    balance += piece.kind.material_value();
                } else {
                    balance -= piece.kind.material_value();
                }
            }
        }
    }
    balance
}

// Each move is scored by the balance after the opponent's best immediate
// reply, played out with apply/undo on one scratch board. Ties break at
// random so repeated games do not replay the same line.
fn material_pick(board: &Board, team: Team, moves: &[Move]) -> Move {
    let mut scratch = board.clone();
    let mut best_score = i32::MIN;
    let mut best: Vec<Move> = vec![];
    for m in moves {
        scratch.apply_move(m);
        let mut worst = material_balance(&scratch, team);
        for reply in legal_moves(&scratch, team.opponent()) {
            scratch.apply_move(&reply);
            worst = worst.min(material_balance(&scratch, team));
            scratch.undo_move(&reply);
        }
        scratch.undo_move(m);
        if worst > best_score {
            best_score = worst;
            best.clear();
            best.push(*m);
        } else if worst == best_score {
            best.push(*m);
        }
    }
    best[fastrand::usize(..best.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    fn sq(s: &str) -> Square {
        Square::parse(s).unwrap()
    }

    #[test]
    fn twenty_legal_moves_in_the_start_position() {
        let board = Board::init();
        assert_eq!(legal_moves(&board, Team::White).len(), 20);
        assert_eq!(legal_moves(&board, Team::Black).len(), 20);
    }

    #[test]
    fn every_chooser_returns_a_legal_move() {
        let board = Board::init();
        let legal = legal_moves(&board, Team::White);
        for strength in [Strength::Random, Strength::Greedy, Strength::Material] {
            let m = choose_move(&board, Team::White, strength).unwrap();
            assert!(legal.contains(&m));
        }
    }

    #[test]
    fn no_moves_means_no_choice() {
        let board = Board::empty();
        assert_eq!(choose_move(&board, Team::White, Strength::Random), None);
    }

    #[test]
    fn greedy_grabs_the_biggest_capture() {
        // the queen on d5 is the only capture on the board
        let (board, _) = Board::from_fen("k7/8/8/3q4/8/8/3R4/K7 w - - 0 1").unwrap();
        let m = choose_move(&board, Team::White, Strength::Greedy).unwrap();
        assert_eq!(m.to, sq("d5"));
        assert_eq!(m.capture.map(|c| c.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn material_avoids_the_defended_pawn() {
        // both rooks see a pawn; b5 is covered by the a6 pawn, e5 is
        // free, so the lookahead must take e5
        let (board, _) = Board::from_fen("k7/8/p7/1p2p3/8/8/1R2R3/K7 w - - 0 1").unwrap();
        let m = choose_move(&board, Team::White, Strength::Material).unwrap();
        assert_eq!(m.from, sq("e2"));
        assert_eq!(m.to, sq("e5"));
    }
}
