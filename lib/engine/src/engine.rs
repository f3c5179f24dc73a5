/* Text protocol front: drives the game from stdin, UCI conventions. */

use std::io;

use regex::Regex;

use crate::ai::{choose_move, Strength};
use crate::board::{PieceKind, Square};
use crate::game::Game;

// "e2e4" plus an optional promotion letter, "e7e8q".
pub fn parse_move(token: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if !token.is_ascii() || (token.len() != 4 && token.len() != 5) {
        return None;
    }
    let from = Square::parse(&token[0..2])?;
    let to = Square::parse(&token[2..4])?;
    let promotion = match token.as_bytes().get(4) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return None,
    };
    Some((from, to, promotion))
}

pub struct UciEngine {
    pub game: Game,
}

impl UciEngine {
    pub fn new() -> Self {
        UciEngine { game: Game::new() }
    }

    pub fn start(&mut self) {
        loop {
            let mut cmd = String::new();
            if io::stdin().read_line(&mut cmd).unwrap_or(0) == 0 {
                break;
            }
            let cmd = cmd.trim().to_owned();
            if cmd == "quit" {
                break;
            }
            let mut token = cmd.splitn(2, ' ');
            match token.next().unwrap_or("") {
                "uci" => self.info(),
                "isready" => self.is_ready(),
                "position" => self.position(token.next().unwrap_or("")),
                "go" => {
                    let depth = token
                        .next()
                        .and_then(|rest| rest.split(' ').last())
                        .and_then(|d| d.parse().ok())
                        .unwrap_or(3);
                    self.go(depth);
                }
                _ => println!("not support"),
            }
        }
    }

    pub fn info(&self) {
        println!("id name rs-chess 1.0");
        println!("uciok");
    }

    pub fn is_ready(&self) {
        println!("readyok");
    }

    pub fn position(&mut self, param: &str) {
        let regex = Regex::new(
            r#"^(?:fen (?P<fen>[pnbrqkPNBRQK1-8/]+ [wb] [KQkq-]+ \S+ \d+ \d+)|(?P<startpos>startpos))(?: moves (?P<moves>[a-h][1-8][a-h][1-8][qrbn]?(?: [a-h][1-8][a-h][1-8][qrbn]?)*))?$"#,
        )
        .unwrap();
        for captures in regex.captures_iter(param) {
            if let Some(fen) = captures.name("fen") {
                if let Some(game) = Game::from_fen(fen.as_str()) {
                    self.game = game;
                }
            }
            if captures.name("startpos").is_some() {
                self.game = Game::new();
            }
            if let Some(moves) = captures.name("moves") {
                for token in moves.as_str().split(' ') {
                    if let Some((from, to, promotion)) = parse_move(token) {
                        // only applied when the engine accepts it
                        self.game.try_move(from, to, promotion);
                    }
                }
            }
        }
    }

    // Depth selects the chooser: 1 plays at random, 2 grabs captures,
    // anything deeper weighs material one reply ahead.
    pub fn go(&mut self, depth: i32) {
        let strength = if depth <= 1 {
            Strength::Random
        } else if depth == 2 {
            Strength::Greedy
        } else {
            Strength::Material
        };
        match choose_move(&self.game.board, self.game.turn, strength) {
            Some(m) => {
                let promoting = m.piece.kind == PieceKind::Pawn
                    && m.to.row == m.team.promotion_row();
                let suffix = if promoting { "q" } else { "" };
                println!("bestmove {}{}{}", m.from, m.to, suffix);
            }
            None => println!("nobestmove"),
        }
    }
}

impl Default for UciEngine {
    fn default() -> Self {
        UciEngine::new()
    }
}
