use std::io::{self, BufRead, Write};

use engine::ai::{choose_move, Strength};
use engine::engine::parse_move;
use engine::game::Game;
use tracing::info;

mod ui;

const HELP: &str = "\
moves:    e2e4 (promotion: e7e8q)
moves e2  list the legal destinations of the piece on e2
ai [1-3]  let the computer play the side to move (1 random, 2 greedy, 3 material)
fen <fen> load a position
undo      take the last move back
quit      leave";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut game = Game::new();
    println!("{}", ui::draw_board(&game.board));
    let stdin = io::stdin();
    loop {
        print!("{} > ", game.turn);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let mut token = line.splitn(2, ' ');
        match token.next().unwrap_or("") {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "undo" => {
                if game.undo() {
                    println!("{}", ui::draw_board(&game.board));
                } else {
                    println!("nothing to undo");
                }
            }
            "moves" => {
                let targets = token
                    .next()
                    .and_then(engine::board::Square::parse)
                    .map(|from| game.legal_targets(from))
                    .unwrap_or_default();
                let text: Vec<String> = targets.iter().map(|t| t.to_string()).collect();
                println!("{}", text.join(" "));
            }
            "ai" => {
                let strength = match token.next().and_then(|d| d.parse::<i32>().ok()) {
                    Some(1) => Strength::Random,
                    Some(2) => Strength::Greedy,
                    _ => Strength::Material,
                };
                match choose_move(&game.board, game.turn, strength) {
                    Some(m) => {
                        let team = game.turn;
                        game.try_move(m.from, m.to, None);
                        info!("{} played {}{}", team, m.from, m.to);
                        println!("{} plays {}{}", team, m.from, m.to);
                        after_move(&game);
                    }
                    None => println!("no move available"),
                }
            }
            "fen" => match token.next().and_then(Game::from_fen) {
                Some(loaded) => {
                    game = loaded;
                    println!("{}", ui::draw_board(&game.board));
                }
                None => println!("bad fen"),
            },
            _ => match parse_move(line) {
                Some((from, to, promotion)) => {
                    if game.try_move(from, to, promotion) {
                        info!("{} played {}", game.turn.opponent(), line);
                        after_move(&game);
                    } else {
                        println!("illegal move");
                    }
                }
                None => println!("unknown command, try help"),
            },
        }
    }
    Ok(())
}

fn after_move(game: &Game) {
    println!("{}", ui::draw_board(&game.board));
    if !game.captured.is_empty() {
        println!("captured: {}", ui::draw_captured(&game.captured));
    }
    if game.in_check(game.turn) {
        println!("{} is in check", game.turn);
    }
}
