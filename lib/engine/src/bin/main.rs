use engine::engine::UciEngine;

fn main() {
    UciEngine::new().start();
}
