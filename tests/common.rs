//! Shared setup: every test game writes its log and save file into its own temp dir.

use adkins_house::GameState;
use adkins_house::config::GameConfig;
use adkins_house::engine::Output;

pub fn new_game() -> (tempfile::TempDir, GameState) {
    let dir = tempfile::tempdir().expect("tempdir");
    let game = GameState::new(GameConfig::in_dir(dir.path())).expect("world builds");
    (dir, game)
}

/// Run one command that must not fault.
pub fn run(game: &mut GameState, input: &str) -> Output {
    let (out, quit) = game.step(input).expect("step");
    assert!(!quit, "{input:?} should not end the game");
    out
}

#[allow(dead_code)] // not every test binary reads the log
pub fn log_lines(game: &GameState) -> Vec<String> {
    std::fs::read_to_string(game.log.path())
        .expect("game log")
        .lines()
        .map(str::to_string)
        .collect()
}
