use std::io::{self, BufRead, Write};

use adkins_house::GameState;
use adkins_house::config::GameConfig;
use adkins_house::engine::{Output, OutputBlock};
use anyhow::{Context, Result};

fn flush_output(out: Output) {
    for block in out.blocks {
        match block {
            OutputBlock::Title(t) => println!("\n{}", t),
            OutputBlock::Text(line) => println!("{}", line),
            OutputBlock::Event(ev) => println!("{}", ev),
            OutputBlock::Exits(exits) => println!("{}", exits),
        }
    }
}

fn init_logging() {
    // Diagnostics go to stderr; stdout belongs to the game.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut game = GameState::new(GameConfig::default()).context("failed to build the world")?;
    let intro = game
        .initialize()
        .context("starting room missing from the world")?;
    flush_output(intro);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::warn!("stopped reading input: {}", e);
                flush_output(game.interrupt());
                break;
            }
            None => {
                println!();
                flush_output(game.interrupt());
                break;
            }
        };

        match game.step(&input) {
            Ok((out, quit)) => {
                flush_output(out);
                if quit {
                    break;
                }
            }
            Err(e) => {
                log::warn!("command {:?} failed: {}", input, e);
                flush_output(game.report_fault(&e));
            }
        }
    }

    Ok(())
}
