mod config;
mod game;
mod input;
mod logging;
mod render;
mod snake;
mod state;
mod term;

use anyhow::Result;
use log::info;

use crate::config::GameConfig;
use crate::game::SnakeGame;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> Result<()> {
    logging::init()?;

    let config = GameConfig::default();
    info!("starting with {:?}", config);

    let mut game = SnakeGame::new(config)?;
    game.initialize()?;

    let ending = game.play();

    // The terminal has to be back to normal before anything is printed
    game.finish();

    let ending = ending?;
    if let Some(msg) = ending.message() {
        println!("{}", msg);
    }
    if let Some(length) = ending.length() {
        println!("Length: {}", length);
    }
    Ok(())
}
