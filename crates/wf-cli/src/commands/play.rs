//! Run the game loop on the terminal.

use std::io;
use std::path::Path;

use log::info;
use wf_engine::{Game, GameConfig};

/// Play until stdin is exhausted.
pub fn run(world: Option<&Path>, config: GameConfig) -> Result<(), String> {
    let (world, start) = super::load_world(world)?;
    let mut game = Game::with_config(world, start, config).map_err(|e| e.to_string())?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    game.mainloop(&mut input, &mut output)
        .map_err(|e| e.to_string())?;

    info!(
        "game over: {} enemies defeated",
        game.stats().enemies_defeated
    );
    Ok(())
}
