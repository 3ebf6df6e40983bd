// crates/playground/src/main.rs
use std::path::PathBuf;

use anyhow::Context;
use engine_core::{config, logging, App, PlatformRunner};
use game_plugin::PlaygroundGame;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("playground.json"));

    let config = config::load_config(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    logging::init(&config.log_level);

    let mut app = App::new(&config, Box::new(PlaygroundGame::new(config.clone())));
    app.events_mut().subscribe(|event| tracing::info!(?event, "broadcast"));

    PlatformRunner::new(app).start()?;
    Ok(())
}
