// crates/launcher/src/main.rs

mod script;
mod settings;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use engine_core::{init_logging, App, HeadlessHost};
use escape_room::{Game, Item};
use tracing::info;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Single-screen point-and-click escape room", long_about = None)]
struct Cli {
    /// TOML file with [window], [camera] and [puzzles.*] sections
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `escape_room=trace`.
    /// Overrides RUST_LOG.
    #[arg(long)]
    log: Option<String>,

    /// Play a command script without opening a window
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref())?;

    let settings = match cli.config.as_deref() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let game = Game::new(settings.game).context("room configuration is invalid")?;

    match cli.script {
        Some(path) => run_script(game, &path),
        None => {
            info!("starting windowed session");
            App::new(settings.window).run(game)?;
            Ok(())
        }
    }
}

fn run_script(game: Game, path: &std::path::Path) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let steps = script::parse(&text)?;

    let mut host = HeadlessHost::new(game)?;
    info!(steps = steps.len(), script = %path.display(), "starting headless session");
    script::run(&mut host, &steps);

    let frames = host.frame_count();
    let game = host.shutdown();
    let owned: Vec<&str> = Item::ALL
        .into_iter()
        .filter(|item| game.inventory().owns(*item))
        .map(Item::name)
        .collect();

    println!("frames:    {frames}");
    println!("view:      {}", game.active_view().map_or("none", |v| v.name()));
    println!("inventory: [{}]", owned.join(", "));
    println!("selected:  {}", game.inventory().selected().map_or("none", Item::name));
    println!("escaped:   {}", game.escaped());
    Ok(())
}
