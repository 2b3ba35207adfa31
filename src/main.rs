use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{FoodRange, GameConfig, GameEngine, KeyLayout};
use grid_snake::modes::PlayMode;
use grid_snake::store::{BestScoreStore, JsonFileStore, MemoryStore, ScoreStore};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a 30x30 grid, with a persistent best score")]
struct Cli {
    /// File the best score is kept in
    #[arg(long, default_value = "snake_best_score.json")]
    score_file: PathBuf,

    /// Keep the best score in memory only
    #[arg(long)]
    no_save: bool,

    /// Letter keys used for steering (arrow keys always work)
    #[arg(long, default_value = "wasd")]
    layout: Layout,

    /// Area new food is dropped into
    #[arg(long, default_value = "full")]
    food_range: FoodArea,

    /// Seed for food placement, for replaying the same game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Layout {
    /// w/a/s/d
    Wasd,
    /// z/q/s/d, for AZERTY keyboards
    Zqsd,
}

#[derive(Clone, ValueEnum)]
enum FoodArea {
    /// Anywhere on the board
    Full,
    /// Only the 20x20 top-left corner
    Legacy,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = GameConfig {
        key_layout: match cli.layout {
            Layout::Wasd => KeyLayout::Wasd,
            Layout::Zqsd => KeyLayout::Zqsd,
        },
        food_range: match cli.food_range {
            FoodArea::Full => FoodRange::FullBoard,
            FoodArea::Legacy => FoodRange::Legacy(FoodRange::LEGACY_SIZE),
        },
        ..Default::default()
    };

    let store: Box<dyn ScoreStore> = if cli.no_save {
        Box::new(BestScoreStore::new(MemoryStore::new()))
    } else {
        Box::new(BestScoreStore::new(JsonFileStore::new(&cli.score_file)))
    };

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, store, seed)?,
        None => GameEngine::new(config, store)?,
    };

    tracing::info!(
        best_score = engine.best_score(),
        score_file = ?cli.score_file,
        no_save = cli.no_save,
        "starting grid_snake"
    );

    let mut play = PlayMode::new(engine);
    play.run().await
}

fn init_logging(path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "grid_snake=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();

    Ok(())
}
