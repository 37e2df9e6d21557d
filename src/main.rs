use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use wrap_snake::game::GameConfig;
use wrap_snake::logging;
use wrap_snake::modes::{GameOutcome, HumanMode};

#[derive(Parser)]
#[command(name = "wrap_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in world units (default 640)
    #[arg(long)]
    width: Option<u32>,

    /// Playfield height in world units (default 480)
    #[arg(long)]
    height: Option<u32>,

    /// Side of one grid cell in world units (default 20)
    #[arg(long)]
    block_size: Option<u32>,

    /// Game ticks per second (default 10)
    #[arg(long)]
    tps: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path).context("Failed to load config file")?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, logging::parse_level(&cli.log_level)?)?;
    }

    let config = cli.game_config()?;

    let mut human_mode = HumanMode::new(config, cli.seed)?;
    match human_mode.run().await? {
        GameOutcome::Over { score } => println!("Final Score {score}"),
        GameOutcome::Quit => {}
    }

    Ok(())
}
