use clap::Parser;
use dwellboard::core::config::{self, CliOverrides, DwellboardConfig};
use dwellboard::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "dwellboard", about = "Dwell-time phrase board and slider keyboard")]
struct Args {
    /// Hold time in milliseconds to sweep the whole menu
    #[arg(long)]
    target_ms: Option<u64>,

    /// Space toggles press/release (for terminals without key-release events)
    #[arg(long)]
    latch: bool,

    /// Fetch the suggestion word list at startup
    #[arg(long)]
    words: bool,

    /// Ignore ~/.dwellboard/config.toml
    #[arg(long)]
    no_config: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to dwellboard.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("dwellboard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = if args.no_config {
        DwellboardConfig::default()
    } else {
        // A broken config file shouldn't lock the user out of the board.
        config::load_config().unwrap_or_else(|e| {
            eprintln!("dwellboard: {e}; using defaults");
            log::warn!("Falling back to default config: {}", e);
            DwellboardConfig::default()
        })
    };

    let cli = CliOverrides {
        target_ms: args.target_ms,
        latch: args.latch,
        words: args.words,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Dwellboard starting up: target={:?}, tick={:?}, {} categories",
        resolved.target_duration,
        resolved.tick_interval,
        resolved.categories.len()
    );

    tui::run(resolved)
}
