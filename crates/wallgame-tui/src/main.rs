//! Wall game TUI entry point.

use std::{path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wallgame_app::{App, DEFAULT_BOARD_SIZE, RoomConfig, Runtime};
use wallgame_client::{ReconnectConfig, socket_url};
use wallgame_tui::TerminalDriver;

/// Wall game terminal room client
#[derive(Parser, Debug)]
#[command(name = "wallgame-tui")]
#[command(about = "Play a wall game room from the terminal")]
#[command(version)]
struct Args {
    /// Room page URL (http, https, ws or wss)
    url: String,

    /// Board size the room was created with
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file. The terminal belongs to the UI, so nothing is
    /// logged without it.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Delay before the first reconnect attempt, in milliseconds
    #[arg(long, default_value_t = 250)]
    reconnect_initial_ms: u64,

    /// Upper bound on the reconnect delay, in milliseconds
    #[arg(long, default_value_t = 10_000)]
    reconnect_max_ms: u64,
}

fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let config = RoomConfig::with_size(args.size)?;
    let url = socket_url(&args.url)?;
    let reconnect = ReconnectConfig {
        initial_delay: Duration::from_millis(args.reconnect_initial_ms),
        max_delay: Duration::from_millis(args.reconnect_max_ms),
        ..ReconnectConfig::default()
    };

    tracing::info!(%url, size = config.size(), "entering room");

    let app = App::new(url.as_str(), &config);
    let driver = TerminalDriver::new(reconnect)?;
    let mut runtime = Runtime::new(driver, app);
    let result = runtime.run().await;

    let fatal = runtime.app().fatal_error().map(str::to_string);
    // Restore the terminal before anything is reported
    drop(runtime);

    result?;
    match fatal {
        Some(message) => Err(message.into()),
        None => Ok(()),
    }
}
