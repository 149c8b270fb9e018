use anyhow::Result;
use clap::Parser;
use menucard::cli::{self, Cli};
use menucard::config::Config;
use menucard::logging::{self, LogBuffer};
use menucard::menu::MenuStore;
use menucard::{demo, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first (config --show, --reset, --path)
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    if cli.demo {
        config.demo_mode = true;
    }

    // Logs are captured to the buffer so they never garble the display.
    // The guard must live until exit so file logs flush.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config, &log_buffer);

    tracing::debug!("menucard {} starting", menucard::config::VERSION);

    let mut store = MenuStore::new();
    if config.demo_mode {
        tracing::info!("Running in DEMO MODE");
        demo::seed(&mut store);
    }

    // Blocks until the user quits
    if let Err(e) = tui::run_tui(&config, log_buffer, store).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
