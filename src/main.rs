use anyhow::Context;
use clap::Parser;
use std::sync::Arc;

use leaf::cli::Cli;
use leaf::logging::init_tracing;
use leaf::notes::{FileNoteStore, SharedStore};
use leaf::shutdown::{spawn_signal_listener, ShutdownCoordinator};
use leaf::ui::runtime;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let log_path = config.log_file_path();
    init_tracing(&config.logging, &log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let notes_dir = config.notes_dir();
    let store = FileNoteStore::open(&notes_dir)
        .with_context(|| format!("failed to open notes directory '{}'", notes_dir.display()))?;
    tracing::info!(notes_dir = %notes_dir.display(), "starting leaf");
    let store: SharedStore = Arc::new(store);

    let shutdown = ShutdownCoordinator::new();
    let signals = spawn_signal_listener(shutdown.handle());

    let result = runtime::run(&config, store, shutdown.handle()).await;
    shutdown.signal();
    let _ = signals.await;

    result.context("terminal error")?;
    tracing::info!("leaf exited");
    Ok(())
}
