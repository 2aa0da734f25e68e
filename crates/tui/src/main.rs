mod app;

use anyhow::Result;
use std::fs::{self, OpenOptions};

use tracing_subscriber::{prelude::*, EnvFilter};
use yachtscore_core::{
    config::{self, AppConfig},
    Scoreboard, SnapshotExporter,
};

fn main() -> Result<()> {
    config::ensure_default_config()?;
    let config = AppConfig::load()?;

    init_logging(&config.log_filter)?;

    let board = Scoreboard::new();
    let exporter = SnapshotExporter::new(config.export_dir.clone());

    let mut app = app::YachtscoreApp::new(board, exporter);
    app.run()
}

fn init_logging(default_filter: &str) -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("yachtscore.log");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter.to_string()));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_writer(move || {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .expect("failed to open log file")
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
