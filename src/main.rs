use anyhow::Context;
use env_logger::{Builder, WriteStyle};
use hevn::config::AppConfig;
use log::error;
use std::error::Error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration first (without logging)
    let config = AppConfig::new().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {:#}", e);
        AppConfig::default()
    });

    // Logs go to stderr so stdout only carries readings
    Builder::new()
        .filter_level(config.get_log_level())
        .write_style(WriteStyle::Auto)
        .format_timestamp_secs()
        .init();

    if let Err(e) = hevn::run(&config.collectors.file).await {
        error!("Application error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            error!("Caused by: {}", cause);
            source = cause.source();
        }
        return Err(e).context("Polling run failed");
    }
    Ok(())
}
