use anyhow::{Context, Result};
use feedback_fab::config::Config;
use feedback_fab::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load().context("Failed to load configuration")?;
    logger::init(&config.logging)?;
    log::info!("Starting feedback-fab");

    // Run the TUI application
    ui::run_app(&config).await?;

    log::info!("feedback-fab exited");
    Ok(())
}
