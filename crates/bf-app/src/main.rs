//! Main application entry point

use anyhow::{Context as _, Result};
use bf_data::{AppConfig, ContentStore};
use tracing::info;

mod app;
mod router;

use app::BioForgeApp;

/// Sample content used when the configuration names no document
const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

fn load_content(config: &AppConfig) -> Result<ContentStore> {
    match &config.content_path {
        Some(path) => ContentStore::load(path)
            .with_context(|| format!("Failed to load content from {}", path.display())),
        None => ContentStore::from_json(BUNDLED_CONTENT).context("Bundled content is invalid"),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config_path = AppConfig::config_path();
    let config = AppConfig::load_or_default(&config_path);
    info!(config = %config_path.display(), "Starting BioForge");

    let store = load_content(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: if config.dark_mode {
            eframe::Theme::Dark
        } else {
            eframe::Theme::Light
        },
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "BioForge",
        options,
        Box::new(move |cc| Box::new(BioForgeApp::new(cc, config, store))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
