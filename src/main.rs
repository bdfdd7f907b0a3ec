// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod data;
mod file;
mod state;
mod ui;
mod utils;

use app::DashboardApp;

fn main() -> Result<()> {
    let config = crate::config::load_app_config()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    info!(?config, "configuration loaded");

    let store = file::open_preference_store(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([960.0, 640.0])
            .with_title(config.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(&cc.egui_ctx, store))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
