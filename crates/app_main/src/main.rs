//! Renamer - walk through the images of a folder and rename them one by one
//!
//! Main entry point.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Result;
use app_core::{AppConfig, RenameWorkflow};
use app_fs::DefaultFileOperations;

fn main() -> Result<()> {
    // Initialize logging and panic hook first
    app_log::init()?;

    if let Err(e) = app_log::cleanup_old_logs(7) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    tracing::info!("Renamer starting...");

    let config = AppConfig::from_build()?;
    let images = app_fs::list_images(&config.source_directory)?;
    tracing::info!("{} images to rename", images.len());

    let workflow = RenameWorkflow::new(
        config.source_directory.clone(),
        images,
        DefaultFileOperations::new(),
    );

    let result = app::run(config, workflow);
    match &result {
        Ok(()) => tracing::info!("Renamer exiting"),
        Err(e) => tracing::error!("Renamer stopped: {:#}", e),
    }
    result
}
