//! Application configuration
//!
//! Everything is decided at build time; nothing is read from disk.

use crate::command::default_keybindings;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Shown in every window title
pub const PROGRAM_NAME: &str = "Renamer";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory whose images are renamed
    pub source_directory: PathBuf,
    pub display: DisplayConfig,
    pub keybindings: HashMap<String, Vec<String>>,
}

impl AppConfig {
    /// Configuration for an explicit source directory
    pub fn new(source_directory: impl Into<PathBuf>) -> Self {
        Self {
            source_directory: source_directory.into(),
            display: DisplayConfig::default(),
            keybindings: default_keybindings(),
        }
    }

    /// Configuration for the source location selected by the `portable` feature
    pub fn from_build() -> anyhow::Result<Self> {
        let location = SourceLocation::from_build();
        let source_directory = location.resolve()?;
        tracing::info!("Source directory ({:?}): {}", location, source_directory.display());
        Ok(Self::new(source_directory))
    }
}

/// Where the images to rename are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLocation {
    /// The process working directory
    WorkingDirectory,
    /// The directory containing the running executable
    ExecutableDirectory,
}

impl SourceLocation {
    pub fn from_build() -> Self {
        if cfg!(feature = "portable") {
            SourceLocation::ExecutableDirectory
        } else {
            SourceLocation::WorkingDirectory
        }
    }

    pub fn resolve(self) -> anyhow::Result<PathBuf> {
        match self {
            SourceLocation::WorkingDirectory => Ok(std::env::current_dir()?),
            SourceLocation::ExecutableDirectory => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory: {}", exe.display()))
            }
        }
    }
}

/// Window and image display settings
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Height every image is scaled to; width follows the aspect ratio
    pub image_height: u32,
    pub interpolation: Interpolation,
    pub window_size: (u32, u32),
    pub notice_size: (u32, u32),
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            image_height: 420,
            interpolation: Interpolation::Lanczos3,
            window_size: (800, 560),
            notice_size: (400, 120),
            theme: "light".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Bilinear,
    Lanczos3,
}
