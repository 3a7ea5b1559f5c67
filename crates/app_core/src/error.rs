//! Application error types
//!
//! Every variant is fatal: the rename loop stops and the error reaches `main`.
//! An empty folder is a workflow state, not an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read image folder: {0}")]
    Discovery(#[from] app_fs::FsError),

    #[error("Rename failed: {0}")]
    Rename(#[from] app_fs::FileOpError),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("Image decode error in {}: {}", .path.display(), .message)]
    ImageDecode { path: PathBuf, message: String },
}

impl AppError {
    pub fn image_decode(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        AppError::ImageDecode {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
