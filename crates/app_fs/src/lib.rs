//! Image Renamer file system layer
//!
//! Provides:
//! - Discovery of renameable images in a single directory
//! - The rename file operation

mod discovery;
mod file_operations;

pub use discovery::{ImageFile, VALID_EXTENSIONS, list_images, is_valid_image_extension, split_image_name};
pub use file_operations::{FileOperations, DefaultFileOperations, FileOpError};

use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, FsError>;
