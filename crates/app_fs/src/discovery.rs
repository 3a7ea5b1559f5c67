//! Image discovery - lists the renameable images of one directory

use crate::{FsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions (lower-case, without dot) that are picked up for renaming
pub const VALID_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// An image found in the source directory, split into stem and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// File name without its extension
    pub stem: String,
    /// Extension without the leading dot, in its original case
    pub extension: String,
}

impl ImageFile {
    pub fn new(stem: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            extension: extension.into(),
        }
    }

    /// "stem.extension"
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.extension)
    }

    /// Full path of this image inside `dir`
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Check if an extension (without dot) is one we rename; case-insensitive
pub fn is_valid_image_extension(extension: &str) -> bool {
    let lower = extension.to_lowercase();
    VALID_EXTENSIONS.contains(&lower.as_str())
}

/// Split a file name into an [`ImageFile`] if it carries a valid extension.
///
/// Only the last dot separates the extension, and leading dots do not
/// count (".png" and "..png" have no extension).
pub fn split_image_name(name: &str) -> Option<ImageFile> {
    let body = name.trim_start_matches('.');
    let (_, extension) = body.rsplit_once('.')?;
    if !is_valid_image_extension(extension) {
        return None;
    }
    let stem = &name[..name.len() - extension.len() - 1];
    Some(ImageFile::new(stem, extension))
}

/// List the images of `dir`, non-recursively, in directory listing order
pub fn list_images<P: AsRef<Path>>(dir: P) -> Result<Vec<ImageFile>> {
    let dir = dir.as_ref();

    if !dir.exists() {
        return Err(FsError::NotFound(dir.display().to_string()));
    }

    if !dir.is_dir() {
        return Err(FsError::InvalidPath(format!("Not a directory: {}", dir.display())));
    }

    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;

        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) => name,
            None => {
                tracing::debug!("Skipping non UTF-8 file name: {:?}", file_name);
                continue;
            }
        };

        let image = match split_image_name(name) {
            Some(image) => image,
            None => continue,
        };

        if entry.file_type()?.is_dir() {
            tracing::debug!("Skipping directory with image extension: {}", name);
            continue;
        }

        images.push(image);
    }

    tracing::debug!("Found {} images in {}", images.len(), dir.display());
    Ok(images)
}
