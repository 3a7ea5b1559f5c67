//! Image loading and scaling for display

use crate::config::Interpolation;
use crate::AppError;
use image::imageops::FilterType;
use image::{GenericImageView, ImageReader};
use std::path::{Path, PathBuf};

/// Decoded image, scaled and converted to RGBA8
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl From<Interpolation> for FilterType {
    fn from(interpolation: Interpolation) -> Self {
        match interpolation {
            Interpolation::Nearest => FilterType::Nearest,
            Interpolation::Bilinear => FilterType::Triangle,
            Interpolation::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Width that keeps the aspect ratio at `target_height` (truncated, at least 1)
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> u32 {
    if height == 0 {
        return 1;
    }
    let scaled = (width as u64 * target_height as u64) / height as u64;
    scaled.clamp(1, u32::MAX as u64) as u32
}

/// Display size for a `width`x`height` image: `target_height` tall with the
/// aspect ratio kept, shrunk further when a side would exceed `max_side`.
pub fn fit_size(width: u32, height: u32, target_height: u32, max_side: u32) -> (u32, u32) {
    let max_side = max_side.max(1);
    let target_height = target_height.clamp(1, max_side);
    let target_width = scaled_width(width, height, target_height);
    if target_width <= max_side {
        return (target_width, target_height);
    }

    // target_width > max_side implies width > 0
    let capped = (height as u64 * max_side as u64) / width as u64;
    (max_side, capped.clamp(1, target_height as u64) as u32)
}

/// Load an image and scale it to a fixed height, keeping both sides within `max_side`
pub fn load_scaled(
    path: &Path,
    height: u32,
    max_side: u32,
    interpolation: Interpolation,
) -> Result<LoadedImage, AppError> {
    tracing::debug!("Loading image: {}", path.display());

    let img = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| AppError::image_decode(path, e))?;

    let (w, h) = img.dimensions();
    let (target_width, target_height) = fit_size(w, h, height, max_side);

    let img = img.resize_exact(target_width, target_height, interpolation.into());

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        path: path.to_path_buf(),
        width,
        height,
        data: rgba.into_raw(),
    })
}
