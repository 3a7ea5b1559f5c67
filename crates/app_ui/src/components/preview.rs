//! Image preview component

use app_core::LoadedImage;
use egui::{ColorImage, Context, TextureHandle, TextureOptions, Ui, Vec2};

/// Shows the current image at its pre-scaled size
#[derive(Default)]
pub struct ImagePreview {
    texture: Option<TextureHandle>,
}

impl ImagePreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed image; the previous texture is freed on drop
    pub fn set_image(&mut self, ctx: &Context, image: &LoadedImage) {
        let color_image = ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.data,
        );

        let name = image.path.display().to_string();
        self.texture = Some(ctx.load_texture(name, color_image, TextureOptions::LINEAR));
    }

    pub fn ui(&self, ui: &mut Ui) {
        match &self.texture {
            Some(texture) => {
                // The image was scaled in pixels; undo the display scale factor
                let size = texture.size_vec2() / ui.ctx().pixels_per_point();
                ui.image((texture.id(), size));
            }
            None => {
                ui.allocate_space(Vec2::new(ui.available_width(), 0.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_core::fit_size;
    use std::path::PathBuf;

    #[test]
    fn test_panorama_fits_texture_limit() {
        let ctx = Context::default();
        let max_side = ctx.input(|i| i.max_texture_side) as u32;
        let (width, height) = fit_size(16000, 1600, 420, max_side);

        let image = LoadedImage {
            path: PathBuf::from("pano.jpg"),
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        };

        let mut preview = ImagePreview::new();
        preview.set_image(&ctx, &image);

        let texture = preview.texture.as_ref().unwrap();
        assert_eq!(texture.size(), [width as usize, height as usize]);
        assert!(width as usize <= ctx.input(|i| i.max_texture_side));
    }
}
