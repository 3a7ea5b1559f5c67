//! Notice shown when the folder has nothing to rename

use egui::Context;

pub const NO_IMAGES_MESSAGE: &str = "No images found in this folder";

/// Dismissible "no images" panel
pub struct EmptyFolderNotice {
    pub message: String,
    pub close_text: String,
}

impl EmptyFolderNotice {
    pub fn new() -> Self {
        Self {
            message: NO_IMAGES_MESSAGE.to_string(),
            close_text: "Close".to_string(),
        }
    }

    /// Returns true once the user dismissed the notice
    pub fn ui(&self, ctx: &Context) -> bool {
        let mut dismissed = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(&self.message);
                ui.add_space(10.0);
                if ui.button(&self.close_text).clicked() {
                    dismissed = true;
                }
            });
        });

        dismissed
    }
}

impl Default for EmptyFolderNotice {
    fn default() -> Self {
        Self::new()
    }
}
