//! Main rename form: prompt, name input, Skip button and the current image

use super::preview::ImagePreview;
use crate::input::InputHandler;
use app_core::{Command, CommandId, LoadedImage};
use egui::{Button, Context, Response, TextEdit, Ui};

pub const PROMPT: &str = "Enter a new name for the image";

/// Horizontal padding around the name input
const INPUT_PADDING: f32 = 50.0;

pub struct RenamePanel {
    preview: ImagePreview,
    /// Give the input keyboard focus on the next frame
    focus_pending: bool,
}

impl RenamePanel {
    pub fn new() -> Self {
        Self {
            preview: ImagePreview::new(),
            focus_pending: true,
        }
    }

    /// Show a new head image and move the focus back to the input
    pub fn set_image(&mut self, ctx: &Context, image: &LoadedImage) {
        self.preview.set_image(ctx, image);
        self.focus_pending = true;
    }

    /// Draw the form and collect the commands issued this frame.
    ///
    /// Shortcut keys are polled first so the input never sees them.
    pub fn ui(
        &mut self,
        ctx: &Context,
        input: &mut String,
        can_skip: bool,
        keys: &InputHandler,
    ) -> Vec<Command> {
        let mut commands = keys.poll(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(PROMPT);
                ui.add_space(10.0);

                // Tab must not move the focus away from the input
                let response = ui.add(
                    TextEdit::singleline(input)
                        .desired_width(ui.available_width() - 2.0 * INPUT_PADDING)
                        .lock_focus(true),
                );

                if self.focus_pending {
                    response.request_focus();
                    self.focus_pending = false;
                }

                ui.add_space(10.0);
                skip_button(ui, can_skip, &mut commands);
                ui.add_space(10.0);

                self.preview.ui(ui);
            });
        });

        commands
    }
}

/// Skip button, disabled while there is nothing to skip to
fn skip_button(ui: &mut Ui, can_skip: bool, commands: &mut Vec<Command>) -> Response {
    let response = ui.add_enabled(can_skip, Button::new("Skip"));
    if response.clicked() {
        commands.push(Command::new(CommandId::RENAME_SKIP));
    }
    response
}

impl Default for RenamePanel {
    fn default() -> Self {
        Self::new()
    }
}
