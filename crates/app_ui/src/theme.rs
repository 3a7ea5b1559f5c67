//! Application theming

use egui::{Color32, Visuals};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub primary: Color32,
    pub text: Color32,
    pub accent: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(32, 32, 32),
            surface: Color32::from_rgb(48, 48, 48),
            primary: Color32::from_rgb(64, 64, 64),
            text: Color32::from_rgb(240, 240, 240),
            accent: Color32::from_rgb(100, 149, 237), // Cornflower blue
        }
    }

    /// Light theme (default)
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(255, 255, 255),
            surface: Color32::from_rgb(240, 240, 240),
            primary: Color32::from_rgb(225, 225, 225),
            text: Color32::from_rgb(32, 32, 32),
            accent: Color32::from_rgb(59, 130, 246), // Blue
        }
    }

    /// Apply theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = if self.name == "dark" {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.surface;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.primary;

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke.color = self.text;

        visuals.widgets.inactive.bg_fill = self.primary;
        visuals.widgets.inactive.weak_bg_fill = self.primary;
        visuals.widgets.inactive.fg_stroke.color = self.text;

        visuals.widgets.hovered.bg_fill = self.accent.linear_multiply(0.3);
        visuals.widgets.hovered.fg_stroke.color = self.text;

        visuals.widgets.active.bg_fill = self.accent.linear_multiply(0.5);
        visuals.widgets.active.fg_stroke.color = self.text;

        visuals.selection.bg_fill = self.accent.linear_multiply(0.3);
        visuals.selection.stroke.color = self.accent;

        style.visuals = visuals;
        ctx.set_style(style);
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dark" => Self::dark(),
            _ => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
