//! Image Renamer UI layer
//!
//! Provides:
//! - egui panels (rename form, empty-folder notice)
//! - wgpu rendering of the egui output
//! - Keyboard shortcut resolution

pub mod renderer;
pub mod components;
pub mod input;
pub mod theme;

pub use renderer::Renderer;
pub use input::InputHandler;
pub use theme::Theme;
