//! Image Renamer core domain logic
//!
//! This crate contains:
//! - Configuration
//! - Command ids and keybindings
//! - Error types
//! - The image queue and the rename workflow state machine
//! - Image loading and scaling for display

pub mod config;
pub mod command;
pub mod error;
pub mod queue;
pub mod workflow;
pub mod image_loader;

pub use config::{AppConfig, DisplayConfig, SourceLocation, Interpolation, PROGRAM_NAME};
pub use command::{Command, CommandId, default_keybindings};
pub use error::AppError;
pub use queue::ImageQueue;
pub use workflow::{RenameWorkflow, WorkflowState, Transition};
pub use image_loader::{LoadedImage, fit_size, load_scaled, scaled_width};
