//! UI Components

pub mod rename_panel;
pub mod notice;
pub mod preview;

pub use rename_panel::RenamePanel;
pub use notice::EmptyFolderNotice;
pub use preview::ImagePreview;
