//! Rename workflow - the state machine behind the rename form
//!
//! `Empty` is terminal: the UI shows the "no images" notice and exits.
//! In `Editing` the head of the queue is displayed and the transitions
//! below are driven by the Skip button and the keyboard shortcuts.

use crate::command::{Command, CommandId};
use crate::config::PROGRAM_NAME;
use crate::error::AppError;
use crate::queue::ImageQueue;
use app_fs::{DefaultFileOperations, FileOperations, ImageFile};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Empty,
    Editing,
}

/// What a transition changed, so the UI knows what to refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// Only the input text changed
    InputChanged,
    /// A new head: reload the image and the title
    Advanced,
    /// The last image was renamed in place: refresh the title
    Retitled,
}

impl Transition {
    pub fn head_changed(self) -> bool {
        matches!(self, Transition::Advanced)
    }

    pub fn title_changed(self) -> bool {
        matches!(self, Transition::Advanced | Transition::Retitled)
    }
}

pub struct RenameWorkflow<F: FileOperations = DefaultFileOperations> {
    source_dir: PathBuf,
    queue: ImageQueue,
    input: String,
    ops: F,
}

impl<F: FileOperations> RenameWorkflow<F> {
    pub fn new(source_dir: impl Into<PathBuf>, images: Vec<ImageFile>, ops: F) -> Self {
        Self {
            source_dir: source_dir.into(),
            queue: ImageQueue::new(images),
            input: String::new(),
            ops,
        }
    }

    pub fn state(&self) -> WorkflowState {
        if self.queue.is_empty() {
            WorkflowState::Empty
        } else {
            WorkflowState::Editing
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn queue(&self) -> &ImageQueue {
        &self.queue
    }

    pub fn head(&self) -> Option<&ImageFile> {
        self.queue.head()
    }

    /// Path of the image on screen
    pub fn head_path(&self) -> Option<PathBuf> {
        self.head().map(|image| image.path_in(&self.source_dir))
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text field binding
    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Enables the Skip button; skipping the last image is not allowed
    pub fn can_skip(&self) -> bool {
        self.queue.can_advance()
    }

    pub fn window_title(&self) -> String {
        match self.head() {
            Some(image) => format!("{} - {}", PROGRAM_NAME, image.file_name()),
            None => PROGRAM_NAME.to_string(),
        }
    }

    /// Drop the head and move on to the next image
    pub fn skip(&mut self) -> Transition {
        if !self.queue.advance() {
            return Transition::Unchanged;
        }
        self.input.clear();
        tracing::debug!(remaining = self.queue.len(), "Skipped to {}", self.window_title());
        Transition::Advanced
    }

    /// Rename the head's file to the input text (extension kept), then move on.
    ///
    /// The last image is renamed in place and stays on screen.
    pub fn confirm(&mut self) -> Result<Transition, AppError> {
        if self.input.is_empty() {
            return Ok(Transition::Unchanged);
        }

        let head = match self.queue.head() {
            Some(head) => head.clone(),
            None => return Ok(Transition::Unchanged),
        };

        let renamed = ImageFile::new(self.input.as_str(), head.extension.as_str());
        if !is_plain_file_name(&renamed.file_name()) {
            return Err(AppError::InvalidName(renamed.file_name()));
        }

        if renamed.file_name() != head.file_name() {
            let from = head.path_in(&self.source_dir);
            let to = renamed.path_in(&self.source_dir);
            self.ops.rename(&from, &to)?;
        } else {
            tracing::debug!("Name unchanged, nothing to rename: {}", head.file_name());
        }

        if self.queue.can_advance() {
            return Ok(self.skip());
        }

        self.queue.rename_head(&renamed.stem);
        Ok(Transition::Retitled)
    }

    /// Put the head's current stem into the input
    pub fn recall_original(&mut self) -> Transition {
        let stem = match self.queue.head() {
            Some(head) => head.stem.clone(),
            None => return Transition::Unchanged,
        };
        self.input = stem;
        Transition::InputChanged
    }

    pub fn clear_input(&mut self) -> Transition {
        if self.state() == WorkflowState::Empty {
            return Transition::Unchanged;
        }
        self.input.clear();
        Transition::InputChanged
    }

    /// Dispatch a command to its transition
    pub fn execute(&mut self, cmd: &Command) -> Result<Transition, AppError> {
        let transition = match cmd.id.as_str() {
            CommandId::RENAME_CONFIRM => self.confirm()?,
            CommandId::RENAME_SKIP => self.skip(),
            CommandId::INPUT_RECALL_ORIGINAL => self.recall_original(),
            CommandId::INPUT_CLEAR => self.clear_input(),
            other => {
                tracing::warn!("Unknown command: {}", other);
                Transition::Unchanged
            }
        };
        Ok(transition)
    }
}

/// A single path component, so the file stays in the source directory
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => part == name,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_fs::FileOpError;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Records renames instead of touching the disk
    #[derive(Default)]
    struct RecordingOps {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
    }

    impl FileOperations for RecordingOps {
        fn rename(&self, from: &Path, to: &Path) -> Result<(), FileOpError> {
            self.calls.borrow_mut().push((from.to_path_buf(), to.to_path_buf()));
            Ok(())
        }
    }

    fn images(names: &[(&str, &str)]) -> Vec<ImageFile> {
        names.iter().map(|(s, e)| ImageFile::new(*s, *e)).collect()
    }

    fn recording(names: &[(&str, &str)]) -> RenameWorkflow<RecordingOps> {
        RenameWorkflow::new("pics", images(names), RecordingOps::default())
    }

    fn remaining<F: FileOperations>(wf: &RenameWorkflow<F>) -> Vec<ImageFile> {
        wf.queue().iter().cloned().collect()
    }

    #[test]
    fn test_empty_state() {
        let mut wf = recording(&[]);
        assert_eq!(wf.state(), WorkflowState::Empty);
        assert_eq!(wf.window_title(), "Renamer");
        assert!(!wf.can_skip());
        assert_eq!(wf.skip(), Transition::Unchanged);
        assert_eq!(wf.recall_original(), Transition::Unchanged);
        assert_eq!(wf.clear_input(), Transition::Unchanged);

        wf.input_mut().push_str("x");
        assert_eq!(wf.confirm().unwrap(), Transition::Unchanged);
        assert!(wf.ops.calls.borrow().is_empty());
    }

    #[test]
    fn test_skip_single_image_is_noop() {
        let mut wf = recording(&[("only", "png")]);
        wf.input_mut().push_str("draft");

        assert!(!wf.can_skip());
        assert_eq!(wf.skip(), Transition::Unchanged);
        assert_eq!(remaining(&wf), images(&[("only", "png")]));
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert_eq!(wf.input(), "draft");
    }

    #[test]
    fn test_skip_advances_to_second() {
        let mut wf = recording(&[("a", "jpg"), ("b", "png"), ("c", "jpeg")]);
        wf.input_mut().push_str("draft");

        assert_eq!(wf.skip(), Transition::Advanced);
        assert_eq!(wf.head(), Some(&ImageFile::new("b", "png")));
        assert_eq!(wf.queue().len(), 2);
        assert_eq!(wf.input(), "");
        assert_eq!(wf.window_title(), "Renamer - b.png");
    }

    #[test]
    fn test_confirm_empty_input_is_noop() {
        let mut wf = recording(&[("a", "jpg"), ("b", "png")]);

        assert_eq!(wf.confirm().unwrap(), Transition::Unchanged);
        assert!(wf.ops.calls.borrow().is_empty());
        assert_eq!(wf.queue().len(), 2);
    }

    #[test]
    fn test_confirm_same_name_advances_without_rename() {
        let mut wf = recording(&[("a", "jpg"), ("b", "png")]);
        wf.input_mut().push_str("a");

        assert_eq!(wf.confirm().unwrap(), Transition::Advanced);
        assert!(wf.ops.calls.borrow().is_empty());
        assert_eq!(remaining(&wf), images(&[("b", "png")]));
    }

    #[test]
    fn test_confirm_keeps_extension_case() {
        let mut wf = recording(&[("IMG_0001", "JPG"), ("b", "png")]);
        wf.input_mut().push_str("beach");

        wf.confirm().unwrap();
        assert_eq!(
            wf.ops.calls.borrow().as_slice(),
            &[(PathBuf::from("pics").join("IMG_0001.JPG"), PathBuf::from("pics").join("beach.JPG"))]
        );
    }

    #[test]
    fn test_confirm_last_image_renames_in_place() {
        let mut wf = recording(&[("cat", "jpg")]);
        wf.input_mut().push_str("kitten");

        assert_eq!(wf.confirm().unwrap(), Transition::Retitled);
        assert_eq!(remaining(&wf), images(&[("kitten", "jpg")]));
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert_eq!(wf.window_title(), "Renamer - kitten.jpg");
        assert_eq!(wf.input(), "kitten");

        // A second confirm with the same text has nothing left to rename
        assert_eq!(wf.confirm().unwrap(), Transition::Retitled);
        assert_eq!(wf.ops.calls.borrow().len(), 1);
    }

    #[test]
    fn test_confirm_refuses_names_outside_the_folder() {
        for input in ["../escape", "sub/dir", "/tmp/abs"] {
            let mut wf = recording(&[("a", "jpg"), ("b", "png")]);
            wf.input_mut().push_str(input);

            assert!(matches!(wf.confirm(), Err(AppError::InvalidName(_))), "{}", input);
            assert!(wf.ops.calls.borrow().is_empty());
            assert_eq!(wf.queue().len(), 2);
        }
    }

    #[test]
    fn test_plain_file_name() {
        assert!(is_plain_file_name("cat.jpg"));
        assert!(is_plain_file_name("..jpg"));
        assert!(!is_plain_file_name("../cat.jpg"));
        assert!(!is_plain_file_name("a/cat.jpg"));
        assert!(!is_plain_file_name("/cat.jpg"));
    }

    #[test]
    fn test_recall_and_clear() {
        let mut wf = recording(&[("holiday", "png")]);

        assert_eq!(wf.recall_original(), Transition::InputChanged);
        assert_eq!(wf.input(), "holiday");

        assert_eq!(wf.clear_input(), Transition::InputChanged);
        assert_eq!(wf.input(), "");
    }

    #[test]
    fn test_execute_dispatches_commands() {
        let mut wf = recording(&[("a", "jpg"), ("b", "png")]);

        let t = wf.execute(&Command::new(CommandId::INPUT_RECALL_ORIGINAL)).unwrap();
        assert_eq!(t, Transition::InputChanged);
        assert_eq!(wf.input(), "a");

        let t = wf.execute(&Command::new(CommandId::RENAME_SKIP)).unwrap();
        assert!(t.head_changed());

        let t = wf.execute(&Command::new("app.unknown")).unwrap();
        assert_eq!(t, Transition::Unchanged);
    }

    #[test]
    fn test_end_to_end_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("cat.jpg"), b"cat").unwrap();
        fs::write(temp_dir.path().join("dog.png"), b"dog").unwrap();

        let mut wf = RenameWorkflow::new(
            temp_dir.path(),
            images(&[("cat", "jpg"), ("dog", "png")]),
            DefaultFileOperations::new(),
        );
        wf.input_mut().push_str("kitten");

        let t = wf.execute(&Command::new(CommandId::RENAME_CONFIRM)).unwrap();
        assert_eq!(t, Transition::Advanced);
        assert!(!temp_dir.path().join("cat.jpg").exists());
        assert_eq!(fs::read(temp_dir.path().join("kitten.jpg")).unwrap(), b"cat");
        assert_eq!(remaining(&wf), images(&[("dog", "png")]));
        assert!(!wf.can_skip());
        assert_eq!(wf.head_path(), Some(temp_dir.path().join("dog.png")));
    }

    #[test]
    fn test_rename_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("cat.jpg"), b"cat").unwrap();
        fs::write(temp_dir.path().join("dog.jpg"), b"dog").unwrap();

        let mut wf = RenameWorkflow::new(
            temp_dir.path(),
            images(&[("cat", "jpg"), ("dog", "jpg")]),
            DefaultFileOperations::new(),
        );
        wf.input_mut().push_str("dog");

        let err = wf.confirm().unwrap_err();
        assert!(matches!(err, AppError::Rename(FileOpError::AlreadyExists(_))));
        // Nothing moved on
        assert_eq!(wf.head(), Some(&ImageFile::new("cat", "jpg")));
    }
}
