//! Image queue - the images still waiting to be renamed
//!
//! The cursor is always the head: finished images are dropped from the
//! front rather than stepped over.

use app_fs::ImageFile;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQueue {
    images: VecDeque<ImageFile>,
}

impl ImageQueue {
    pub fn new(images: impl IntoIterator<Item = ImageFile>) -> Self {
        Self {
            images: images.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Current image
    pub fn head(&self) -> Option<&ImageFile> {
        self.images.front()
    }

    /// The head may only be dropped while another image follows it
    pub fn can_advance(&self) -> bool {
        self.images.len() > 1
    }

    /// Drop the head. Returns false (and keeps the head) on the last image.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.images.pop_front();
        true
    }

    /// Replace the head's stem, keeping its extension
    pub fn rename_head(&mut self, stem: &str) -> bool {
        match self.images.front_mut() {
            Some(head) => {
                head.stem = stem.to_string();
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageFile> {
        self.images.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(names: &[(&str, &str)]) -> ImageQueue {
        ImageQueue::new(names.iter().map(|(s, e)| ImageFile::new(*s, *e)))
    }

    #[test]
    fn test_advance() {
        let mut q = queue(&[("a", "jpg"), ("b", "png"), ("c", "jpeg")]);
        assert!(q.can_advance());
        assert!(q.advance());
        assert_eq!(q.head(), Some(&ImageFile::new("b", "png")));
        assert!(q.advance());
        assert_eq!(q.head(), Some(&ImageFile::new("c", "jpeg")));

        // Last image stays
        assert!(!q.can_advance());
        assert!(!q.advance());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_rename_head() {
        let mut q = queue(&[("cat", "JPG")]);
        assert!(q.rename_head("kitten"));
        assert_eq!(q.head(), Some(&ImageFile::new("kitten", "JPG")));

        let mut empty = ImageQueue::default();
        assert!(!empty.rename_head("x"));
        assert!(empty.is_empty());
    }
}
