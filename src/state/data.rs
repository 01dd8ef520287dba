/// Shared data structures for the browsing session and the restoration run
///
/// These structs represent the data model that flows between
/// the folder scanner, the browser screen and the run orchestrator.

use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Represents a single image in the scanned folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Filename only (e.g., "portrait_01.png")
    pub name: String,
    /// Full path to the image file
    pub path: PathBuf,
}

/// The browsable images of one folder, in directory-listing order.
///
/// Never empty: `FileList::new` refuses an empty entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    folder: PathBuf,
    entries: Vec<ImageEntry>,
}

impl FileList {
    pub fn new(folder: PathBuf, entries: Vec<ImageEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(AppError::EmptyFolder(folder));
        }
        Ok(Self { folder, entries })
    }

    /// Folder the entries were scanned from
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Position of the entry called `name`, if any
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Filenames in list order, for the file list widget
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }
}

/// What the user asked to restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreRequest {
    /// One image file
    SingleImage(PathBuf),
    /// Every image in a folder
    Folder(PathBuf),
}

impl RestoreRequest {
    /// Path handed to the inference routine as its input
    pub fn input(&self) -> &Path {
        match self {
            RestoreRequest::SingleImage(path) | RestoreRequest::Folder(path) => path,
        }
    }

    /// "Input type" label on the summary screen
    pub fn kind_label(&self) -> &'static str {
        match self {
            RestoreRequest::SingleImage(_) => "single image",
            RestoreRequest::Folder(_) => "folder",
        }
    }

    /// Noun used on the running screen
    pub fn noun(&self) -> &'static str {
        match self {
            RestoreRequest::SingleImage(_) => "image",
            RestoreRequest::Folder(_) => "images",
        }
    }
}

/// A restore request paired with its destination, ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub request: RestoreRequest,
    pub output_folder: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> ImageEntry {
        ImageEntry {
            name: name.to_string(),
            path: PathBuf::from("/photos").join(name),
        }
    }

    #[test]
    fn test_empty_file_list_is_rejected() {
        let result = FileList::new(PathBuf::from("/photos"), Vec::new());
        assert!(matches!(result, Err(AppError::EmptyFolder(_))));
    }

    #[test]
    fn test_position_by_name() {
        let list = FileList::new(PathBuf::from("/photos"), vec![entry("a.png"), entry("b.jpg")]).unwrap();

        assert_eq!(list.position("b.jpg"), Some(1));
        assert_eq!(list.position("c.bmp"), None);
        assert_eq!(list.names().collect::<Vec<_>>(), vec!["a.png", "b.jpg"]);
    }

    #[test]
    fn test_request_labels() {
        let single = RestoreRequest::SingleImage(PathBuf::from("/photos/a.png"));
        let folder = RestoreRequest::Folder(PathBuf::from("/photos"));

        assert_eq!(single.kind_label(), "single image");
        assert_eq!(single.noun(), "image");
        assert_eq!(folder.kind_label(), "folder");
        assert_eq!(folder.noun(), "images");
        assert_eq!(folder.input(), Path::new("/photos"));
    }
}
