//! Paging state for the image browser.

use super::data::{FileList, ImageEntry};

/// Navigation events understood by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    AdvanceNext,
    AdvancePrevious,
    SelectByName(String),
}

/// The current position within a `FileList`.
///
/// Paging wraps around in both directions, so the index is always valid.
#[derive(Debug, Clone)]
pub struct Selection {
    files: FileList,
    index: usize,
}

impl Selection {
    /// Starts at the first entry.
    pub fn new(files: FileList) -> Self {
        Self { files, index: 0 }
    }

    /// Applies a navigation event. Returns `true` when the current entry changed.
    pub fn apply(&mut self, navigation: &Navigation) -> bool {
        let len = self.files.len();
        let new_index = match navigation {
            Navigation::AdvanceNext => (self.index + 1) % len,
            Navigation::AdvancePrevious => (self.index + len - 1) % len,
            Navigation::SelectByName(name) => match self.files.position(name) {
                Some(index) => index,
                None => {
                    log::warn!("Ignoring selection of unknown file {:?}", name);
                    return false;
                }
            },
        };

        let changed = new_index != self.index;
        self.index = new_index;
        changed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &ImageEntry {
        // index < len is maintained by `apply` and FileList is never empty
        &self.files.entries()[self.index]
    }

    pub fn files(&self) -> &FileList {
        &self.files
    }

    /// "File i of N", 1-based.
    pub fn position_text(&self) -> String {
        format!("File {} of {}", self.index + 1, self.files.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn selection(names: &[&str]) -> Selection {
        let entries = names
            .iter()
            .map(|name| ImageEntry {
                name: name.to_string(),
                path: PathBuf::from("/photos").join(name),
            })
            .collect();
        Selection::new(FileList::new(PathBuf::from("/photos"), entries).unwrap())
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut sel = selection(&["a.png", "b.png", "c.png"]);
        sel.apply(&Navigation::AdvanceNext);
        sel.apply(&Navigation::AdvanceNext);
        assert_eq!(sel.index(), 2);

        sel.apply(&Navigation::AdvanceNext);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut sel = selection(&["a.png", "b.png", "c.png"]);
        sel.apply(&Navigation::AdvancePrevious);
        assert_eq!(sel.index(), 2);
        assert_eq!(sel.current().name, "c.png");
    }

    #[test]
    fn test_mixed_walk_stays_in_range() {
        let mut sel = selection(&["a.png", "b.png", "c.png", "d.png"]);
        // Deterministic pseudo-random walk
        let mut seed: u32 = 12345;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let nav = if seed & 0x100 == 0 {
                Navigation::AdvanceNext
            } else {
                Navigation::AdvancePrevious
            };
            sel.apply(&nav);
            assert!(sel.index() < 4);
        }
    }

    #[test]
    fn test_single_entry_never_changes() {
        let mut sel = selection(&["only.png"]);
        assert!(!sel.apply(&Navigation::AdvanceNext));
        assert!(!sel.apply(&Navigation::AdvancePrevious));
        assert_eq!(sel.position_text(), "File 1 of 1");
    }

    #[test]
    fn test_select_by_name() {
        let mut sel = selection(&["a.png", "b.png", "c.png"]);
        assert!(sel.apply(&Navigation::SelectByName("c.png".to_string())));
        assert_eq!(sel.current().name, "c.png");

        // Paging continues from the selected entry
        sel.apply(&Navigation::AdvanceNext);
        assert_eq!(sel.current().name, "a.png");
    }

    #[test]
    fn test_select_unknown_name_is_noop() {
        let mut sel = selection(&["a.png", "b.png"]);
        sel.apply(&Navigation::AdvanceNext);

        assert!(!sel.apply(&Navigation::SelectByName("zzz.png".to_string())));
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn test_paging_scenario_position_text() {
        let mut sel = selection(&["img1.png", "img2.jpg"]);
        assert_eq!(sel.current().name, "img1.png");
        assert_eq!(sel.position_text(), "File 1 of 2");

        sel.apply(&Navigation::AdvanceNext);
        assert_eq!(sel.current().name, "img2.jpg");
        assert_eq!(sel.position_text(), "File 2 of 2");

        sel.apply(&Navigation::AdvanceNext);
        assert_eq!(sel.current().name, "img1.png");
        assert_eq!(sel.position_text(), "File 1 of 2");
    }
}
