/// State management module
///
/// This module handles all session state:
/// - Shared data structures (data.rs)
/// - Folder scanning into a file list (library.rs)
/// - Paging through the file list (selection.rs)
/// - The restoration run state machine (run.rs)

pub mod data;
pub mod library;
pub mod run;
pub mod selection;
