/// Modal dialogs (folder pickers and notices)
///
/// All of these block until the user answers.
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

pub trait Prompter {
    /// Ask for the folder to browse
    fn input_folder(&self) -> Option<PathBuf>;
    /// Ask where restored images should go
    fn output_folder(&self) -> Option<PathBuf>;
    /// Informational notice
    fn notice(&self, text: &str);
    /// Error notice
    fn error(&self, title: &str, text: &str);
}

/// Native OS dialogs via rfd
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Prompter for NativeDialogs {
    fn input_folder(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Folder with images to restore")
            .pick_folder()
    }

    fn output_folder(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Output folder: where do you want the restored images to be placed")
            .pick_folder()
    }

    fn notice(&self, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Face restoration")
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn error(&self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
