/// Error types for the restoration front-end
///
/// Anything that reaches `main` as an `AppError` terminates the program.
/// Users backing out of a dialog is not an error and never shows up here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The scanned folder contains no supported image files
    #[error("no supported images found in {}", .0.display())]
    EmptyFolder(PathBuf),

    /// An image could not be opened or decoded for preview
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    /// The external restoration routine failed
    #[error("restoration failed: {0}")]
    Inference(String),

    /// The configuration file exists but could not be used
    #[error("invalid configuration at {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The GUI toolkit failed to start or crashed
    #[error("gui error: {0}")]
    Gui(String),
}

impl From<iced::Error> for AppError {
    fn from(err: iced::Error) -> Self {
        AppError::Gui(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = AppError::EmptyFolder(PathBuf::from("/photos"));
        assert_eq!(err.to_string(), "no supported images found in /photos");

        let err = AppError::Decode {
            path: PathBuf::from("/photos/a.png"),
            reason: "truncated".to_string(),
        };
        assert!(err.to_string().contains("/photos/a.png"));
        assert!(err.to_string().contains("truncated"));
    }
}
