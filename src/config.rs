/// User configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/face-restore-gui/config.json
/// - macOS: ~/Library/Application Support/face-restore-gui/config.json
/// - Windows: %APPDATA%\face-restore-gui\config.json
///
/// `GFPGAN_GUI_CONFIG` points at a different file. A missing file means
/// defaults; a present but malformed file is an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "GFPGAN_GUI_CONFIG";

/// Largest preview the browser will show
pub const DEFAULT_PREVIEW_SIZE: (u32, u32) = (1200, 850);

/// Filename suffixes the folder scanner accepts (matched case-insensitively)
pub const DEFAULT_EXTENSIONS: [&str; 5] = [".png", ".jpg", ".jpeg", ".tiff", ".bmp"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub preview_max_width: u32,
    pub preview_max_height: u32,
    pub extensions: Vec<String>,
    pub restore: RestoreCommand,
}

/// How to launch the external GFPGAN inference routine.
///
/// `{input}` and `{output}` in `args` are replaced with the chosen paths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RestoreCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_max_width: DEFAULT_PREVIEW_SIZE.0,
            preview_max_height: DEFAULT_PREVIEW_SIZE.1,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            restore: RestoreCommand::default(),
        }
    }
}

impl Default for RestoreCommand {
    fn default() -> Self {
        let args = ["inference_gfpgan.py", "-i", "{input}", "-o", "{output}", "-v", "1.3", "-s", "2"];
        Self {
            program: "python".to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            working_dir: None,
        }
    }
}

impl Config {
    /// Load the config from the default location (or `GFPGAN_GUI_CONFIG`)
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(AppError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            }
        };

        let config: Config = serde_json::from_str(&contents).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.validate(path)?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the path where the config file is expected
    fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        let mut path = dirs::config_dir()?;
        path.push("face-restore-gui");
        path.push("config.json");
        Some(path)
    }

    /// Maximum preview size as (width, height)
    pub fn preview_size(&self) -> (u32, u32) {
        (self.preview_max_width, self.preview_max_height)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let reason = if self.preview_max_width == 0 || self.preview_max_height == 0 {
            "preview size must be positive"
        } else if self.extensions.is_empty() {
            "at least one extension is required"
        } else if self.restore.program.trim().is_empty() {
            "restore.program must not be empty"
        } else {
            return Ok(());
        };

        Err(AppError::Config {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        })
    }
}
