use std::sync::Arc;

mod app;
mod config;
mod error;
mod imaging;
mod restore;
mod state;
mod ui;

use config::Config;
use error::AppError;
use restore::CommandRestorer;
use state::library;
use state::selection::Selection;
use ui::dialogs::{NativeDialogs, Prompter};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let dialogs = NativeDialogs;

    // Get the folder containing the images from the user
    let Some(input_folder) = dialogs.input_folder() else {
        dialogs.notice("You need to select a folder.");
        return Ok(());
    };

    let files = match library::scan(&input_folder, &config.extensions) {
        Ok(files) => files,
        Err(AppError::EmptyFolder(folder)) => {
            log::warn!("No supported images in {}", folder.display());
            dialogs.notice("No files in folder");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let selection = Selection::new(files);
    let (max_width, max_height) = config.preview_size();

    // The window does not exist yet, so the first preview is plain PNG bytes
    let initial_preview = imaging::preview::render_initial_preview(&selection.current().path, max_width, max_height)?;

    let fatal = app::FatalError::default();
    app::run(app::Session {
        selection,
        initial_preview,
        preview_size: config.preview_size(),
        restorer: Arc::new(CommandRestorer::new(config.restore.clone())),
        prompter: Box::new(dialogs),
        fatal: Arc::clone(&fatal),
    })?;

    // The GUI exits normally after a fatal error; report it here
    let fatal = fatal.lock().ok().and_then(|mut error| error.take());
    match fatal {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
