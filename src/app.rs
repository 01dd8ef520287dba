//! Application root: owns the current screen and routes messages to it.
//!
//! Screens run strictly one after another: the browser, then the output
//! folder prompt, then summary / running / result. Leaving a screen drops it
//! (and its preview bitmap) before the next one opens.

use chrono::Local;
use iced::widget::{horizontal_space, image::Handle};
use iced::{event, Element, Size, Subscription, Task, Theme};
use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::imaging::preview;
use crate::restore::{self, Restorer};
use crate::state::data::RestoreRequest;
use crate::state::run::{Orchestrator, RunState};
use crate::state::selection::Selection;
use crate::ui::browse::{self, BrowseEvent};
use crate::ui::dialogs::Prompter;
use crate::ui::input;
use crate::ui::run::{self as run_screen, RunEvent, RunTimes};

/// Everything the app needs from startup
pub struct Session {
    pub selection: Selection,
    /// PNG bytes of the first preview, rendered before the window exists
    pub initial_preview: Vec<u8>,
    pub preview_size: (u32, u32),
    pub restorer: Arc<dyn Restorer>,
    pub prompter: Box<dyn Prompter>,
    /// Error that ended the GUI, picked up by `main` once the window is gone
    pub fatal: FatalError,
}

pub type FatalError = Arc<Mutex<Option<AppError>>>;

/// Width of the file list column plus padding around the preview
const CHROME: (f32, f32) = (360.0, 200.0);

enum Screen {
    Browse { selection: Selection, preview: Handle },
    Run { orchestrator: Orchestrator, times: RunTimes },
    /// Between screens, or on the way out
    Closed,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    Browse(BrowseEvent),
    Run(RunEvent),
    /// The background restoration call returned
    RestoreFinished(Result<(), String>),
}

pub struct App {
    screen: Screen,
    preview_size: (u32, u32),
    restorer: Arc<dyn Restorer>,
    prompter: Box<dyn Prompter>,
    fatal: FatalError,
}

/// Window size that fits a full preview next to the file list
pub fn window_size(preview_size: (u32, u32)) -> Size {
    Size::new(
        preview_size.0 as f32 + CHROME.0,
        preview_size.1 as f32 + CHROME.1,
    )
}

/// Launch the GUI for an already scanned folder
pub fn run(session: Session) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(window_size(session.preview_size))
        .centered()
        .run_with(move || App::new(session))
}

impl App {
    fn new(session: Session) -> (Self, Task<Message>) {
        log::info!(
            "🎨 Browsing {} images in {}",
            session.selection.files().len(),
            session.selection.files().folder().display()
        );

        let app = App {
            screen: Screen::Browse {
                selection: session.selection,
                preview: preview::initial_handle(session.initial_preview),
            },
            preview_size: session.preview_size,
            restorer: session.restorer,
            prompter: session.prompter,
            fatal: session.fatal,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        match &self.screen {
            Screen::Browse { .. } => "Select images to restore".to_string(),
            Screen::Run { orchestrator, .. } => run_screen::title(orchestrator.state()).to_string(),
            Screen::Closed => "Face restoration".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        log::debug!("{:?}", message);

        match message {
            Message::Browse(event) => self.handle_browse(event),
            Message::Run(event) => self.handle_run(event),
            Message::RestoreFinished(outcome) => self.handle_finished(outcome),
        }
    }

    fn handle_browse(&mut self, event: BrowseEvent) -> Task<Message> {
        let Screen::Browse { selection, preview } = &mut self.screen else {
            log::warn!("Browse event {:?} outside the browser, ignoring", event);
            return Task::none();
        };

        if let Some(navigation) = event.navigation() {
            if !selection.apply(&navigation) {
                return Task::none();
            }

            let (max_width, max_height) = self.preview_size;
            return match preview::render_preview(&selection.current().path, max_width, max_height) {
                // The old handle is dropped here
                Ok(bitmap) => {
                    *preview = bitmap.into_handle();
                    Task::none()
                }
                Err(e) => {
                    log::error!("❌ {}", e);
                    self.prompter.error("Cannot show image", &e.to_string());
                    if let Ok(mut fatal) = self.fatal.lock() {
                        *fatal = Some(e);
                    }
                    self.screen = Screen::Closed;
                    iced::exit()
                }
            };
        }

        let request = match event {
            BrowseEvent::RestoreSelected => RestoreRequest::SingleImage(selection.current().path.clone()),
            BrowseEvent::RestoreAll => RestoreRequest::Folder(selection.files().folder().to_path_buf()),
            BrowseEvent::Next | BrowseEvent::Previous | BrowseEvent::Select(_) => return Task::none(),
        };
        log::info!("Restore requested for {} {}", request.kind_label(), request.input().display());

        // Close the browser before prompting for the output folder
        self.screen = Screen::Closed;

        let mut orchestrator = Orchestrator::new(request);
        orchestrator.output_folder_chosen(self.prompter.output_folder());

        if orchestrator.state() == &RunState::Abandoned {
            self.prompter.notice("No output folder selected. Nothing was restored.");
            return iced::exit();
        }

        self.screen = Screen::Run {
            orchestrator,
            times: RunTimes::default(),
        };
        Task::none()
    }

    fn handle_run(&mut self, event: RunEvent) -> Task<Message> {
        let Screen::Run { orchestrator, times } = &mut self.screen else {
            log::warn!("Run event {:?} outside the run screens, ignoring", event);
            return Task::none();
        };

        match event {
            RunEvent::Confirm => {
                let Some(config) = orchestrator.confirm() else {
                    return Task::none();
                };

                log::info!(
                    "▶️  Restoring {} into {}",
                    config.request.input().display(),
                    config.output_folder.display()
                );
                times.started_at = Some(Local::now());

                Task::perform(
                    restore::run_restoration(Arc::clone(&self.restorer), config),
                    Message::RestoreFinished,
                )
            }
            RunEvent::Cancel => {
                orchestrator.cancel();
                if orchestrator.state() != &RunState::Cancelled {
                    return Task::none();
                }

                log::info!("Restoration cancelled");
                self.screen = Screen::Closed;
                iced::exit()
            }
            RunEvent::Close => {
                if orchestrator.is_terminal() {
                    iced::exit()
                } else {
                    Task::none()
                }
            }
        }
    }

    fn handle_finished(&mut self, outcome: Result<(), String>) -> Task<Message> {
        let Screen::Run { orchestrator, times } = &mut self.screen else {
            log::warn!("Restoration finished outside the run screens, ignoring");
            return Task::none();
        };

        times.finished_at = Some(Local::now());
        match &outcome {
            Ok(()) => log::info!("✅ Restoration complete"),
            Err(reason) => log::error!("❌ {}", reason),
        }

        orchestrator.finished(outcome);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Browse { selection, preview } => browse::view(selection, preview).map(Message::Browse),
            Screen::Run { orchestrator, times } => run_screen::view(orchestrator.state(), times).map(Message::Run),
            Screen::Closed => horizontal_space().into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self.screen {
            Screen::Browse { .. } => event::listen_with(input::browse_event).map(Message::Browse),
            Screen::Run { .. } | Screen::Closed => Subscription::none(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}
