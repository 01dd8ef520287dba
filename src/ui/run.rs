use chrono::{DateTime, Local};
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::run::RunState;

/// Events of the summary / running / result screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    Confirm,
    Cancel,
    Close,
}

/// Start and end of the inference call, for display
#[derive(Debug, Clone, Copy, Default)]
pub struct RunTimes {
    pub started_at: Option<DateTime<Local>>,
    pub finished_at: Option<DateTime<Local>>,
}

impl RunTimes {
    fn elapsed_text(&self) -> Option<String> {
        let elapsed = self.finished_at? - self.started_at?;
        Some(format!("Finished in {}s", elapsed.num_seconds()))
    }
}

/// Window title for the given run state
pub fn title(state: &RunState) -> &'static str {
    match state {
        RunState::AwaitingConfirmation(_) => "Summary",
        RunState::Running(_) => "Running restoration",
        RunState::Complete(_) => "Restoration complete!",
        RunState::Failed { .. } => "Restoration failed",
        RunState::AwaitingOutputFolder(_) | RunState::Cancelled | RunState::Abandoned => {
            "Face restoration"
        }
    }
}

pub fn view<'a>(state: &'a RunState, times: &RunTimes) -> Element<'a, RunEvent> {
    let content: Column<'a, RunEvent> = match state {
        RunState::AwaitingConfirmation(config) => column![
            text(format!("Input type: {}", config.request.kind_label())),
            text(format!("Input location: {}", config.request.input().display())),
            text(format!("Output folder: {}", config.output_folder.display())),
            text("Click button if ready to run restoration"),
            row![
                button("Run restoration").on_press(RunEvent::Confirm).padding(10),
                button("Cancel")
                    .on_press(RunEvent::Cancel)
                    .style(button::secondary)
                    .padding(10),
            ]
            .spacing(10),
        ],
        RunState::Running(config) => {
            let mut content = column![text(format!(
                "Running restoration on {}...",
                config.request.noun()
            ))
            .size(20)];
            if let Some(started_at) = times.started_at {
                content = content.push(text(format!("Started at {}", started_at.format("%H:%M:%S"))).size(14));
            }
            content
        }
        RunState::Complete(config) => {
            let mut content = column![
                text("Restoration run successfully!").size(20),
                text(format!("Results written to {}", config.output_folder.display())),
            ];
            if let Some(elapsed) = times.elapsed_text() {
                content = content.push(text(elapsed).size(14));
            }
            content.push(button("Close").on_press(RunEvent::Close).padding(10))
        }
        RunState::Failed { reason, .. } => column![
            text("Restoration failed").size(20),
            text(reason.as_str()).size(14),
            button("Close")
                .on_press(RunEvent::Close)
                .style(button::danger)
                .padding(10),
        ],
        RunState::AwaitingOutputFolder(_) | RunState::Cancelled | RunState::Abandoned => Column::new(),
    };

    container(content.spacing(16).padding(40).align_x(Alignment::Start))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_elapsed_text() {
        let started_at = Local.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let times = RunTimes {
            started_at: Some(started_at),
            finished_at: Some(started_at + chrono::Duration::seconds(42)),
        };
        assert_eq!(times.elapsed_text().as_deref(), Some("Finished in 42s"));
        assert_eq!(RunTimes::default().elapsed_text(), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(title(&RunState::Cancelled), "Face restoration");
        assert_eq!(
            title(&RunState::Failed {
                config: crate::state::data::RunConfig {
                    request: crate::state::data::RestoreRequest::Folder("/photos".into()),
                    output_folder: "/out".into(),
                },
                reason: "boom".to_string(),
            }),
            "Restoration failed"
        );
    }
}
