use iced::widget::{button, column, image, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::selection::{Navigation, Selection};

/// Events of the browser screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    Next,
    Previous,
    /// A filename was picked in the file list
    Select(String),
    /// Restore the image currently shown
    RestoreSelected,
    /// Restore every image in the folder
    RestoreAll,
}

impl BrowseEvent {
    /// The paging transition for this event, if it is one
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            BrowseEvent::Next => Some(Navigation::AdvanceNext),
            BrowseEvent::Previous => Some(Navigation::AdvancePrevious),
            BrowseEvent::Select(name) => Some(Navigation::SelectByName(name.clone())),
            BrowseEvent::RestoreSelected | BrowseEvent::RestoreAll => None,
        }
    }
}

const INSTRUCTIONS: &str = "Select image to restore and click Next.\n\
                            To restore all images in folder click: Restore all images in folder";

pub fn view<'a>(selection: &'a Selection, preview: &'a image::Handle) -> Element<'a, BrowseEvent> {
    let current = selection.index();

    let list = selection
        .files()
        .names()
        .enumerate()
        .fold(Column::new().spacing(2), |list, (index, name)| {
            let style: fn(&Theme, button::Status) -> button::Style = if index == current {
                button::primary
            } else {
                button::secondary
            };

            list.push(
                button(text(name).size(14))
                    .width(Length::Fill)
                    .style(style)
                    .on_press(BrowseEvent::Select(name.to_string())),
            )
        });

    let viewer = column![
        image(preview.clone()).width(Length::Fill).height(Length::Fill),
        text(selection.current().path.display().to_string()).size(14),
    ]
    .spacing(10)
    .width(Length::Fill);

    let controls = row![
        button("<").on_press(BrowseEvent::Previous).padding(10),
        button(">").on_press(BrowseEvent::Next).padding(10),
        button("Next").on_press(BrowseEvent::RestoreSelected).padding(10),
        button("Restore all images in folder")
            .on_press(BrowseEvent::RestoreAll)
            .padding(10),
        text(selection.position_text()).size(16),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    column![
        text(INSTRUCTIONS).size(16),
        row![
            scrollable(list).width(Length::Fixed(280.0)).height(Length::Fill),
            viewer,
        ]
        .spacing(20)
        .height(Length::Fill),
        controls,
    ]
    .spacing(20)
    .padding(20)
    .into()
}
