// SPDX-License-Identifier: MPL-2.0
//! Demo layout: background content with the sheet stacked on top.

use super::{App, Message};
use crate::ui::screen::SheetScreen;
use iced::widget::{button, column, container, stack, text, Column};
use iced::{Element, Length, Padding};

/// Space left above the sheet so the scaled background stays visible.
const SHEET_TOP_INSET: f32 = 48.0;

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let background = container(
            column![
                text("Background").size(32),
                text(format!(
                    "resize: {:?}, platform: {:?}",
                    self.provider.settings().resize_type,
                    self.provider.platform()
                )),
                button("Open sheet").on_press(Message::OpenSheet),
            ]
            .spacing(12),
        )
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill);

        let background = self.provider.view(background);

        let Some(screen) = &self.screen else {
            return background;
        };

        let sheet = container(screen.view(self.sheet_content(), None, Message::Sheet))
            .padding(Padding {
                top: SHEET_TOP_INSET,
                ..Padding::ZERO
            })
            .width(Length::Fill)
            .height(Length::Fill);

        stack![background, sheet].into()
    }

    fn sheet_content(&self) -> Element<'_, Message> {
        let header = column![
            text("Sheet").size(28),
            text("Drag down to dismiss."),
            button("Dismiss").on_press(Message::DismissSheet),
        ]
        .spacing(12);

        let log = self
            .event_log
            .iter()
            .fold(Column::new().spacing(4), |col, entry| {
                col.push(text(entry.as_str()).size(14))
            });

        if self.scrollable {
            let lines = (1..=60).fold(Column::new().spacing(8), |col, line| {
                col.push(text(format!("Row {line}")))
            });
            let body = column![header, log, lines].spacing(16).padding(24);
            return SheetScreen::scrollable(body, Message::Sheet);
        }

        column![header, log].spacing(16).padding(24).into()
    }
}
