// SPDX-License-Identifier: MPL-2.0
//! Sheet screen rendering.

use super::component::{Message, SheetScreen};
use crate::ui::scroll_handler::scroll_handler;
use crate::ui::styles::container as container_styles;
use crate::ui::widgets::{gesture_detector, Transformed};
use iced::widget::{stack, Container, Space};
use iced::{Element, Length, Vector};

impl SheetScreen {
    /// Renders the sheet over an optional custom background.
    ///
    /// Screen messages are wrapped with `on_message` so the host can route
    /// them back to [`handle`](SheetScreen::handle). When gestures are
    /// disabled the sheet is drawn statically.
    pub fn view<'a, M>(
        &self,
        content: impl Into<Element<'a, M>>,
        background: Option<Element<'a, M>>,
        on_message: fn(Message) -> M,
    ) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        if !self.gestures_enabled() {
            let sheet = surface(
                content,
                1.0,
                self.settings.initial_border_radius.pixels(),
            );
            return layered(background, sheet, 1.0);
        }

        let translation = self.translation();
        let sheet = Transformed::new(surface(content, self.opacity(), self.border_radius()))
            .translate(Vector::new(translation.x, translation.y))
            .scale(self.content_scale());

        let detector = gesture_detector(sheet)
            .on_begin(on_message(Message::GestureBegan))
            .on_move(move |sample| on_message(Message::GestureMoved(sample)))
            .on_end(move |sample| on_message(Message::GestureEnded(sample)))
            .on_resize(move |size| on_message(Message::Resized(size)));

        layered(background, detector.into(), self.opacity())
    }

    /// Wraps content in a scrollable whose position gates vertical drags.
    /// Use together with `scrollable: true` in the screen settings.
    pub fn scrollable<'a, M: 'a>(
        content: impl Into<Element<'a, M>>,
        on_message: fn(Message) -> M,
    ) -> Element<'a, M> {
        scroll_handler(content, move |snapshot| {
            on_message(Message::Scrolled(snapshot))
        })
        .into()
    }
}

fn surface<'a, M: 'a>(
    content: impl Into<Element<'a, M>>,
    opacity: f32,
    radius: f32,
) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .style(container_styles::sheet(opacity, radius))
        .into()
}

/// Stacks the sheet over its background. The veil fades the background
/// together with the sheet.
fn layered<'a, M: 'a>(
    background: Option<Element<'a, M>>,
    sheet: Element<'a, M>,
    opacity: f32,
) -> Element<'a, M> {
    let Some(background) = background else {
        return sheet;
    };

    let veil = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::veil(opacity));

    stack![background, veil, sheet]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
