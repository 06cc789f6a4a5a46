// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws its content translated and scaled about the
//! center of its bounds.
//!
//! Layout is left untouched; only drawing and input are transformed. Cursor
//! and touch positions are mapped back into the content's untransformed
//! space, so hit testing follows what is on screen.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::touch;
use iced::{Element, Event, Length, Point, Rectangle, Size, Transformation, Vector};

/// A widget that translates and scales its content when drawing.
pub struct Transformed<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    scale: f32,
    translation: Vector,
}

impl<'a, Message, Theme, Renderer> Transformed<'a, Message, Theme, Renderer> {
    /// Creates an identity transform around the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            scale: 1.0,
            translation: Vector::ZERO,
        }
    }

    /// Sets the scale applied about the center. Non-positive or non-finite
    /// values are ignored.
    #[must_use]
    pub fn scale(mut self, scale: f32) -> Self {
        if scale.is_finite() && scale > 0.0 {
            self.scale = scale;
        }
        self
    }

    /// Sets the translation applied after scaling.
    #[must_use]
    pub fn translate(mut self, translation: Vector) -> Self {
        self.translation = translation;
        self
    }

    fn transformation(&self, bounds: Rectangle) -> Transformation {
        let center = bounds.center();
        Transformation::translate(
            center.x + self.translation.x,
            center.y + self.translation.y,
        ) * Transformation::scale(self.scale)
            * Transformation::translate(-center.x, -center.y)
    }

    /// Maps a screen position back into the content's layout space.
    fn to_content(&self, bounds: Rectangle, point: Point) -> Point {
        let center = bounds.center();
        Point::new(
            center.x + (point.x - center.x - self.translation.x) / self.scale,
            center.y + (point.y - center.y - self.translation.y) / self.scale,
        )
    }

    fn map_cursor(&self, bounds: Rectangle, cursor: mouse::Cursor) -> mouse::Cursor {
        match cursor {
            mouse::Cursor::Available(position) => {
                mouse::Cursor::Available(self.to_content(bounds, position))
            }
            other => other,
        }
    }

    fn map_viewport(&self, bounds: Rectangle, viewport: &Rectangle) -> Rectangle {
        let top_left = self.to_content(bounds, viewport.position());
        let bottom_right = self.to_content(
            bounds,
            Point::new(viewport.x + viewport.width, viewport.y + viewport.height),
        );
        Rectangle::new(
            top_left,
            Size::new(bottom_right.x - top_left.x, bottom_right.y - top_left.y),
        )
    }

    fn map_event(&self, bounds: Rectangle, event: &Event) -> Event {
        let map = |position: Point| self.to_content(bounds, position);
        match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Event::Mouse(mouse::Event::CursorMoved {
                    position: map(*position),
                })
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                Event::Touch(touch::Event::FingerPressed {
                    id: *id,
                    position: map(*position),
                })
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                Event::Touch(touch::Event::FingerMoved {
                    id: *id,
                    position: map(*position),
                })
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => {
                Event::Touch(touch::Event::FingerLifted {
                    id: *id,
                    position: map(*position),
                })
            }
            Event::Touch(touch::Event::FingerLost { id, position }) => {
                Event::Touch(touch::Event::FingerLost {
                    id: *id,
                    position: map(*position),
                })
            }
            other => other.clone(),
        }
    }

    fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < f32::EPSILON && self.translation == Vector::ZERO
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Transformed<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        if self.is_identity() {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
            return;
        }

        let bounds = layout.bounds();
        let cursor = self.map_cursor(bounds, cursor);
        let viewport = self.map_viewport(bounds, viewport);

        renderer.with_transformation(self.transformation(bounds), |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                &viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let event = self.map_event(bounds, event);
        let cursor = self.map_cursor(bounds, cursor);
        let viewport = self.map_viewport(bounds, viewport);

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            &event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            &viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let bounds = layout.bounds();
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            self.map_cursor(bounds, cursor),
            &self.map_viewport(bounds, viewport),
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + self.translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Transformed<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(wrapper: Transformed<'a, Message, Theme, Renderer>) -> Self {
        Self::new(wrapper)
    }
}
