// SPDX-License-Identifier: MPL-2.0
//! A pan recognizer that wraps content and reports drag samples.
//!
//! Mouse and touch input are both recognized. The wrapped content keeps
//! receiving every event, so nested scrollables and buttons work alongside
//! the pan. A pan only begins once the pointer travels past a small slop
//! distance from where it was pressed.

use crate::domain::sheet::GestureSample;
use crate::gesture::VelocityTracker;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::touch;
use iced::{Element, Event, Length, Point, Rectangle, Size, Vector};
use std::time::Instant;

/// Distance the pointer must travel before a press becomes a pan.
pub const DEFAULT_SLOP: f32 = 8.0;

/// A widget that recognizes pan gestures over its content.
pub struct GestureDetector<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_begin: Option<Message>,
    on_move: Option<Box<dyn Fn(GestureSample) -> Message + 'a>>,
    on_end: Option<Box<dyn Fn(GestureSample) -> Message + 'a>>,
    on_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
    slop: f32,
}

impl<'a, Message, Theme, Renderer> GestureDetector<'a, Message, Theme, Renderer> {
    /// Creates a new `GestureDetector` wrapping the given content.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_begin: None,
            on_move: None,
            on_end: None,
            on_resize: None,
            slop: DEFAULT_SLOP,
        }
    }

    /// Message published when a pan begins.
    #[must_use]
    pub fn on_begin(mut self, message: Message) -> Self {
        self.on_begin = Some(message);
        self
    }

    /// Message published for every pointer motion during a pan.
    #[must_use]
    pub fn on_move(mut self, f: impl Fn(GestureSample) -> Message + 'a) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }

    /// Message published when the pointer of an active pan is released.
    #[must_use]
    pub fn on_end(mut self, f: impl Fn(GestureSample) -> Message + 'a) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    /// Message published whenever the detector's laid out size changes.
    #[must_use]
    pub fn on_resize(mut self, f: impl Fn(Size) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn slop(mut self, slop: f32) -> Self {
        self.slop = slop.max(0.0);
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for GestureDetector<'_, Message, Theme, Renderer>
where
    Message: Clone,
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<Recognizer>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(Recognizer::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let recognizer = tree.state.downcast_mut::<Recognizer>();
        let bounds = layout.bounds();

        if recognizer.size != Some(bounds.size()) {
            recognizer.size = Some(bounds.size());
            if let Some(on_resize) = &self.on_resize {
                shell.publish(on_resize(bounds.size()));
            }
        }

        let Some(pointer_event) = PointerEvent::from_event(event, cursor) else {
            return;
        };
        let now = Instant::now();

        match pointer_event {
            PointerEvent::Pressed(pointer, position) => {
                if let Some(position) = position.filter(|p| bounds.contains(*p)) {
                    recognizer.press(pointer, position, now);
                }
            }
            PointerEvent::Moved(pointer, position) => {
                match recognizer.motion(pointer, position, now, self.slop) {
                    Some(Recognized::Began(sample)) => {
                        if let Some(on_begin) = &self.on_begin {
                            shell.publish(on_begin.clone());
                        }
                        if let Some(on_move) = &self.on_move {
                            shell.publish(on_move(sample));
                        }
                    }
                    Some(Recognized::Moved(sample)) => {
                        if let Some(on_move) = &self.on_move {
                            shell.publish(on_move(sample));
                        }
                    }
                    None => {}
                }
            }
            PointerEvent::Released(pointer) => {
                if let Some(sample) = recognizer.release(pointer, now) {
                    if let Some(on_end) = &self.on_end {
                        shell.publish(on_end(sample));
                    }
                }
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if tree.state.downcast_ref::<Recognizer>().is_panning() {
            return mouse::Interaction::Grabbing;
        }
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
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
        tree: &'b mut Tree,
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
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<GestureDetector<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(detector: GestureDetector<'a, Message, Theme, Renderer>) -> Self {
        Self::new(detector)
    }
}

/// Helper function to create a gesture detector.
pub fn gesture_detector<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
) -> GestureDetector<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    GestureDetector::new(content)
}

// =============================================================================
// Recognition
// =============================================================================

/// Input source of a pan. Only one pointer is tracked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerEvent {
    Pressed(Pointer, Option<Point>),
    Moved(Pointer, Point),
    Released(Pointer),
}

impl PointerEvent {
    fn from_event(event: &Event, cursor: mouse::Cursor) -> Option<Self> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                Some(Self::Pressed(Pointer::Mouse, cursor.position()))
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Self::Moved(Pointer::Mouse, *position))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Self::Released(Pointer::Mouse))
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                Some(Self::Pressed(Pointer::Finger(*id), Some(*position)))
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                Some(Self::Moved(Pointer::Finger(*id), *position))
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => Some(Self::Released(Pointer::Finger(*id))),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Recognized {
    Began(GestureSample),
    Moved(GestureSample),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    pointer: Pointer,
    origin: Point,
    last: Point,
    panning: bool,
}

/// Per-widget recognition state, kept in the widget tree.
#[derive(Debug, Default)]
struct Recognizer {
    press: Option<Press>,
    velocity: VelocityTracker,
    size: Option<Size>,
}

impl Recognizer {
    fn press(&mut self, pointer: Pointer, position: Point, now: Instant) {
        if self.press.is_some() {
            return;
        }
        self.velocity.reset();
        self.velocity.add(now, position);
        self.press = Some(Press {
            pointer,
            origin: position,
            last: position,
            panning: false,
        });
    }

    fn motion(
        &mut self,
        pointer: Pointer,
        position: Point,
        now: Instant,
        slop: f32,
    ) -> Option<Recognized> {
        let press = self.press.as_mut().filter(|press| press.pointer == pointer)?;
        press.last = position;
        self.velocity.add(now, position);

        let translation = position - press.origin;
        let sample = sample(translation, self.velocity.velocity(now));

        if press.panning {
            return Some(Recognized::Moved(sample));
        }
        if translation.x.hypot(translation.y) > slop {
            press.panning = true;
            return Some(Recognized::Began(sample));
        }
        None
    }

    /// Ends the press. Returns the final sample when a pan was active.
    fn release(&mut self, pointer: Pointer, now: Instant) -> Option<GestureSample> {
        if self.press.is_some_and(|press| press.pointer != pointer) {
            return None;
        }
        let press = self.press.take()?;
        let velocity = self.velocity.velocity(now);
        self.velocity.reset();

        press
            .panning
            .then(|| sample(press.last - press.origin, velocity))
    }

    fn is_panning(&self) -> bool {
        self.press.is_some_and(|press| press.panning)
    }
}

fn sample(translation: Vector, velocity: Vector) -> GestureSample {
    GestureSample::translation(translation.x, translation.y).with_velocity(velocity.x, velocity.y)
}
