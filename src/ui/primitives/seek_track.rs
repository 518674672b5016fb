//! Seek track primitive
//!
//! Draws a [`ProgressBar`] (rail, buffer track, fill track, handle) and turns
//! iced mouse/touch input into [`PointerEvent`]s in track-local coordinates.
//! The bar itself is owned by the caller; this widget only reads it.
//!
//! Based on iced's slider widget, reduced to the pointer contract of the bar.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::keyboard;
use iced::keyboard::key::{self, Key};
use iced::mouse;
use iced::touch;
use iced::window;
use iced::{Color, Element, Event, Length, Point, Rectangle, Size, Theme};

use crate::features::{PointerEvent, ProgressBar};

/// Track widget backed by a [`ProgressBar`]
pub struct SeekTrack<'a, Message> {
    bar: &'a ProgressBar,
    on_pointer: Box<dyn Fn(PointerEvent) -> Message + 'a>,
    on_resize: Option<Box<dyn Fn(Size) -> Message + 'a>>,
    width: Length,
    height: f32,
}

impl<'a, Message> SeekTrack<'a, Message> {
    pub const DEFAULT_HEIGHT: f32 = 16.0;

    pub fn new<F>(bar: &'a ProgressBar, on_pointer: F) -> Self
    where
        F: 'a + Fn(PointerEvent) -> Message,
    {
        Self {
            bar,
            on_pointer: Box::new(on_pointer),
            on_resize: None,
            width: Length::Fill,
            height: Self::DEFAULT_HEIGHT,
        }
    }

    /// Called with the laid-out size whenever it differs from the bar's frame
    pub fn on_resize(mut self, on_resize: impl Fn(Size) -> Message + 'a) -> Self {
        self.on_resize = Some(Box::new(on_resize));
        self
    }
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for SeekTrack<'_, Message>
where
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: Length::Shrink,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.width, self.height)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        if let Some(on_resize) = &self.on_resize {
            if let Some(size) = pending_resize(bounds.size(), self.bar.frame(), state) {
                shell.publish(on_resize(size));
            }
        }

        if let Some(pointer) = translate(event, bounds, cursor, state) {
            shell.publish((self.on_pointer)(pointer));
            shell.capture_event();
        }
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let geometry = self.bar.geometry();
        let style = self.bar.style();

        let mut fill = |rect: Rectangle, color: Color| {
            if rect.width <= 0.0 || rect.height <= 0.0 {
                return;
            }
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: bounds.x + rect.x,
                        y: bounds.y + rect.y,
                        width: rect.width,
                        height: rect.height,
                    },
                    ..renderer::Quad::default()
                },
                color,
            );
        };

        // Back to front: rail, buffer, fill, handle on the fill's leading edge
        fill(
            Rectangle::new(Point::ORIGIN, geometry.frame),
            style.background_color,
        );
        fill(geometry.buffer, style.buffer_color);
        fill(geometry.fill, style.track_color);
        fill(geometry.handle, style.handle_color);
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_dragging {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grabbing
            }
        } else if cursor.is_over(layout.bounds()) {
            if cfg!(target_os = "windows") {
                mouse::Interaction::Pointer
            } else {
                mouse::Interaction::Grab
            }
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message, Renderer> From<SeekTrack<'a, Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(track: SeekTrack<'a, Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(track)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    is_dragging: bool,
    /// Last pointer position in window coordinates, used when a release
    /// arrives without a cursor position
    last_position: Point,
    /// Size most recently reported through `on_resize`
    reported_size: Option<Size>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            is_dragging: false,
            last_position: Point::ORIGIN,
            reported_size: None,
        }
    }
}

/// Size to report through `on_resize`, once per distinct laid-out size
fn pending_resize(size: Size, frame: Size, state: &mut State) -> Option<Size> {
    if size == frame || state.reported_size == Some(size) {
        return None;
    }

    state.reported_size = Some(size);
    Some(size)
}

/// Map an iced event to a gesture event in track-local coordinates.
///
/// Once a drag starts it follows the pointer anywhere, including outside the
/// window; only finger loss, window unfocus and Escape cancel it.
fn translate(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    state: &mut State,
) -> Option<PointerEvent> {
    let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let position = cursor.position_over(bounds)?;
            state.is_dragging = true;
            state.last_position = position;
            Some(PointerEvent::Down(local(position)))
        }
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            if !bounds.contains(*position) {
                return None;
            }
            state.is_dragging = true;
            state.last_position = *position;
            Some(PointerEvent::Down(local(*position)))
        }
        Event::Mouse(mouse::Event::CursorMoved { position })
        | Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            if !state.is_dragging {
                return None;
            }
            state.last_position = *position;
            Some(PointerEvent::Move(local(*position)))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. }) => {
            if !state.is_dragging {
                return None;
            }
            let position = match event {
                Event::Touch(touch::Event::FingerLifted { position, .. }) => *position,
                _ => cursor.land().position().unwrap_or(state.last_position),
            };
            state.is_dragging = false;
            Some(PointerEvent::Up(local(position)))
        }
        Event::Touch(touch::Event::FingerLost { .. })
        | Event::Window(window::Event::Unfocused)
        | Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(key::Named::Escape),
            ..
        }) => {
            if !state.is_dragging {
                return None;
            }
            state.is_dragging = false;
            Some(PointerEvent::Cancel)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rectangle = Rectangle {
        x: 20.0,
        y: 100.0,
        width: 300.0,
        height: 16.0,
    };

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn dragging_state() -> State {
        let mut state = State::default();
        translate(&press(), BOUNDS, at(30.0, 108.0), &mut state);
        state
    }

    #[test]
    fn test_press_inside_starts_drag_in_local_coordinates() {
        let mut state = State::default();
        let event = translate(&press(), BOUNDS, at(30.0, 108.0), &mut state);
        assert_eq!(event, Some(PointerEvent::Down(Point::new(10.0, 8.0))));
        assert!(state.is_dragging);
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut state = State::default();
        assert_eq!(translate(&press(), BOUNDS, at(5.0, 108.0), &mut state), None);
        assert_eq!(translate(&press(), BOUNDS, mouse::Cursor::Unavailable, &mut state), None);
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_move_only_while_dragging() {
        let mut state = State::default();
        assert_eq!(translate(&moved(50.0, 108.0), BOUNDS, at(50.0, 108.0), &mut state), None);

        let mut state = dragging_state();
        assert_eq!(
            translate(&moved(900.0, 5.0), BOUNDS, at(900.0, 5.0), &mut state),
            Some(PointerEvent::Move(Point::new(880.0, -95.0)))
        );
    }

    #[test]
    fn test_cursor_leaving_window_keeps_drag_alive() {
        let mut state = dragging_state();
        translate(&moved(659.0, 108.0), BOUNDS, at(659.0, 108.0), &mut state);

        let left = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(translate(&left, BOUNDS, mouse::Cursor::Unavailable, &mut state), None);
        assert!(state.is_dragging);

        // release outside the window falls back to the last known position
        assert_eq!(
            translate(&release(), BOUNDS, mouse::Cursor::Unavailable, &mut state),
            Some(PointerEvent::Up(Point::new(639.0, 8.0)))
        );
        assert!(!state.is_dragging);
    }

    #[test]
    fn test_release_uses_cursor_position() {
        let mut state = dragging_state();
        assert_eq!(
            translate(&release(), BOUNDS, at(120.0, 108.0), &mut state),
            Some(PointerEvent::Up(Point::new(100.0, 8.0)))
        );
        assert_eq!(translate(&release(), BOUNDS, at(120.0, 108.0), &mut state), None);
    }

    #[test]
    fn test_finger_gesture() {
        let finger = touch::Finger(0);
        let mut state = State::default();

        let outside = Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(0.0, 0.0),
        });
        assert_eq!(translate(&outside, BOUNDS, mouse::Cursor::Unavailable, &mut state), None);

        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(170.0, 104.0),
        });
        assert_eq!(
            translate(&pressed, BOUNDS, mouse::Cursor::Unavailable, &mut state),
            Some(PointerEvent::Down(Point::new(150.0, 4.0)))
        );

        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(400.0, 104.0),
        });
        assert_eq!(
            translate(&lifted, BOUNDS, mouse::Cursor::Unavailable, &mut state),
            Some(PointerEvent::Up(Point::new(380.0, 4.0)))
        );
    }

    #[test]
    fn test_cancel_sources() {
        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(0),
            position: Point::new(50.0, 108.0),
        });
        let unfocused = Event::Window(window::Event::Unfocused);

        for event in [lost, unfocused] {
            let mut state = dragging_state();
            assert_eq!(
                translate(&event, BOUNDS, at(50.0, 108.0), &mut state),
                Some(PointerEvent::Cancel)
            );
            assert!(!state.is_dragging);
            // nothing to cancel the second time
            assert_eq!(translate(&event, BOUNDS, at(50.0, 108.0), &mut state), None);
        }
    }

    #[test]
    fn test_resize_reported_once_per_size() {
        let mut state = State::default();
        let laid_out = Size::new(300.0, 16.0);

        assert_eq!(pending_resize(laid_out, Size::ZERO, &mut state), Some(laid_out));
        assert_eq!(pending_resize(laid_out, Size::ZERO, &mut state), None);
        assert_eq!(pending_resize(laid_out, laid_out, &mut state), None);

        let wider = Size::new(500.0, 16.0);
        assert_eq!(pending_resize(wider, laid_out, &mut state), Some(wider));
    }
}
