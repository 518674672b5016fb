//! Progress bar model
//!
//! Renderer-independent state of the seek control: the fill and buffer
//! percentages, the last known frame, the style, and the drag gesture.
//! Geometry is always derived from these on demand, so resizing only needs
//! [`ProgressBar::layout_changed`].
//!
//! Pointer input follows a two-state machine:
//!
//! ```text
//! Idle --down--> Dragging --move--> Dragging
//!                Dragging --up-----> Idle   (commits)
//!                Dragging --cancel-> Idle   (discards)
//! ```
//!
//! No operation can fail. Out-of-range values and coordinates are clamped.

pub mod geometry;
pub mod style;

use iced::{Point, Rectangle, Size};

pub use style::ProgressStyle;

type CommitCallback = Box<dyn FnMut(f32)>;

/// Pointer input in widget-local coordinates (track origin at `0, 0`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
}

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Live data of an in-progress drag
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer_x: f32,
}

/// Derived layout, in widget-local coordinates.
///
/// The preview sits above the track, so its `y` is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub frame: Size,
    pub fill: Rectangle,
    pub buffer: Rectangle,
    pub handle: Rectangle,
    /// `Some` only while dragging
    pub preview: Option<Rectangle>,
}

/// Draggable progress bar with a buffer track and a preview overlay
pub struct ProgressBar {
    progress: f32,
    buffer_progress: f32,
    style: ProgressStyle,
    frame: Size,
    drag: Option<DragSession>,
    on_committed: Option<CommitCallback>,
}

impl ProgressBar {
    pub fn new(style: ProgressStyle) -> Self {
        Self {
            progress: 0.0,
            buffer_progress: 0.0,
            style,
            frame: Size::ZERO,
            drag: None,
            on_committed: None,
        }
    }

    // ============ Values ============

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Set the fill percentage. Any input is accepted and clamped to `[0, 100]`.
    pub fn set_progress(&mut self, value: f32) {
        self.progress = geometry::clamp_percent(value);
        tracing::debug!("progress = {}", self.progress);
    }

    pub fn buffer_progress(&self) -> f32 {
        self.buffer_progress
    }

    /// Set the buffer percentage. Never touches the fill percentage.
    pub fn set_buffer_progress(&mut self, value: f32) {
        self.buffer_progress = geometry::clamp_percent(value);
    }

    /// Register the callback fired once per completed drag, with the final
    /// clamped progress. Replaces any previous callback.
    pub fn on_progress_committed(&mut self, callback: impl FnMut(f32) + 'static) {
        self.on_committed = Some(Box::new(callback));
    }

    pub fn style(&self) -> &ProgressStyle {
        &self.style
    }

    // ============ Layout ============

    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Re-apply the current values to a new bounding box.
    ///
    /// Must be called whenever the host resizes the control. Returns `true`
    /// if the frame actually changed.
    pub fn layout_changed(&mut self, frame: Size) -> bool {
        let frame = Size::new(
            style::sanitize_length(frame.width),
            style::sanitize_length(frame.height),
        );
        if frame == self.frame {
            return false;
        }

        tracing::debug!("progress bar resized to {}x{}", frame.width, frame.height);
        self.frame = frame;
        true
    }

    /// Current layout of every child element
    pub fn geometry(&self) -> Geometry {
        let Size { width, height } = self.frame;
        let handle_width = self.style.handle_width;

        let fill_width = geometry::fill_width(self.progress, width, handle_width);
        let handle_x = geometry::handle_x(fill_width, handle_width);

        let preview = self.drag.map(|session| {
            let preview = self.style.preview_size;
            Rectangle {
                x: geometry::preview_x(session.pointer_x, width, preview.width),
                y: -(preview.height + self.style.preview_offset),
                width: preview.width,
                height: preview.height,
            }
        });

        Geometry {
            frame: self.frame,
            fill: Rectangle {
                x: 0.0,
                y: 0.0,
                width: fill_width,
                height,
            },
            buffer: Rectangle {
                x: 0.0,
                y: 0.0,
                width: geometry::buffer_width(self.buffer_progress, width),
                height,
            },
            handle: Rectangle {
                x: handle_x,
                y: 0.0,
                width: handle_width.min(fill_width),
                height,
            },
            preview,
        }
    }

    // ============ Gesture ============

    pub fn drag_state(&self) -> DragState {
        if self.drag.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    /// Dispatch a pointer event. Returns the committed value on `Up`.
    pub fn handle(&mut self, event: PointerEvent) -> Option<f32> {
        match event {
            PointerEvent::Down(point) => {
                self.pointer_down(point);
                None
            }
            PointerEvent::Move(point) => {
                self.pointer_move(point);
                None
            }
            PointerEvent::Up(point) => self.pointer_up(point),
            PointerEvent::Cancel => {
                self.pointer_cancel();
                None
            }
        }
    }

    /// Start a gesture. A second `down` while dragging restarts the session.
    pub fn pointer_down(&mut self, point: Point) {
        self.drag = Some(DragSession { pointer_x: point.x });
        self.seek_to(point.x);
    }

    /// Live update while dragging. Ignored when idle.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };

        session.pointer_x = point.x;
        self.seek_to(point.x);
    }

    /// Finish the gesture and commit.
    ///
    /// The committed value is recomputed from the handle's resting position,
    /// not from `_point`. The callback runs before the preview is hidden.
    /// Returns `None` (and fires nothing) when no gesture is active.
    pub fn pointer_up(&mut self, _point: Point) -> Option<f32> {
        self.drag?;

        let handle_x = self.geometry().handle.x;
        self.seek_to(handle_x);

        let committed = self.progress;
        tracing::info!("progress committed at {}", committed);
        if let Some(callback) = self.on_committed.as_mut() {
            callback(committed);
        }

        self.drag = None;
        Some(committed)
    }

    /// Abort the gesture without committing. Returns `true` if one was active.
    pub fn pointer_cancel(&mut self) -> bool {
        if self.drag.take().is_none() {
            return false;
        }

        tracing::debug!("drag cancelled at {}", self.progress);
        true
    }

    fn seek_to(&mut self, x: f32) {
        let value = geometry::progress_at(x, self.frame.width, self.style.handle_width);
        self.set_progress(value);
    }
}

// Runtime reconfiguration and queries the demo screen does not need; it
// styles the bar once at construction.
#[allow(dead_code)]
impl ProgressBar {
    pub fn set_style(&mut self, style: ProgressStyle) {
        self.style = style
            .with_handle_width(style.handle_width)
            .with_preview_size(style.preview_size);
    }

    pub fn set_track_color(&mut self, color: iced::Color) {
        self.style.track_color = color;
    }

    pub fn set_buffer_color(&mut self, color: iced::Color) {
        self.style.buffer_color = color;
    }

    pub fn set_handle_color(&mut self, color: iced::Color) {
        self.style.handle_color = color;
    }

    pub fn set_handle_width(&mut self, width: f32) {
        self.style.handle_width = style::sanitize_length(width);
    }

    pub fn set_preview_size(&mut self, size: Size) {
        self.style = self.style.with_preview_size(size);
    }

    pub fn clear_progress_committed(&mut self) {
        self.on_committed = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn preview_visible(&self) -> bool {
        self.drag.is_some()
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new(ProgressStyle::default())
    }
}

impl std::fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressBar")
            .field("progress", &self.progress)
            .field("buffer_progress", &self.buffer_progress)
            .field("style", &self.style)
            .field("frame", &self.frame)
            .field("drag", &self.drag)
            .field("on_committed", &self.on_committed.is_some())
            .finish()
    }
}
