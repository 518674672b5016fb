//! Application messages

use iced::Size;

use crate::features::PointerEvent;

/// Application messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // ============ Progress bar ============
    /// Gesture input from the seek track
    Pointer(PointerEvent),
    /// Seek track laid out at a new size
    Resized(Size),
    /// Simulated buffering advanced
    BufferTick,

    // ============ Window ============
    /// Main window closed
    WindowClosed,
}
