//! Visual configuration for the progress bar

use iced::{Color, Size};

/// Default handle width, also the minimum fill width
pub const DEFAULT_HANDLE_WIDTH: f32 = 10.0;

/// Default preview thumbnail size
pub const DEFAULT_PREVIEW_SIZE: Size = Size::new(80.0, 60.0);

/// Gap between the preview's bottom edge and the top of the track
pub const PREVIEW_OFFSET: f32 = 20.0;

const LIGHT_GRAY: Color = Color::from_rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);

/// Presentation settings for [`ProgressBar`](super::ProgressBar).
///
/// Colours only affect drawing. `handle_width` and `preview_size` feed the
/// derived geometry, so changing them moves the handle and preview on the
/// next layout query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressStyle {
    /// Fill track
    pub track_color: Color,
    /// Buffer track, drawn behind the fill track
    pub buffer_color: Color,
    /// Drag handle
    pub handle_color: Color,
    /// Unfilled rail
    pub background_color: Color,
    /// Placeholder shown in the preview when no thumbnail is available
    pub preview_color: Color,
    pub handle_width: f32,
    pub preview_size: Size,
    /// Fixed, not user-configurable
    pub preview_offset: f32,
}

impl Default for ProgressStyle {
    fn default() -> Self {
        Self {
            track_color: Color::from_rgb(0.0, 0.0, 1.0),
            buffer_color: Color::from_rgba(1.0, 1.0, 1.0, 0.6),
            handle_color: Color::from_rgb(1.0, 0.0, 0.0),
            background_color: LIGHT_GRAY,
            preview_color: LIGHT_GRAY,
            handle_width: DEFAULT_HANDLE_WIDTH,
            preview_size: DEFAULT_PREVIEW_SIZE,
            preview_offset: PREVIEW_OFFSET,
        }
    }
}

impl ProgressStyle {
    pub fn with_track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    pub fn with_buffer_color(mut self, color: Color) -> Self {
        self.buffer_color = color;
        self
    }

    pub fn with_handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    /// Negative and NaN widths collapse to 0
    pub fn with_handle_width(mut self, width: f32) -> Self {
        self.handle_width = sanitize_length(width);
        self
    }

    pub fn with_preview_size(mut self, size: Size) -> Self {
        self.preview_size = Size::new(sanitize_length(size.width), sanitize_length(size.height));
        self
    }

    /// Vertical space the preview occupies above the track
    pub fn preview_lane_height(&self) -> f32 {
        self.preview_size.height + self.preview_offset
    }
}

pub(super) fn sanitize_length(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}
