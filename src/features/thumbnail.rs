//! Preview thumbnails
//!
//! Frames shown in the preview overlay while dragging. Either sliced out of a
//! wide source image (a filmstrip, one window per frame) or rendered
//! procedurally when no source is configured.

use std::path::Path;

use anyhow::{Context, Result};
use iced::Size;
use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

use super::progress::geometry;

/// Pre-rendered preview frames covering 0-100%
#[derive(Debug, Clone)]
pub struct Thumbnails {
    frames: Vec<Handle>,
}

impl Thumbnails {
    /// Load a source image and slice it into `frames` aspect-filled previews
    pub fn from_path(path: &Path, frames: usize, size: Size) -> Result<Self> {
        let source = image::open(path)
            .with_context(|| format!("Failed to open preview image {}", path.display()))?;
        Self::from_image(&source, frames, size)
            .with_context(|| format!("Failed to slice preview image {}", path.display()))
    }

    /// Slice `source` horizontally into `frames` windows, each resized to fill `size`
    pub fn from_image(source: &DynamicImage, frames: usize, size: Size) -> Result<Self> {
        let (src_width, src_height) = source.dimensions();
        anyhow::ensure!(src_width > 0 && src_height > 0, "Source image is empty");

        let frames = frames.max(1);
        let (width, height) = pixel_size(size);
        let window = (src_width / frames as u32).max(1);

        let handles = (0..frames as u32)
            .map(|i| {
                let x = (i * window).min(src_width - window);
                let frame = source
                    .crop_imm(x, 0, window, src_height)
                    .resize_to_fill(width, height, FilterType::Triangle);
                Handle::from_rgba(width, height, frame.to_rgba8().into_raw())
            })
            .collect();

        Ok(Self { frames: handles })
    }

    /// Procedural frames: a colour sweep so the preview visibly changes with position
    pub fn gradient(frames: usize, size: Size) -> Self {
        let frames = frames.max(1);
        let (width, height) = pixel_size(size);

        let handles = (0..frames)
            .map(|i| {
                let t = if frames > 1 {
                    i as f32 / (frames - 1) as f32
                } else {
                    0.0
                };
                let image = RgbaImage::from_fn(width, height, |_, y| {
                    let shade = 1.0 - 0.4 * y as f32 / height as f32;
                    Rgba([
                        channel((0.15 + 0.8 * t) * shade),
                        channel(0.3 * shade),
                        channel((0.9 - 0.7 * t) * shade),
                        255,
                    ])
                });
                Handle::from_rgba(width, height, image.into_raw())
            })
            .collect();

        Self { frames: handles }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame closest to `progress` (0 to 100, clamped)
    pub fn index_at(&self, progress: f32) -> usize {
        let last = self.frames.len().saturating_sub(1);
        let ratio = geometry::clamp_percent(progress) / geometry::PERCENT_MAX;

        ((ratio * last as f32).round() as usize).min(last)
    }

    pub fn frame_at(&self, progress: f32) -> Option<&Handle> {
        self.frames.get(self.index_at(progress))
    }
}

fn pixel_size(size: Size) -> (u32, u32) {
    let px = |v: f32| if v.is_nan() { 1 } else { v.round().max(1.0) as u32 };
    (px(size.width), px(size.height))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
