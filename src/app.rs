//! Main application module
//!
//! The host screen: owns one [`ProgressBar`], feeds it pointer and resize
//! messages from the view, and simulates buffering so the buffer track moves.

mod message;
mod state;
mod update;
mod view;

use std::cell::Cell;
use std::rc::Rc;

use iced::{Size, Task, Theme};

use crate::features::{ProgressBar, Settings, Thumbnails};
pub use message::Message;
pub use state::App;

/// Interval between simulated buffer updates
const BUFFER_TICK_MS: u64 = 250;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_settings(crate::features::Settings::load());

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: Size::new(640.0, 360.0),
            min_size: Some(Size::new(240.0, 240.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "progressview".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Build the screen state without opening a window
    pub fn with_settings(settings: Settings) -> Self {
        let style = settings.style.to_style();

        let mut bar = ProgressBar::new(style);
        bar.set_progress(settings.initial_progress);
        bar.set_buffer_progress(settings.initial_buffer);

        let commits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&commits);
        bar.on_progress_committed(move |value| {
            counter.set(counter.get() + 1);
            tracing::info!("Seek committed to {:.2}%", value);
        });

        let thumbnails = load_thumbnails(&settings, style.preview_size);

        Self {
            settings,
            bar,
            thumbnails,
            last_committed: None,
            commits,
        }
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title with the current position
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("ProgressView - {:.0}%", self.bar.progress())
    }

    /// Subscriptions for buffer simulation and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        let buffer_sub = if subscription_logic::needs_buffer_ticks(
            self.bar.buffer_progress(),
            self.settings.buffer_step,
        ) {
            iced::time::every(Duration::from_millis(BUFFER_TICK_MS)).map(|_| Message::BufferTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([close_sub, buffer_sub])
    }
}

/// Zero frames disables thumbnails, leaving the plain placeholder
fn load_thumbnails(settings: &Settings, size: Size) -> Option<Thumbnails> {
    let frames = settings.preview_frames;
    if frames == 0 {
        return None;
    }

    if let Some(path) = &settings.preview_image {
        match Thumbnails::from_path(path, frames, size) {
            Ok(thumbnails) => {
                tracing::debug!(
                    "Loaded {} preview frames from {}",
                    thumbnails.len(),
                    path.display()
                );
                return Some(thumbnails);
            }
            Err(e) => tracing::warn!("Falling back to generated previews: {:#}", e),
        }
    }

    Some(Thumbnails::gradient(frames, size))
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::features::progress::geometry::PERCENT_MAX;

    pub fn needs_buffer_ticks(buffer_progress: f32, step: f32) -> bool {
        step > 0.0 && buffer_progress < PERCENT_MAX
    }
}
