//! Feature modules - logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod progress;
pub mod settings;
pub mod thumbnail;

pub use progress::{DragState, PointerEvent, ProgressBar};
pub use settings::Settings;
pub use thumbnail::Thumbnails;
