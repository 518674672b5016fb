// src/app/state.rs
//! Application state definitions

use std::cell::Cell;
use std::rc::Rc;

use crate::features::{ProgressBar, Settings, Thumbnails};

/// Main application state
pub struct App {
    pub settings: Settings,
    /// The control this screen hosts
    pub bar: ProgressBar,
    /// Preview frames, `None` shows the placeholder colour
    pub thumbnails: Option<Thumbnails>,
    /// Value of the most recent completed drag
    pub last_committed: Option<f32>,
    /// Completed drags, counted by the commit callback
    pub commits: Rc<Cell<u32>>,
}
