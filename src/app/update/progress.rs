// src/app/update/progress.rs
//! Progress bar message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle progress bar messages
    pub fn handle_progress(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Pointer(event) => {
                if let Some(value) = self.bar.handle(*event) {
                    self.last_committed = Some(value);
                }
                Some(Task::none())
            }

            Message::Resized(size) => {
                self.bar.layout_changed(*size);
                Some(Task::none())
            }

            Message::BufferTick => {
                let next = self.bar.buffer_progress() + self.settings.buffer_step;
                self.bar.set_buffer_progress(next);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
