// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, row, text};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::features::DragState;
use crate::ui::{theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let control = widgets::progress_view::view(
            &self.bar,
            self.thumbnails.as_ref(),
            Message::Pointer,
            Message::Resized,
        );

        let committed = match (self.bar.drag_state(), self.last_committed) {
            (DragState::Dragging, _) => "Seeking...".to_string(),
            (DragState::Idle, Some(value)) => {
                format!("Committed {:.1}% ({} drags)", value, self.commits.get())
            }
            (DragState::Idle, None) => "Drag the bar to seek".to_string(),
        };

        let status = row![
            label(format!("Progress {:.1}%", self.bar.progress())),
            label(format!("Buffer {:.1}%", self.bar.buffer_progress())),
            label(committed),
        ]
        .spacing(24);

        let content = column![
            text("Progress View").size(20),
            container(control).padding(24).width(Fill).style(theme::panel),
            status,
        ]
        .spacing(16)
        .padding(32);

        container(content)
            .width(Fill)
            .height(Fill)
            .center_y(Fill)
            .style(theme::main_content)
            .into()
    }
}

fn label<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}
