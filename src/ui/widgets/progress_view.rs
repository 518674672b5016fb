//! Progress view widget
//!
//! Composes the seek track with its preview overlay. The preview lives in a
//! lane above the track, as tall as the preview plus its fixed offset, and is
//! shifted horizontally to the position computed by the bar.

use iced::widget::{Space, column, container, image};
use iced::{Background, ContentFit, Element, Fill, Padding, Size};

use crate::features::{PointerEvent, ProgressBar, Thumbnails};
use crate::ui::primitives::SeekTrack;

/// Build the full control for `bar`.
///
/// `on_pointer` receives every gesture event; the host feeds it back into
/// [`ProgressBar::handle`]. `on_resize` fires when the track's laid-out size
/// differs from the bar's frame and should end in
/// [`ProgressBar::layout_changed`].
pub fn view<'a, Message: 'a>(
    bar: &'a ProgressBar,
    thumbnails: Option<&'a Thumbnails>,
    on_pointer: impl Fn(PointerEvent) -> Message + 'a,
    on_resize: impl Fn(Size) -> Message + 'a,
) -> Element<'a, Message> {
    let style = bar.style();
    let lane_height = style.preview_lane_height();

    let lane: Element<'a, Message> = match bar.geometry().preview {
        Some(preview) => {
            let content: Element<'a, Message> =
                match thumbnails.and_then(|t| t.frame_at(bar.progress())) {
                    Some(handle) => image(handle.clone())
                        .width(preview.width)
                        .height(preview.height)
                        .content_fit(ContentFit::Cover)
                        .into(),
                    None => Space::new().width(preview.width).height(preview.height).into(),
                };

            let placeholder = style.preview_color;
            let thumbnail = container(content)
                .width(preview.width)
                .height(preview.height)
                .clip(true)
                .style(move |_theme| container::Style {
                    background: Some(Background::Color(placeholder)),
                    ..Default::default()
                });

            container(thumbnail)
                .padding(Padding::new(0.0).left(preview.x))
                .width(Fill)
                .height(lane_height)
                .into()
        }
        None => Space::new().width(Fill).height(lane_height).into(),
    };

    column![lane, SeekTrack::new(bar, on_pointer).on_resize(on_resize)]
        .width(Fill)
        .into()
}
