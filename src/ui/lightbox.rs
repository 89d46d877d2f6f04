// SPDX-License-Identifier: MPL-2.0
//! Full-window lightbox drawn over the gallery.
//!
//! Layers, bottom to top:
//! 1. Backdrop with the current image; a click or tap on it closes, a swipe
//!    across it navigates.
//! 2. Previous and next arrows on the left and right edges.
//! 3. Close button in the top-right corner.
//!
//! Buttons capture their presses so they never reach the backdrop.

use crate::domain::gallery::GalleryItem;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::media::remote_image::{ImageState, RemoteImageCache};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Image, mouse_area, tooltip, Column, Container, Stack, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: &'a GalleryItem,
    /// Zero-based position in the full item list.
    pub index: usize,
    pub total: usize,
    pub images: &'a RemoteImageCache,
}

/// Render the lightbox overlay.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match ctx.images.state(&ctx.item.image_url) {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Contain)
            .into(),
        Some(ImageState::Failed) => Text::new(ctx.i18n.tr("image-failed")).into(),
        Some(ImageState::Loading) | None => Text::new(ctx.i18n.tr("image-loading")).into(),
    };

    let position = ctx.i18n.tr_with_args(
        "lightbox-position",
        &[
            ("position", (ctx.index + 1) as i64),
            ("total", ctx.total as i64),
        ],
    );
    let caption = Container::new(
        Text::new(format!("{}  {}", ctx.item.title, position)).size(typography::BODY),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::caption);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Container::new(picture)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(caption);

    let backdrop = mouse_area(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding([spacing::MD, sizing::LIGHTBOX_BUTTON + spacing::XL])
            .style(styles::overlay::backdrop),
    )
    .on_release(Message::BackdropReleased);

    let previous = edge_button("‹", ctx.i18n.tr("lightbox-previous"), Message::Previous);
    let next = edge_button("›", ctx.i18n.tr("lightbox-next"), Message::Next);
    let close = edge_button("×", ctx.i18n.tr("lightbox-close"), Message::CloseLightbox);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(anchored(previous, Horizontal::Left, Vertical::Center))
        .push(anchored(next, Horizontal::Right, Vertical::Center))
        .push(anchored(close, Horizontal::Right, Vertical::Top))
        .into()
}

/// Square overlay button with a localized tooltip.
fn edge_button<'a>(glyph: &'a str, label: String, message: Message) -> Element<'a, Message> {
    let control = button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::LIGHTBOX_BUTTON)
    .height(sizing::LIGHTBOX_BUTTON)
    .padding(0)
    .style(styles::button::overlay(
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(message);

    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::caption),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .into()
}

/// Positions `element` inside a full-size transparent layer.
fn anchored<'a>(
    element: Element<'a, Message>,
    horizontal: Horizontal,
    vertical: Vertical,
) -> Element<'a, Message> {
    Container::new(element)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(horizontal)
        .align_y(vertical)
        .into()
}
