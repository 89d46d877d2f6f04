// SPDX-License-Identifier: MPL-2.0
//! Gallery body: skeleton while loading, notices for empty and failed
//! loads, otherwise the current page as a grid of image cells.

use crate::domain::gallery::GalleryItem;
use crate::gallery::{GalleryController, LoadPhase, Message, SKELETON_CELLS};
use crate::i18n::fluent::I18n;
use crate::media::remote_image::{ImageState, RemoteImageCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, image::Image, Column, Container, Row, Space, Text},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub images: &'a RemoteImageCache,
}

/// Render the gallery body for the current load phase.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.gallery.phase() {
        None | Some(LoadPhase::Loading) => skeleton(),
        Some(LoadPhase::Failed(error)) => notice(
            ctx.i18n.tr(error.i18n_key()),
            Some(styles::container::error_notice),
        ),
        Some(LoadPhase::Ready) if ctx.gallery.items().is_empty() => {
            notice(ctx.i18n.tr("gallery-empty"), None)
        }
        Some(LoadPhase::Ready) => grid(&ctx),
    }
}

fn skeleton<'a>() -> Element<'a, Message> {
    let cells = (0..SKELETON_CELLS).map(|_| {
        Container::new(Space::new())
            .width(Length::Fill)
            .height(sizing::CELL_HEIGHT)
            .style(styles::container::skeleton)
            .into()
    });
    rows(cells.collect())
}

fn notice<'a>(
    message: String,
    style: Option<fn(&iced::Theme) -> iced::widget::container::Style>,
) -> Element<'a, Message> {
    let container = Container::new(Text::new(message).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center);
    match style {
        Some(style) => container.style(style).into(),
        None => container.into(),
    }
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let offset = ctx.gallery.page_offset();
    let cells = ctx
        .gallery
        .page_slice()
        .iter()
        .enumerate()
        .map(|(position, item)| cell(ctx, item, offset + position))
        .collect();
    rows(cells)
}

/// One clickable cell; `index` addresses the full item list.
fn cell<'a>(ctx: &ViewContext<'a>, item: &'a GalleryItem, index: usize) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.images.state(&item.image_url) {
        Some(ImageState::Ready(handle)) => Image::new(handle.clone())
            .width(Length::Fill)
            .height(sizing::CELL_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageState::Failed) => placeholder(ctx.i18n.tr("image-failed")),
        Some(ImageState::Loading) | None => placeholder(ctx.i18n.tr("image-loading")),
    };

    button(content)
        .width(Length::Fill)
        .padding(0)
        .style(styles::button::cell)
        .on_press(Message::OpenLightbox(index))
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(sizing::CELL_HEIGHT)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::image_placeholder)
        .into()
}

/// Lays cells out in rows of [`sizing::GRID_COLUMNS`], padding the last row
/// so every cell keeps the same width.
fn rows<'a>(cells: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for cell in cells {
        row = row.push(cell);
        in_row += 1;
        if in_row == sizing::GRID_COLUMNS {
            column = column.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }

    if in_row > 0 {
        for _ in in_row..sizing::GRID_COLUMNS {
            row = row.push(Space::new().width(Length::Fill));
        }
        column = column.push(row);
    }

    Container::new(column)
        .width(Length::Fill)
        .padding([0.0, spacing::LG])
        .into()
}
