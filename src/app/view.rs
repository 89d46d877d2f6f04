// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (category bar, grid, pagination) sits in a scrollable wrapped
//! by a [`ScrollGuard`](crate::ui::widgets::ScrollGuard). While the
//! lightbox holds the scroll lock, the page is frozen and the lightbox is
//! stacked on top.

use super::Message;
use crate::gallery::{GalleryController, LoadPhase};
use crate::i18n::fluent::I18n;
use crate::media::remote_image::RemoteImageCache;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::widgets::scroll_guard;
use crate::ui::{category_bar, gallery_grid, lightbox, pagination_bar};
use iced::{
    alignment::Horizontal,
    widget::{scrollable, Column, Container, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryController,
    pub images: &'a RemoteImageCache,
    /// i18n key of a startup warning to show above the page.
    pub notice: Option<&'a str>,
}

/// Renders the gallery page and, when open, the lightbox over it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new().width(Length::Fill).spacing(spacing::MD);

    if let Some(key) = ctx.notice {
        page = page.push(
            Container::new(Text::new(ctx.i18n.tr(key)).size(typography::CAPTION))
                .width(Length::Fill)
                .padding(spacing::XS)
                .align_x(Horizontal::Center),
        );
    }

    page = page.push(
        category_bar::view(category_bar::ViewContext {
            i18n: ctx.i18n,
            active: ctx.gallery.category(),
            item_count: (ctx.gallery.phase() == Some(&LoadPhase::Ready))
                .then(|| ctx.gallery.items().len()),
        })
        .map(Message::Gallery),
    );

    page = page.push(
        gallery_grid::view(gallery_grid::ViewContext {
            i18n: ctx.i18n,
            gallery: ctx.gallery,
            images: ctx.images,
        })
        .map(Message::Gallery),
    );

    if ctx.gallery.shows_pagination() {
        page = page.push(
            pagination_bar::view(pagination_bar::ViewContext {
                i18n: ctx.i18n,
                current_page: ctx.gallery.current_page(),
                page_count: ctx.gallery.page_count(),
            })
            .map(Message::Gallery),
        );
    }

    let locked = ctx.gallery.scroll_lock().is_locked();
    let page = scroll_guard(
        scrollable(page.padding([spacing::MD, 0.0]))
            .width(Length::Fill)
            .height(Length::Fill),
        locked,
    );

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let (Some(item), Some(index)) = (ctx.gallery.lightbox_item(), ctx.gallery.lightbox_index()) {
        stack = stack.push(
            lightbox::view(lightbox::ViewContext {
                i18n: ctx.i18n,
                item,
                index,
                total: ctx.gallery.items().len(),
                images: ctx.images,
            })
            .map(Message::Gallery),
        );
    }

    stack.into()
}
