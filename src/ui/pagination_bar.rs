// SPDX-License-Identifier: MPL-2.0
//! Numbered page buttons under the grid.

use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_page: usize,
    pub page_count: usize,
}

/// Renders one button per page (1-based). Callers only render the bar when
/// the items exceed a single page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    for page in 1..=ctx.page_count {
        let page_button = button(Text::new(page.to_string()).size(typography::BODY))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::Paginate(page));
        let page_button = if page == ctx.current_page {
            page_button.style(styles::button::selected)
        } else {
            page_button.style(styles::button::tab)
        };
        row = row.push(page_button);
    }

    let status = Text::new(ctx.i18n.tr_with_args(
        "pagination-status",
        &[
            ("current", ctx.current_page as i64),
            ("total", ctx.page_count as i64),
        ],
    ))
    .size(typography::CAPTION);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(row)
            .push(status),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(Horizontal::Center)
    .into()
}
