// SPDX-License-Identifier: MPL-2.0
//! Category navigation row.
//!
//! One tab per [`Category`]; the active tab is highlighted and selecting a
//! tab asks the gallery to load that category.

use crate::domain::gallery::Category;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the category bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Option<Category>,
    /// Number of loaded items, once the active category is ready.
    pub item_count: Option<usize>,
}

/// Render the heading and category tabs.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut tabs = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center);

    for category in Category::ALL {
        let label = Text::new(ctx.i18n.tr(category.i18n_key())).size(typography::BODY);
        let tab = button(label)
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::SelectCategory(category));
        let tab = if ctx.active == Some(category) {
            tab.style(styles::button::selected)
        } else {
            tab.style(styles::button::tab)
        };
        tabs = tabs.push(tab);
    }

    let heading = ctx
        .active
        .map(|category| ctx.i18n.tr(category.i18n_key()))
        .unwrap_or_else(|| ctx.i18n.tr("nav-heading"));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(tabs)
        .push(Text::new(heading).size(typography::TITLE_LG));

    if let Some(count) = ctx.item_count.filter(|count| *count > 0) {
        column = column.push(
            Text::new(ctx.i18n.tr_with_args("gallery-item-count", &[("count", count as i64)]))
                .size(typography::CAPTION),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .into()
}
