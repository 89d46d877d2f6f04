// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! component takes a borrowed `ViewContext` and emits gallery messages.
//!
//! # Components
//!
//! - [`category_bar`] - Heading and category tabs
//! - [`gallery_grid`] - Skeleton, notices, and the paged image grid
//! - [`pagination_bar`] - Numbered page buttons
//! - [`lightbox`] - Full-window image overlay
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom widgets (scroll guard for the locked page)

pub mod category_bar;
pub mod design_tokens;
pub mod gallery_grid;
pub mod lightbox;
pub mod pagination_bar;
pub mod styles;
pub mod widgets;
