// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a portfolio gallery built with the Iced GUI framework.
//!
//! Works are fetched per category from an Appwrite collection, shown as a
//! paginated grid, and opened in a lightbox with keyboard, button, and swipe
//! navigation.
//!
//! # Architecture
//!
//! - [`domain`] - Categories, items, and pagination math
//! - [`gallery`] - The gallery state controller, lightbox, swipe, and scroll lock
//! - [`application`] - Port traits implemented by infrastructure
//! - [`infrastructure`] - Appwrite HTTP adapter
//! - [`media`] - Remote image download and cache
//! - [`app`] - Iced application shell, configuration, and paths
//! - [`ui`] - View components and styles
//! - [`i18n`] - Fluent localization

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
