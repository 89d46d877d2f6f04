// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`Category`]: the closed set of portfolio categories and route resolution
//! - [`GalleryItem`]: one fetched image record
//! - [`Pagination`]: page geometry over an item list

pub mod category;
pub mod item;
pub mod pagination;

pub use category::{Category, RouteResolution, UnknownCategory};
pub use item::GalleryItem;
pub use pagination::{Pagination, PAGE_SIZE};
