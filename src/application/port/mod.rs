// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`fetch`]: Category-filtered gallery item retrieval
//!
//! # Example
//!
//! ```ignore
//! use iced_folio::application::port::ItemFetcher;
//! use iced_folio::domain::gallery::Category;
//!
//! async fn count(fetcher: &impl ItemFetcher) -> usize {
//!     fetcher
//!         .fetch_items(Category::Branding)
//!         .await
//!         .map(|items| items.len())
//!         .unwrap_or(0)
//! }
//! ```

pub mod fetch;

pub use fetch::{FetchError, ItemFetcher};
