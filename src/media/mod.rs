// SPDX-License-Identifier: MPL-2.0
//! Remote media handling.
//!
//! Gallery images live behind HTTP URLs; [`remote_image`] downloads them on
//! demand and keeps decoded handles in a bounded cache.

pub mod remote_image;

pub use remote_image::{ImageDownloader, ImageState, RemoteImageCache};
