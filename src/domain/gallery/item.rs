// SPDX-License-Identifier: MPL-2.0
//! Gallery item value object.

/// A single portfolio image record.
///
/// Items are immutable once fetched and owned by the gallery for the
/// lifetime of one category view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Opaque unique identifier assigned by the document store.
    pub id: String,
    /// Human-readable title, used as the image's alternative text.
    pub title: String,
    /// Absolute URL of the full-size image.
    pub image_url: String,
    /// Category slug the record was filed under.
    pub category: String,
}

impl GalleryItem {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            category: category.into(),
        }
    }
}
