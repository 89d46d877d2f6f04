// SPDX-License-Identifier: MPL-2.0
//! Gallery item fetch port.
//!
//! This module defines the [`ItemFetcher`] trait through which the gallery
//! requests the items of one category from a remote document store.
//!
//! # Design Notes
//!
//! - Every failure mode (transport, HTTP status, malformed body) collapses
//!   into the single [`FetchError`] kind; its detail is only for logs
//! - The returned future is `'static` so it can be handed to an Iced `Task`
//! - No cancellation: callers discard stale results themselves

use crate::domain::gallery::{Category, GalleryItem};
use futures_util::future::BoxFuture;
use thiserror::Error;

// =============================================================================
// FetchError
// =============================================================================

/// Failure to fetch gallery items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to fetch gallery items: {detail}")]
pub struct FetchError {
    detail: String,
}

impl FetchError {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// Diagnostic detail, not meant for display to users.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    /// Returns the i18n message key shown to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        "gallery-load-error"
    }
}

// =============================================================================
// ItemFetcher
// =============================================================================

/// Source of gallery items, filtered by category.
pub trait ItemFetcher: Send + Sync {
    /// Fetches every item filed under `category`.
    fn fetch_items(&self, category: Category)
        -> BoxFuture<'static, Result<Vec<GalleryItem>, FetchError>>;
}
