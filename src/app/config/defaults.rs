// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default pause before a category fetch, so the loading state is visible.
pub const DEFAULT_FETCH_DELAY_MS: u64 = 100;

/// Maximum accepted fetch delay.
pub const MAX_FETCH_DELAY_MS: u64 = 5_000;

pub use crate::media::remote_image::DEFAULT_MAX_IMAGES as DEFAULT_IMAGE_CACHE_ENTRIES;

// ==========================================================================
// Appwrite Defaults
// ==========================================================================

/// Default Appwrite API root.
pub const DEFAULT_APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Default maximum documents requested per category.
pub const DEFAULT_QUERY_LIMIT: u32 = 100;

/// Appwrite rejects larger limits.
pub const MAX_QUERY_LIMIT: u32 = 5_000;

// ==========================================================================
// Environment Overrides
// ==========================================================================

pub const ENV_APPWRITE_ENDPOINT: &str = "ICED_FOLIO_APPWRITE_ENDPOINT";
pub const ENV_APPWRITE_PROJECT: &str = "ICED_FOLIO_APPWRITE_PROJECT";
pub const ENV_APPWRITE_DATABASE: &str = "ICED_FOLIO_APPWRITE_DATABASE";
pub const ENV_APPWRITE_COLLECTION: &str = "ICED_FOLIO_APPWRITE_COLLECTION";
