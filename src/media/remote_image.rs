// SPDX-License-Identifier: MPL-2.0
//! Remote image cache for gallery thumbnails and the lightbox.
//!
//! Images are downloaded over HTTP on first display and kept in a bounded
//! LRU cache keyed by URL.
//!
//! # Design
//!
//! - **Request once**: a URL is marked [`ImageState::Loading`] before its
//!   download starts, so repeated renders do not trigger duplicate requests
//! - **LRU eviction**: least recently displayed images are evicted first
//! - **Failures are cached**: a broken URL renders a placeholder instead of
//!   being retried on every frame

use crate::application::port::FetchError;
use iced::widget::image::Handle;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Default number of cached images.
pub const DEFAULT_MAX_IMAGES: usize = 96;

/// Minimum number of cached images (a little more than one page plus the lightbox).
pub const MIN_MAX_IMAGES: usize = 16;

/// Maximum number of cached images.
pub const MAX_MAX_IMAGES: usize = 512;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Download state of one image.
#[derive(Debug, Clone)]
pub enum ImageState {
    Loading,
    Ready(Handle),
    Failed,
}

/// Statistics about cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Downloads started.
    pub requests: u64,
    /// Requests served by an existing entry.
    pub hits: u64,
    /// Downloads that failed.
    pub failures: u64,
}

/// LRU cache of remote images.
#[derive(Debug)]
pub struct RemoteImageCache {
    cache: LruCache<String, ImageState>,
    stats: CacheStats,
}

impl RemoteImageCache {
    /// Creates a cache holding up to `max_images` entries (clamped to the supported range).
    #[must_use]
    pub fn new(max_images: usize) -> Self {
        let capacity = NonZeroUsize::new(max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Marks `url` as wanted.
    ///
    /// Returns `true` when the caller should start a download; `false` when
    /// the image is already cached or in flight.
    pub fn request(&mut self, url: &str) -> bool {
        if self.cache.get(url).is_some() {
            self.stats.hits += 1;
            return false;
        }
        self.cache.put(url.to_string(), ImageState::Loading);
        self.stats.requests += 1;
        true
    }

    /// Records the outcome of a download.
    pub fn complete(&mut self, url: String, result: Result<Vec<u8>, String>) {
        let state = match result {
            Ok(bytes) => ImageState::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, error = %err, "image download failed");
                self.stats.failures += 1;
                ImageState::Failed
            }
        };
        self.cache.put(url, state);
    }

    /// Returns the state of `url` without touching LRU order.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.cache.peek(url)
    }

    /// Returns the decoded handle of `url`, if downloaded.
    #[must_use]
    pub fn handle(&self, url: &str) -> Option<&Handle> {
        match self.state(url) {
            Some(ImageState::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl Default for RemoteImageCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_IMAGES)
    }
}

/// Downloads image bytes over HTTP.
#[derive(Debug, Clone)]
pub struct ImageDownloader {
    client: reqwest::Client,
}

impl ImageDownloader {
    pub fn new() -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
            .timeout(DOWNLOAD_TIMEOUT)
            .build()
            .map_err(|e| FetchError::new(e.to_string()))?;
        Ok(Self { client })
    }

    /// Downloads `url`, failing on transport errors and non-success statuses.
    pub async fn download(self, url: String) -> Result<Vec<u8>, String> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("HTTP status: {}", response.status()));
        }

        let bytes = response.bytes().await.map_err(|e| e.to_string())?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_starts_download() {
        let mut cache = RemoteImageCache::default();
        assert!(cache.request("https://cdn.example.com/a.jpg"));
        assert!(matches!(
            cache.state("https://cdn.example.com/a.jpg"),
            Some(ImageState::Loading)
        ));
    }

    #[test]
    fn repeated_request_is_deduplicated() {
        let mut cache = RemoteImageCache::default();
        assert!(cache.request("a"));
        assert!(!cache.request("a"));
        assert_eq!(cache.stats().requests, 1);
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn completed_download_exposes_handle() {
        let mut cache = RemoteImageCache::default();
        cache.request("a");
        cache.complete("a".to_string(), Ok(vec![0x89, b'P', b'N', b'G']));
        assert!(cache.handle("a").is_some());
    }

    #[test]
    fn failed_download_is_not_retried() {
        let mut cache = RemoteImageCache::default();
        cache.request("a");
        cache.complete("a".to_string(), Err("HTTP status: 404 Not Found".to_string()));
        assert!(matches!(cache.state("a"), Some(ImageState::Failed)));
        assert!(!cache.request("a"));
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(RemoteImageCache::new(0).capacity(), MIN_MAX_IMAGES);
        assert_eq!(RemoteImageCache::new(10_000).capacity(), MAX_MAX_IMAGES);
    }

    #[test]
    fn least_recently_requested_image_is_evicted() {
        let mut cache = RemoteImageCache::new(MIN_MAX_IMAGES);
        for i in 0..MIN_MAX_IMAGES {
            cache.request(&format!("img-{i}"));
        }
        // Touch the oldest entry so the second one becomes least recent.
        cache.request("img-0");
        cache.request("img-new");

        assert!(cache.state("img-0").is_some());
        assert!(cache.state("img-1").is_none());
        assert_eq!(cache.len(), MIN_MAX_IMAGES);
    }
}
