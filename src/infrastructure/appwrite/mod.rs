// SPDX-License-Identifier: MPL-2.0
//! Appwrite document database adapter.
//!
//! Implements [`ItemFetcher`] by listing the documents of one collection
//! through the Appwrite REST API, filtered on the `category` attribute.
//!
//! # Request Shape
//!
//! ```text
//! GET {endpoint}/databases/{database_id}/collections/{collection_id}/documents
//!     ?queries[]={"method":"equal","attribute":"category","values":["branding"]}
//!     &queries[]={"method":"limit","values":[100]}
//! X-Appwrite-Project: {project_id}
//! ```

pub mod query;

use crate::application::port::{FetchError, ItemFetcher};
use crate::domain::gallery::{Category, GalleryItem};
use futures_util::future::BoxFuture;
use query::Query;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the Appwrite project identifier.
pub const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Document attribute the gallery filters on.
pub const CATEGORY_ATTRIBUTE: &str = "category";

/// Upper bound on a single list request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for the Appwrite collection holding portfolio items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppwriteSettings {
    /// API root, e.g. `https://cloud.appwrite.io/v1`.
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Maximum documents per category.
    pub query_limit: u32,
    /// Pause before each request so the loading state is visible.
    pub fetch_delay: Duration,
}

impl AppwriteSettings {
    /// Returns the name of the first missing setting, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("endpoint", &self.endpoint),
            ("project_id", &self.project_id),
            ("database_id", &self.database_id),
            ("collection_id", &self.collection_id),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// URL of the collection's document list.
    #[must_use]
    pub fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint.trim_end_matches('/'),
            self.database_id,
            self.collection_id
        )
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct DocumentList {
    #[serde(default)]
    total: u64,
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(rename = "$id")]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(rename = "imageUrl")]
    image_url: String,
    #[serde(default)]
    category: String,
}

impl From<Document> for GalleryItem {
    fn from(doc: Document) -> Self {
        GalleryItem {
            id: doc.id,
            title: doc.title,
            image_url: doc.image_url,
            category: doc.category,
        }
    }
}

/// Decodes a document list response body.
pub fn decode_documents(body: &[u8]) -> Result<Vec<GalleryItem>, FetchError> {
    let list: DocumentList = serde_json::from_slice(body)
        .map_err(|e| FetchError::new(format!("malformed document list: {e}")))?;
    if list.total > list.documents.len() as u64 {
        tracing::debug!(
            total = list.total,
            returned = list.documents.len(),
            "document list truncated by query limit"
        );
    }
    Ok(list.documents.into_iter().map(GalleryItem::from).collect())
}

// =============================================================================
// Fetcher
// =============================================================================

/// [`ItemFetcher`] backed by the Appwrite REST API.
#[derive(Debug, Clone)]
pub struct AppwriteFetcher {
    client: reqwest::Client,
    settings: Arc<AppwriteSettings>,
}

impl AppwriteFetcher {
    pub fn new(settings: AppwriteSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("IcedFolio/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::new(e.to_string()))?;
        Ok(Self {
            client,
            settings: Arc::new(settings),
        })
    }
}

impl ItemFetcher for AppwriteFetcher {
    fn fetch_items(
        &self,
        category: Category,
    ) -> BoxFuture<'static, Result<Vec<GalleryItem>, FetchError>> {
        let client = self.client.clone();
        let settings = Arc::clone(&self.settings);
        Box::pin(async move {
            if !settings.fetch_delay.is_zero() {
                tokio::time::sleep(settings.fetch_delay).await;
            }
            list_documents(&client, &settings, category).await
        })
    }
}

async fn list_documents(
    client: &reqwest::Client,
    settings: &AppwriteSettings,
    category: Category,
) -> Result<Vec<GalleryItem>, FetchError> {
    if let Some(field) = settings.missing_field() {
        return Err(FetchError::new(format!("appwrite {field} is not configured")));
    }

    let queries = [
        ("queries[]", Query::equal(CATEGORY_ATTRIBUTE, category.slug()).to_param()),
        ("queries[]", Query::limit(settings.query_limit).to_param()),
    ];

    let response = client
        .get(settings.documents_url())
        .header(PROJECT_HEADER, &settings.project_id)
        .query(&queries)
        .send()
        .await
        .map_err(|e| FetchError::new(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::new(format!(
            "HTTP status: {}",
            response.status()
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::new(e.to_string()))?;
    decode_documents(&body)
}
