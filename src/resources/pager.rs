//! Page-by-page traversal of resource listings.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::resources::errors::ResourcesError;

/// The page envelope every pageable Resource Manager operation returns.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct PageEnvelope<T> {
    #[serde(default)]
    value: Vec<T>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

/// An explicit-pull pager over a listing operation.
///
/// Like the poller, the pager performs no work on its own: each call to
/// [`Pager::next_page`] issues exactly one request, returning that page's
/// items, and the caller controls the loop. The first request targets the
/// listing path with its query parameters; subsequent requests follow the
/// absolute `nextLink` URLs the service returns until none remains.
///
/// # Example
///
/// ```rust,ignore
/// let mut pager = client.list_by_resource_group("sub-1", "rg-1");
/// while let Some(page) = pager.next_page().await? {
///     for resource in page {
///         println!("{:?}", resource.name);
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Pager<T> {
    client: HttpClient,
    next_url: Option<String>,
    /// Query parameters for the first request only; `nextLink` URLs arrive
    /// with their query string already applied.
    first_query: Option<HashMap<String, String>>,
    _item: std::marker::PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> Pager<T> {
    pub(crate) fn new(
        client: HttpClient,
        path: impl Into<String>,
        query: HashMap<String, String>,
    ) -> Self {
        Self {
            client,
            next_url: Some(path.into()),
            first_query: Some(query),
            _item: std::marker::PhantomData,
        }
    }

    /// Returns `true` if another page may be available.
    #[must_use]
    pub const fn more(&self) -> bool {
        self.next_url.is_some()
    }

    /// Fetches the next page, or returns `None` once the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ResourcesError`] if the request fails or the page envelope
    /// cannot be decoded. The pager keeps its position, so a failed fetch can
    /// be retried by calling `next_page` again.
    pub async fn next_page(&mut self) -> Result<Option<Vec<T>>, ResourcesError> {
        let Some(url) = self.next_url.clone() else {
            return Ok(None);
        };

        let mut builder = HttpRequest::builder(HttpMethod::Get, &url);
        if let Some(query) = &self.first_query {
            builder = builder.query(query.clone());
        }
        let request = builder.build().map_err(HttpError::from)?;

        let response = self.client.request(request).await?;
        let page: PageEnvelope<T> =
            serde_json::from_value(response.body).map_err(|e| ResourcesError::Decode {
                reason: e.to_string(),
            })?;

        self.first_query = None;
        self.next_url = page.next_link;
        Ok(Some(page.value))
    }
}
