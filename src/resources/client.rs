//! The generic resources client.

use std::collections::HashMap;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{ApiVersion, ArmConfig};
use crate::lro::{Poller, PollingMode};
use crate::resource::ResourceId;
use crate::resources::errors::ResourcesError;
use crate::resources::models::GenericResource;
use crate::resources::pager::Pager;

/// Client for generic resource operations, addressed by resource ID.
///
/// This is the hand-written counterpart of the per-service generated clients:
/// it covers the operations every service shares — read, create-or-update,
/// delete, list — against any resource identified by a [`ResourceId`], and
/// demonstrates how clients sit on top of the transport and the
/// long-running-operation poller.
///
/// # Example
///
/// ```rust,ignore
/// use std::time::Duration;
/// use azure_arm::{ArmConfig, ApiVersion, AccessToken};
/// use azure_arm::resource::ResourceId;
/// use azure_arm::resources::ResourcesClient;
///
/// let config = ArmConfig::builder()
///     .api_version(ApiVersion::new("2021-04-01")?)
///     .access_token(AccessToken::new(token)?)
///     .build()?;
/// let client = ResourcesClient::new(&config);
///
/// let id = ResourceId::parse(
///     "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1",
/// )?;
///
/// let resource = client.get_by_id(&id).await?;
///
/// let mut poller = client.begin_delete(&id).await?;
/// poller.poll_until_done(Duration::from_secs(5)).await?;
/// ```
#[derive(Clone, Debug)]
pub struct ResourcesClient {
    http: HttpClient,
    endpoint: String,
    api_version: ApiVersion,
}

impl ResourcesClient {
    /// Creates a new resources client from the given configuration.
    #[must_use]
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            http: HttpClient::new(config),
            endpoint: config.endpoint().as_ref().to_string(),
            api_version: config.api_version().clone(),
        }
    }

    /// Gets a resource by its fully qualified ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourcesError`] if the request fails or the response does
    /// not decode into a [`GenericResource`].
    pub async fn get_by_id(&self, id: &ResourceId) -> Result<GenericResource, ResourcesError> {
        let request = HttpRequest::builder(HttpMethod::Get, id.to_string())
            .query_param("api-version", self.api_version.as_ref())
            .build()
            .map_err(HttpError::from)?;

        let response = self.http.request(request).await?;
        serde_json::from_value(response.body).map_err(|e| ResourcesError::Decode {
            reason: e.to_string(),
        })
    }

    /// Begins creating or replacing a resource by its fully qualified ID.
    ///
    /// The returned poller tracks the provisioning state embedded in the
    /// resource body; drive it with
    /// [`poll_until_done`](Poller::poll_until_done) or step-by-step with
    /// [`poll`](Poller::poll).
    ///
    /// # Errors
    ///
    /// Returns [`ResourcesError`] if the initiating request is rejected or
    /// the response cannot seed a poller.
    pub async fn begin_create_or_update(
        &self,
        id: &ResourceId,
        resource: GenericResource,
    ) -> Result<Poller<GenericResource>, ResourcesError> {
        let body = serde_json::to_value(&resource).map_err(|e| ResourcesError::Decode {
            reason: e.to_string(),
        })?;
        let request = HttpRequest::builder(HttpMethod::Put, id.to_string())
            .query_param("api-version", self.api_version.as_ref())
            .body(body)
            .build()
            .map_err(HttpError::from)?;

        let response = self.http.request(request).await?;
        let poller = Poller::from_initial_response(
            self.http.clone(),
            HttpMethod::Put,
            self.absolute_url(id),
            &response,
            PollingMode::ProvisioningState,
        )?;
        Ok(poller)
    }

    /// Begins deleting a resource by its fully qualified ID.
    ///
    /// Deletions poll the `Location` header; the final payload, when the
    /// service returns one, is surfaced as raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourcesError`] if the initiating request is rejected or
    /// the response cannot seed a poller.
    pub async fn begin_delete(
        &self,
        id: &ResourceId,
    ) -> Result<Poller<serde_json::Value>, ResourcesError> {
        let request = HttpRequest::builder(HttpMethod::Delete, id.to_string())
            .query_param("api-version", self.api_version.as_ref())
            .build()
            .map_err(HttpError::from)?;

        let response = self.http.request(request).await?;
        let poller = Poller::from_initial_response(
            self.http.clone(),
            HttpMethod::Delete,
            self.absolute_url(id),
            &response,
            PollingMode::Location,
        )?;
        Ok(poller)
    }

    /// Lists the resources in a resource group, page by page.
    #[must_use]
    pub fn list_by_resource_group(
        &self,
        subscription_id: &str,
        resource_group: &str,
    ) -> Pager<GenericResource> {
        let path =
            format!("/subscriptions/{subscription_id}/resourceGroups/{resource_group}/resources");
        let mut query = HashMap::new();
        query.insert("api-version".to_string(), self.api_version.as_ref().to_string());
        Pager::new(self.http.clone(), path, query)
    }

    /// The absolute URL of a resource, used to seed pollers with the
    /// original request URL for provisioning-state polling and final GETs.
    fn absolute_url(&self, id: &ResourceId) -> String {
        format!(
            "{}{}?api-version={}",
            self.endpoint, id, self.api_version
        )
    }
}

// Verify ResourcesClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcesClient>();
};
