//! Wire models for the generic resources client.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceId;

/// A generic Resource Manager resource.
///
/// The shape shared by every tracked resource: identity, type, location, and
/// tags, with the service-specific payload carried opaquely in `properties`.
///
/// # Example
///
/// ```rust
/// use azure_arm::resources::GenericResource;
/// use serde_json::json;
///
/// let resource: GenericResource = serde_json::from_value(json!({
///     "id": "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1",
///     "name": "net-1",
///     "type": "Microsoft.Network/virtualNetworks",
///     "location": "westus2",
///     "properties": {"addressSpace": {"addressPrefixes": ["10.0.0.0/16"]}}
/// }))
/// .unwrap();
///
/// assert_eq!(resource.name.as_deref(), Some("net-1"));
/// assert_eq!(resource.id.as_ref().unwrap().resource_group_name(), Some("rg-1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericResource {
    /// The fully qualified resource ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ResourceId>,

    /// The resource name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The resource type (e.g. `Microsoft.Network/virtualNetworks`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// The geographic location of the resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,

    /// The service-specific resource payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// One page of a resource listing.
///
/// The service returns listings page by page; `next_link` carries the
/// absolute URL of the following page until the listing is exhausted.
#[derive(Clone, Debug, Deserialize)]
pub struct ResourceListResult {
    /// The resources on this page.
    #[serde(default)]
    pub value: Vec<GenericResource>,

    /// The URL of the next page, absent on the last page.
    #[serde(rename = "nextLink")]
    pub next_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_parses_resource_id() {
        let resource: GenericResource = serde_json::from_value(json!({
            "id": "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Web/sites/app-1",
            "name": "app-1",
            "type": "Microsoft.Web/sites",
            "location": "eastus",
            "tags": {"env": "prod"}
        }))
        .unwrap();

        let id = resource.id.unwrap();
        assert_eq!(id.subscription_id(), Some("sub-1"));
        assert_eq!(id.name(), "app-1");
        assert_eq!(resource.tags.unwrap().get("env"), Some(&"prod".to_string()));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let resource = GenericResource {
            location: Some("westus2".to_string()),
            ..GenericResource::default()
        };
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json, json!({"location": "westus2"}));
    }

    #[test]
    fn test_malformed_id_fails_deserialization() {
        let result: Result<GenericResource, _> =
            serde_json::from_value(json!({"id": "/providers"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_result_defaults_to_empty_page() {
        let page: ResourceListResult = serde_json::from_value(json!({})).unwrap();
        assert!(page.value.is_empty());
        assert!(page.next_link.is_none());
    }

    #[test]
    fn test_list_result_carries_next_link() {
        let page: ResourceListResult = serde_json::from_value(json!({
            "value": [{"name": "a"}, {"name": "b"}],
            "nextLink": "https://management.azure.com/page/2"
        }))
        .unwrap();
        assert_eq!(page.value.len(), 2);
        assert_eq!(
            page.next_link.as_deref(),
            Some("https://management.azure.com/page/2")
        );
    }
}
