//! Hierarchical resource identifier parsing and formatting.
//!
//! Resource Manager identifies every resource with a `/`-delimited path such
//! as:
//!
//! ```text
//! /subscriptions/{id}/resourceGroups/{name}/providers/{namespace}/{type}/{name}
//! ```
//!
//! [`ResourceId::parse`] turns such a path into a navigable tree: one node per
//! recognized segment pair, each holding a reference to its already-built
//! parent, terminating at the process-wide [`ROOT_RESOURCE_ID`]
//! sentinel. Nodes are immutable after construction and memoize their string
//! form, so [`ResourceId`] values are freely shareable across threads and
//! `to_string` never recomputes.
//!
//! # Example
//!
//! ```rust
//! use azure_arm::resource::ResourceId;
//!
//! let id = ResourceId::parse(
//!     "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1",
//! )
//! .unwrap();
//!
//! assert_eq!(id.name(), "net-1");
//! assert_eq!(id.subscription_id(), Some("sub-1"));
//! assert_eq!(id.resource_group_name(), Some("rg-1"));
//! assert_eq!(id.resource_type().namespace(), "Microsoft.Network");
//!
//! // Round-trips exactly
//! assert_eq!(
//!     id.to_string(),
//!     "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1",
//! );
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::resource::errors::ParseError;
use crate::resource::resource_type::ResourceType;

/// The root sentinel terminating every parent chain.
///
/// A single frozen process-wide value with no subscription, group, or name
/// set. Its parent is itself, so walking `parent()` past the root is a
/// stable no-op.
pub static ROOT_RESOURCE_ID: LazyLock<ResourceId> = LazyLock::new(ResourceId::root);

/// A parsed, immutable resource identifier.
///
/// Each node represents one recognized segment pair of the path and links
/// upward to its parent; the chain ends at [`ROOT_RESOURCE_ID`]. The
/// canonical string form is computed once at parse time, making `to_string`
/// free and safe for unlimited concurrent readers.
///
/// Equality and hashing are by string form.
#[derive(Clone, Debug)]
pub struct ResourceId {
    parent: Option<Arc<ResourceId>>,
    subscription_id: Option<String>,
    resource_group_name: Option<String>,
    provider: Option<String>,
    location: Option<String>,
    resource_type: ResourceType,
    name: String,
    is_child: bool,
    string_value: String,
}

impl ResourceId {
    const SUBSCRIPTIONS_KEY: &'static str = "subscriptions";
    const RESOURCE_GROUPS_KEY: &'static str = "resourceGroups";
    const PROVIDERS_KEY: &'static str = "providers";
    const LOCATIONS_KEY: &'static str = "locations";

    fn root() -> Self {
        Self {
            parent: None,
            subscription_id: None,
            resource_group_name: None,
            provider: None,
            location: None,
            resource_type: ResourceType::tenant(),
            name: String::new(),
            is_child: false,
            string_value: "/".to_string(),
        }
    }

    /// Parses a resource ID path string.
    ///
    /// The path must start with `/` and its first segment must be
    /// `subscriptions` or `providers` (scope keywords match
    /// case-insensitively; name segments are taken verbatim, including any
    /// percent-encoded characters). A trailing type segment with no name
    /// (e.g. `.../subnets/`) is accepted and produces a node with an empty
    /// name; consumers depend on this, so it is preserved deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for malformed input. No partially-built
    /// identifier is ever returned, and parsing never panics.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty);
        }
        if !input.starts_with('/') {
            return Err(ParseError::invalid(input));
        }

        let mut parts: Vec<&str> = input.split('/').collect();
        while parts.first() == Some(&"") {
            parts.remove(0);
        }
        while parts.last() == Some(&"") {
            parts.pop();
        }

        if parts.len() < 2 {
            if parts.first().is_some_and(|p| p.eq_ignore_ascii_case(Self::PROVIDERS_KEY)) {
                return Err(ParseError::MissingProviderNamespace {
                    id: input.to_string(),
                });
            }
            return Err(ParseError::invalid(input));
        }
        if !parts[0].eq_ignore_ascii_case(Self::SUBSCRIPTIONS_KEY)
            && !parts[0].eq_ignore_ascii_case(Self::PROVIDERS_KEY)
        {
            return Err(ParseError::invalid(input));
        }

        let root = Arc::new(Self::root());
        let leaf = Self::append_next(&root, &parts, input)?;
        let mut leaf = Arc::unwrap_or_clone(leaf);

        // The leaf memoizes the input verbatim so round-tripping reproduces
        // it character-for-character, trailing empty name included.
        if leaf.string_value != input {
            leaf.string_value = input.to_string();
        }
        Ok(leaf)
    }

    fn append_next(parent: &Arc<Self>, parts: &[&str], id: &str) -> Result<Arc<Self>, ParseError> {
        if parts.is_empty() {
            return Ok(Arc::clone(parent));
        }

        if parts.len() == 1 {
            let seg = parts[0];
            if seg.is_empty() {
                return Err(ParseError::invalid(id));
            }
            if seg.eq_ignore_ascii_case(Self::PROVIDERS_KEY) {
                return Err(ParseError::MissingProviderNamespace { id: id.to_string() });
            }
            // subscriptions and resourceGroups are not valid without names
            if seg.eq_ignore_ascii_case(Self::SUBSCRIPTIONS_KEY)
                || seg.eq_ignore_ascii_case(Self::RESOURCE_GROUPS_KEY)
            {
                return Err(ParseError::invalid(id));
            }
            // a resource group must be followed by a provider or child resource
            if parent.resource_type.matches(&ResourceType::resource_group()) {
                return Err(ParseError::invalid(id));
            }
            // trailing type with no name: accepted, yields an empty-name child
            return Ok(Self::new_child(parent, seg, ""));
        }

        if parts[0].eq_ignore_ascii_case(Self::PROVIDERS_KEY) {
            if parts.len() == 2 || parts[2].eq_ignore_ascii_case(Self::PROVIDERS_KEY) {
                // a bare provider scope is only valid at tenant or subscription scope
                if !parent.is_root()
                    && !parent.resource_type.matches(&ResourceType::subscription())
                {
                    return Err(ParseError::invalid(id));
                }
                let namespace = parts[1];
                if namespace.is_empty() {
                    return Err(ParseError::MissingProviderNamespace { id: id.to_string() });
                }
                let node = Self::new_provider(parent, parts[0], namespace);
                return Self::append_next(&node, &parts[2..], id);
            }
            if parts.len() > 3 {
                let (namespace, type_name, name) = (parts[1], parts[2], parts[3]);
                if namespace.is_empty() {
                    return Err(ParseError::MissingProviderNamespace { id: id.to_string() });
                }
                if type_name.is_empty() {
                    return Err(ParseError::invalid(id));
                }
                let node = Self::new_typed(parent, parts[0], namespace, type_name, name);
                return Self::append_next(&node, &parts[4..], id);
            }
            // `providers/{namespace}/{type}` with no name
            return Err(ParseError::invalid(id));
        }

        let (key, name) = (parts[0], parts[1]);
        if key.is_empty() {
            return Err(ParseError::invalid(id));
        }
        let node = Self::new_pair(parent, key, name, id)?;
        Self::append_next(&node, &parts[2..], id)
    }

    /// Dispatches a `{key}/{name}` pair to the scope it introduces, falling
    /// back to a nested child type under the parent.
    fn new_pair(
        parent: &Arc<Self>,
        key: &str,
        name: &str,
        id: &str,
    ) -> Result<Arc<Self>, ParseError> {
        if key.eq_ignore_ascii_case(Self::SUBSCRIPTIONS_KEY) && parent.is_root() {
            if name.is_empty() {
                return Err(ParseError::invalid(id));
            }
            return Ok(Self::new_scope(parent, ResourceType::subscription(), key, name));
        }
        if key.eq_ignore_ascii_case(Self::RESOURCE_GROUPS_KEY)
            && parent.resource_type.matches(&ResourceType::subscription())
        {
            if name.is_empty() {
                return Err(ParseError::invalid(id));
            }
            return Ok(Self::new_scope(parent, ResourceType::resource_group(), key, name));
        }
        if key.eq_ignore_ascii_case(Self::LOCATIONS_KEY)
            && (parent.resource_type.matches(&ResourceType::subscription())
                || parent.resource_type.matches(&ResourceType::provider()))
        {
            return Ok(Self::new_scope(parent, ResourceType::location(), key, name));
        }
        Ok(Self::new_child(parent, key, name))
    }

    /// Builds the memoized string of a new node from its parent's string and
    /// the literal segments it consumed, preserving the input spelling.
    fn join(parent: &Arc<Self>, segments: &[&str]) -> String {
        let base = if parent.is_root() {
            ""
        } else {
            parent.string_value.as_str()
        };
        format!("{base}/{}", segments.join("/"))
    }

    fn init(
        parent: &Arc<Self>,
        resource_type: ResourceType,
        name: &str,
        is_child: bool,
        string_value: String,
    ) -> Self {
        let mut node = Self {
            parent: Some(Arc::clone(parent)),
            subscription_id: parent.subscription_id.clone(),
            resource_group_name: parent.resource_group_name.clone(),
            provider: parent.provider.clone(),
            location: parent.location.clone(),
            resource_type,
            name: name.to_string(),
            is_child,
            string_value,
        };
        if node.resource_type.matches(&ResourceType::subscription()) {
            node.subscription_id = Some(name.to_string());
        } else if node.resource_type.matches(&ResourceType::resource_group()) {
            node.resource_group_name = Some(name.to_string());
        }
        if node
            .resource_type
            .last_type()
            .eq_ignore_ascii_case(Self::LOCATIONS_KEY)
        {
            node.location = Some(name.to_string());
        }
        node
    }

    fn new_scope(
        parent: &Arc<Self>,
        resource_type: ResourceType,
        key: &str,
        name: &str,
    ) -> Arc<Self> {
        let literal = Self::join(parent, &[key, name]);
        Arc::new(Self::init(parent, resource_type, name, false, literal))
    }

    fn new_provider(parent: &Arc<Self>, providers_key: &str, namespace: &str) -> Arc<Self> {
        let literal = Self::join(parent, &[providers_key, namespace]);
        let mut node = Self::init(parent, ResourceType::provider(), namespace, false, literal);
        node.provider = Some(namespace.to_string());
        Arc::new(node)
    }

    fn new_typed(
        parent: &Arc<Self>,
        providers_key: &str,
        namespace: &str,
        type_name: &str,
        name: &str,
    ) -> Arc<Self> {
        let literal = Self::join(parent, &[providers_key, namespace, type_name, name]);
        let resource_type = ResourceType::new(namespace, type_name);
        Arc::new(Self::init(parent, resource_type, name, false, literal))
    }

    fn new_child(parent: &Arc<Self>, type_name: &str, name: &str) -> Arc<Self> {
        let literal = if name.is_empty() {
            Self::join(parent, &[type_name])
        } else {
            Self::join(parent, &[type_name, name])
        };
        let resource_type = parent.resource_type.append_child(type_name);
        Arc::new(Self::init(parent, resource_type, name, true, literal))
    }

    /// Returns the parent identifier.
    ///
    /// Every chain terminates at [`ROOT_RESOURCE_ID`]; calling
    /// `parent()` on the root returns the root itself, so walking past the
    /// end of the chain is a stable no-op.
    #[must_use]
    pub fn parent(&self) -> &Self {
        self.parent.as_deref().unwrap_or(self)
    }

    /// Returns `true` if this is the root sentinel.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the final path segment's name. Empty for trailing-type paths.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the namespace-qualified resource type.
    #[must_use]
    pub const fn resource_type(&self) -> &ResourceType {
        &self.resource_type
    }

    /// Returns the subscription ID, if this identifier sits under one.
    #[must_use]
    pub fn subscription_id(&self) -> Option<&str> {
        self.subscription_id.as_deref()
    }

    /// Returns the resource group name, if this identifier sits under one.
    #[must_use]
    pub fn resource_group_name(&self) -> Option<&str> {
        self.resource_group_name.as_deref()
    }

    /// Returns the provider namespace from an enclosing `providers` scope.
    #[must_use]
    pub fn provider(&self) -> Option<&str> {
        self.provider.as_deref()
    }

    /// Returns the location, if this identifier sits under a `locations` scope.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns `true` if this node is a child resource nested under an
    /// already-typed parent (e.g. `subnets/{name}` under a virtual network),
    /// as opposed to a top-level typed resource introduced by a `providers`
    /// clause.
    #[must_use]
    pub const fn is_child(&self) -> bool {
        self.is_child
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string_value)
    }
}

impl PartialEq for ResourceId {
    fn eq(&self, other: &Self) -> bool {
        self.string_value == other.string_value
    }
}

impl Eq for ResourceId {}

impl Hash for ResourceId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string_value.hash(state);
    }
}

impl FromStr for ResourceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ResourceId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.string_value)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

// Verify ResourceId is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceId>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const VNET_SUBNET_ID: &str = "/subscriptions/0c2f6471-1bf0-4dda-aec3-cb9272f09575/resourceGroups/myRg/providers/Microsoft.Network/virtualNetworks/myNet/subnets/mySubnet";

    #[test]
    fn test_parse_subscription_scoped_id() {
        let id = ResourceId::parse("/subscriptions/sub-1").unwrap();
        assert_eq!(id.subscription_id(), Some("sub-1"));
        assert_eq!(id.name(), "sub-1");
        assert!(id.resource_type().matches(&ResourceType::subscription()));
        assert!(id.parent().is_root());
    }

    #[test]
    fn test_parse_resource_group_scoped_id() {
        let id = ResourceId::parse("/subscriptions/sub-1/resourceGroups/rg-1").unwrap();
        assert_eq!(id.subscription_id(), Some("sub-1"));
        assert_eq!(id.resource_group_name(), Some("rg-1"));
        assert!(id.resource_type().matches(&ResourceType::resource_group()));
        assert_eq!(id.parent().subscription_id(), Some("sub-1"));
    }

    #[test]
    fn test_parse_full_chain_from_fixture() {
        let id = ResourceId::parse(VNET_SUBNET_ID).unwrap();

        // leaf: the subnet, a child resource
        assert_eq!(id.name(), "mySubnet");
        assert!(id.is_child());
        assert_eq!(id.resource_type().namespace(), "Microsoft.Network");
        assert_eq!(id.resource_type().types(), &["virtualNetworks", "subnets"]);

        // parent: the virtual network, a top-level typed resource
        let vnet = id.parent();
        assert_eq!(vnet.name(), "myNet");
        assert!(!vnet.is_child());
        assert_eq!(vnet.resource_type().types(), &["virtualNetworks"]);

        // grandparent chain: resource group, subscription, root
        let rg = vnet.parent();
        assert_eq!(rg.resource_group_name(), Some("myRg"));
        let sub = rg.parent();
        assert_eq!(
            sub.subscription_id(),
            Some("0c2f6471-1bf0-4dda-aec3-cb9272f09575")
        );
        assert!(sub.parent().is_root());

        // scope values propagate to the leaf
        assert_eq!(
            id.subscription_id(),
            Some("0c2f6471-1bf0-4dda-aec3-cb9272f09575")
        );
        assert_eq!(id.resource_group_name(), Some("myRg"));
    }

    #[test]
    fn test_round_trip_is_exact() {
        let fixtures = [
            "/subscriptions/sub-1",
            "/subscriptions/sub-1/resourceGroups/rg-1",
            VNET_SUBNET_ID,
            "/providers/Microsoft.Insights",
            "/subscriptions/sub-1/locations/westus2",
            "/subscriptions/sub-1/providers/Microsoft.Insights/locations/eastus",
            "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Web/sites/my%20site",
        ];
        for fixture in fixtures {
            let id = ResourceId::parse(fixture).unwrap();
            assert_eq!(id.to_string(), fixture, "round trip failed for {fixture}");
        }
    }

    #[test]
    fn test_trailing_empty_name_is_accepted_and_round_trips() {
        let input = "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Network/virtualNetworks/net-1/subnets/";
        let id = ResourceId::parse(input).unwrap();
        assert_eq!(id.name(), "");
        assert!(id.is_child());
        assert_eq!(id.resource_type().last_type(), "subnets");
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_parent_chain_depth_matches_segment_pairs() {
        // 4 nodes: subscription, resource group, virtual network, subnet
        let id = ResourceId::parse(VNET_SUBNET_ID).unwrap();

        let mut depth = 0;
        let mut current = &id;
        while !current.is_root() {
            current = current.parent();
            depth += 1;
        }
        assert_eq!(depth, 4);

        // walking past the root is a stable no-op
        assert!(current.parent().is_root());
        assert_eq!(current.parent(), current.parent().parent());
    }

    #[test]
    fn test_root_sentinel_is_frozen() {
        assert!(ROOT_RESOURCE_ID.is_root());
        assert_eq!(ROOT_RESOURCE_ID.name(), "");
        assert!(ROOT_RESOURCE_ID.subscription_id().is_none());
        assert_eq!(ROOT_RESOURCE_ID.to_string(), "/");
        assert!(ROOT_RESOURCE_ID.parent().is_root());
    }

    #[test]
    fn test_repeated_providers_clauses_last_one_wins() {
        let input = "/subscriptions/sub-1/providers/Microsoft.Insights/providers/Microsoft.Compute/virtualMachines/vm-1";
        let id = ResourceId::parse(input).unwrap();

        assert_eq!(id.resource_type().namespace(), "Microsoft.Compute");
        assert_eq!(id.resource_type().types(), &["virtualMachines"]);
        assert_eq!(id.name(), "vm-1");

        // the earlier clause survives as prefix context
        let prefix = id.parent();
        assert!(prefix.resource_type().matches(&ResourceType::provider()));
        assert_eq!(prefix.provider(), Some("Microsoft.Insights"));
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_location_under_provider_namespace() {
        let id =
            ResourceId::parse("/subscriptions/sub-1/providers/Microsoft.Insights/locations/eastus")
                .unwrap();
        assert_eq!(id.location(), Some("eastus"));
        assert_eq!(id.resource_type().namespace(), "Microsoft.Insights");
        assert_eq!(id.subscription_id(), Some("sub-1"));
    }

    #[test]
    fn test_tenant_level_provider_scope() {
        let id = ResourceId::parse("/providers/Microsoft.Insights").unwrap();
        assert_eq!(id.provider(), Some("Microsoft.Insights"));
        assert!(id.resource_type().matches(&ResourceType::provider()));
        assert!(id.parent().is_root());
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let invalid = [
            "",
            "   ",
            "/",
            "//",
            "/subscriptions",
            "/subscriptions/",
            "/resourceGroups/rg-1",
            "/locations/westus",
            "no-leading-slash",
            "foo bar",
            "/subscriptions/sub-1/resourceGroups",
            "/providers/Microsoft.Network/virtualNetworks",
            "/subscriptions//resourceGroups/rg-1",
        ];
        for input in invalid {
            assert!(
                ResourceId::parse(input).is_err(),
                "expected parse error for {input:?}"
            );
        }
    }

    #[test]
    fn test_empty_input_and_bare_providers_have_specific_errors() {
        assert!(matches!(ResourceId::parse(""), Err(ParseError::Empty)));
        assert!(matches!(ResourceId::parse("  \t"), Err(ParseError::Empty)));
        assert!(matches!(
            ResourceId::parse("/providers"),
            Err(ParseError::MissingProviderNamespace { .. })
        ));
        assert!(matches!(
            ResourceId::parse("/subscriptions/sub-1/providers"),
            Err(ParseError::MissingProviderNamespace { .. })
        ));
    }

    #[test]
    fn test_resource_group_cannot_end_in_bare_type() {
        // a resource group must be followed by a provider clause or pair
        assert!(ResourceId::parse("/subscriptions/sub-1/resourceGroups/rg-1/bogus").is_err());
    }

    #[test]
    fn test_scope_keywords_match_case_insensitively() {
        let id = ResourceId::parse("/SUBSCRIPTIONS/sub-1/resourcegroups/rg-1").unwrap();
        assert_eq!(id.subscription_id(), Some("sub-1"));
        assert_eq!(id.resource_group_name(), Some("rg-1"));
        // original spelling is preserved in the string form
        assert_eq!(id.to_string(), "/SUBSCRIPTIONS/sub-1/resourcegroups/rg-1");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let upper = ResourceId::parse("/subscriptions/SUB-1").unwrap();
        let lower = ResourceId::parse("/subscriptions/sub-1").unwrap();
        assert_ne!(upper, lower);
        assert_eq!(upper.subscription_id(), Some("SUB-1"));
    }

    #[test]
    fn test_serde_round_trip_as_string() {
        let id = ResourceId::parse(VNET_SUBNET_ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{VNET_SUBNET_ID}\""));

        let restored: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
        assert_eq!(restored.name(), "mySubnet");
    }

    #[test]
    fn test_deserialize_rejects_malformed_ids() {
        let result: Result<ResourceId, _> = serde_json::from_str("\"/providers\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_concurrent_readers_see_identical_strings() {
        let id = Arc::new(ResourceId::parse(VNET_SUBNET_ID).unwrap());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let id = Arc::clone(&id);
                std::thread::spawn(move || id.to_string())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), VNET_SUBNET_ID);
        }
    }

    #[test]
    fn test_equality_and_hashing_by_string_form() {
        use std::collections::HashSet;

        let a = ResourceId::parse("/subscriptions/sub-1").unwrap();
        let b = ResourceId::parse("/subscriptions/sub-1").unwrap();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }
}
