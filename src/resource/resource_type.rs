//! Resource type classification for resource identifiers.

use std::fmt;

/// The namespace-qualified type of a resource.
///
/// A resource type pairs a provider namespace (e.g. `Microsoft.Network`) with
/// an ordered sequence of type segments (e.g. `virtualNetworks`, `subnets`).
/// Child resources extend their parent's segment sequence, so
/// `Microsoft.Network/virtualNetworks/subnets` is the type of a subnet nested
/// under a virtual network.
///
/// Namespace and type segments compare case-insensitively, per the Resource
/// Manager grammar.
///
/// # Example
///
/// ```rust
/// use azure_arm::resource::ResourceType;
///
/// let vnet = ResourceType::new("Microsoft.Network", "virtualNetworks");
/// let subnet = ResourceType::new("Microsoft.Network", "virtualNetworks/subnets");
///
/// assert!(vnet.is_parent_of(&subnet));
/// assert!(!subnet.is_parent_of(&vnet));
/// assert_eq!(subnet.to_string(), "Microsoft.Network/virtualNetworks/subnets");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceType {
    namespace: String,
    types: Vec<String>,
}

impl ResourceType {
    const RESOURCES_NAMESPACE: &'static str = "Microsoft.Resources";

    /// Creates a new resource type without validation.
    ///
    /// The `type_path` is split on `/` into ordered type segments. This is
    /// used internally by the parser, which has already validated the
    /// segments; callers constructing types by hand are trusted to pass
    /// well-formed values.
    #[must_use]
    pub fn new(namespace: impl Into<String>, type_path: impl AsRef<str>) -> Self {
        Self {
            namespace: namespace.into(),
            types: type_path
                .as_ref()
                .split('/')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// The well-known type of the tenant root.
    #[must_use]
    pub fn tenant() -> Self {
        Self::new(Self::RESOURCES_NAMESPACE, "tenants")
    }

    /// The well-known type of a subscription.
    #[must_use]
    pub fn subscription() -> Self {
        Self::new(Self::RESOURCES_NAMESPACE, "subscriptions")
    }

    /// The well-known type of a resource group.
    #[must_use]
    pub fn resource_group() -> Self {
        Self::new(Self::RESOURCES_NAMESPACE, "resourceGroups")
    }

    /// The well-known type of a provider namespace registration.
    #[must_use]
    pub fn provider() -> Self {
        Self::new(Self::RESOURCES_NAMESPACE, "providers")
    }

    /// The well-known type of a location scope.
    #[must_use]
    pub fn location() -> Self {
        Self::new(Self::RESOURCES_NAMESPACE, "locations")
    }

    /// Returns the provider namespace (e.g. `Microsoft.Network`).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the ordered type segments.
    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Returns the last (most nested) type segment, or `""` for an empty type.
    #[must_use]
    pub fn last_type(&self) -> &str {
        self.types.last().map_or("", String::as_str)
    }

    /// Returns a new resource type with `child` appended to the segments.
    #[must_use]
    pub fn append_child(&self, child: &str) -> Self {
        let mut types = self.types.clone();
        types.push(child.to_string());
        Self {
            namespace: self.namespace.clone(),
            types,
        }
    }

    /// Returns `true` if `other` is a strictly more nested type under this
    /// one: the namespaces match and this type's segments are a strict prefix
    /// of `other`'s.
    ///
    /// The relation is irreflexive — a type is never its own parent — and
    /// always `false` across namespaces regardless of segment overlap.
    #[must_use]
    pub fn is_parent_of(&self, other: &Self) -> bool {
        if !self.namespace.eq_ignore_ascii_case(&other.namespace) {
            return false;
        }
        if other.types.len() <= self.types.len() {
            return false;
        }
        self.types
            .iter()
            .zip(&other.types)
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }

    /// Case-insensitive equality, per the Resource Manager grammar.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.namespace.eq_ignore_ascii_case(&other.namespace)
            && self.types.len() == other.types.len()
            && self
                .types
                .iter()
                .zip(&other.types)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.types.join("/"))
    }
}
