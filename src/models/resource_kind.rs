//! Resource kind definitions
//!
//! This module provides a centralized enum for the resource kinds the tree
//! walks through. The ODLM and OLM kinds are known ahead of time; instances
//! created from example templates carry their kind dynamically.

use std::fmt;

/// Enumeration of the resource kinds the cluster client can fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    // ODLM resources
    OperandRequest,
    OperandRegistry,
    // OLM resources
    Subscription,
    ClusterServiceVersion,
    /// Any other kind, identified by its `apiVersion` and `kind`
    Custom { api_version: String, kind: String },
}

impl ResourceKind {
    /// Build a dynamic kind from an object's `apiVersion` and `kind`
    pub fn custom(api_version: impl Into<String>, kind: impl Into<String>) -> Self {
        ResourceKind::Custom {
            api_version: api_version.into(),
            kind: kind.into(),
        }
    }

    /// Get the display name as a string
    pub fn as_str(&self) -> &str {
        match self {
            ResourceKind::OperandRequest => "OperandRequest",
            ResourceKind::OperandRegistry => "OperandRegistry",
            ResourceKind::Subscription => "Subscription",
            ResourceKind::ClusterServiceVersion => "ClusterServiceVersion",
            ResourceKind::Custom { kind, .. } => kind,
        }
    }

    /// Full `group/version` (or bare `version` for the core group)
    pub fn api_version(&self) -> &str {
        match self {
            ResourceKind::OperandRequest | ResourceKind::OperandRegistry => {
                "operator.ibm.com/v1alpha1"
            }
            ResourceKind::Subscription | ResourceKind::ClusterServiceVersion => {
                "operators.coreos.com/v1alpha1"
            }
            ResourceKind::Custom { api_version, .. } => api_version,
        }
    }

    /// API group, empty for the core group
    pub fn api_group(&self) -> &str {
        match self.api_version().split_once('/') {
            Some((group, _)) => group,
            None => "",
        }
    }

    /// API version without the group
    pub fn version(&self) -> &str {
        match self.api_version().split_once('/') {
            Some((_, version)) => version,
            None => self.api_version(),
        }
    }

    /// Plural resource name, known only for the fixed kinds.
    /// Custom kinds are resolved through API discovery.
    pub fn plural(&self) -> Option<&'static str> {
        match self {
            ResourceKind::OperandRequest => Some("operandrequests"),
            ResourceKind::OperandRegistry => Some("operandregistries"),
            ResourceKind::Subscription => Some("subscriptions"),
            ResourceKind::ClusterServiceVersion => Some("clusterserviceversions"),
            ResourceKind::Custom { .. } => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}
