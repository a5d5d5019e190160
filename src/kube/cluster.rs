//! Cluster access
//!
//! `ClusterClient` is the seam between the tree resolver and the API server.
//! `KubeCluster` implements it with dynamic objects, so every kind, including
//! the ones only known from example templates, comes back as a JSON value.

use async_trait::async_trait;
use kube::Api;
use kube::core::{ApiResource, DynamicObject, GroupVersionKind};
use kube::discovery::{self, Scope};
use serde_json::Value;
use thiserror::Error;

use crate::models::{ResourceKind, ResourceRef};

/// Failures reported by a cluster client
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("{kind} {key} not found")]
    NotFound { kind: String, key: ResourceRef },

    #[error("failed to fetch {kind} {key}: {source}")]
    Api {
        kind: String,
        key: ResourceRef,
        #[source]
        source: kube::Error,
    },

    #[error("failed to list {kind} in namespace {namespace}: {source}")]
    List {
        kind: String,
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to discover API resource for {kind} ({api_version}): {source}")]
    Discovery {
        kind: String,
        api_version: String,
        #[source]
        source: kube::Error,
    },

    #[error("failed to decode {kind}: {source}")]
    Decode {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failure from a client that is not backed by kube-rs
    #[error("{0}")]
    Unavailable(String),
}

impl ClusterError {
    pub fn not_found(kind: &ResourceKind, key: &ResourceRef) -> Self {
        ClusterError::NotFound {
            kind: kind.to_string(),
            key: key.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClusterError::NotFound { .. })
    }
}

/// Read-only cluster access used by the resolver
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClusterClient: Send + Sync {
    /// Fetch one object; an absent object is `ClusterError::NotFound`
    async fn get(&self, kind: &ResourceKind, key: &ResourceRef) -> Result<Value, ClusterError>;

    /// List every object of a kind in a namespace
    async fn list(&self, kind: &ResourceKind, namespace: &str) -> Result<Vec<Value>, ClusterError>;
}

/// `ClusterClient` backed by a kube-rs client
pub struct KubeCluster {
    client: kube::Client,
}

impl KubeCluster {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// Resolve the ApiResource for a kind
    ///
    /// The ODLM and OLM kinds have fixed plurals. Template kinds go through
    /// discovery so their plural and scope come from the API server.
    async fn api_resource(&self, kind: &ResourceKind) -> Result<(ApiResource, bool), ClusterError> {
        if let Some(plural) = kind.plural() {
            return Ok((
                ApiResource {
                    group: kind.api_group().to_string(),
                    version: kind.version().to_string(),
                    api_version: kind.api_version().to_string(),
                    kind: kind.as_str().to_string(),
                    plural: plural.to_string(),
                },
                true,
            ));
        }

        let gvk = GroupVersionKind::gvk(kind.api_group(), kind.version(), kind.as_str());
        let (api_resource, caps) = discovery::pinned_kind(&self.client, &gvk)
            .await
            .map_err(|source| ClusterError::Discovery {
                kind: kind.to_string(),
                api_version: kind.api_version().to_string(),
                source,
            })?;
        tracing::debug!(
            "Discovered {} as {} ({:?})",
            kind,
            api_resource.plural,
            caps.scope
        );
        Ok((api_resource, matches!(caps.scope, Scope::Namespaced)))
    }

    fn api(&self, api_resource: &ApiResource, namespaced: bool, namespace: &str) -> Api<DynamicObject> {
        if namespaced {
            Api::namespaced_with(self.client.clone(), namespace, api_resource)
        } else {
            Api::all_with(self.client.clone(), api_resource)
        }
    }
}

#[async_trait]
impl ClusterClient for KubeCluster {
    async fn get(&self, kind: &ResourceKind, key: &ResourceRef) -> Result<Value, ClusterError> {
        let (api_resource, namespaced) = self.api_resource(kind).await?;
        let api = self.api(&api_resource, namespaced, &key.namespace);

        tracing::debug!("Fetching {} {}", kind, key);
        let obj = api
            .get_opt(&key.name)
            .await
            .map_err(|source| ClusterError::Api {
                kind: kind.to_string(),
                key: key.clone(),
                source,
            })?
            .ok_or_else(|| ClusterError::not_found(kind, key))?;

        serde_json::to_value(&obj).map_err(|source| ClusterError::Decode {
            kind: kind.to_string(),
            source,
        })
    }

    async fn list(&self, kind: &ResourceKind, namespace: &str) -> Result<Vec<Value>, ClusterError> {
        let (api_resource, namespaced) = self.api_resource(kind).await?;
        let api = self.api(&api_resource, namespaced, namespace);

        tracing::debug!("Listing {} in namespace {}", kind, namespace);
        let list = api
            .list(&Default::default())
            .await
            .map_err(|source| ClusterError::List {
                kind: kind.to_string(),
                namespace: namespace.to_string(),
                source,
            })?;

        list.items
            .iter()
            .map(|obj| {
                serde_json::to_value(obj).map_err(|source| ClusterError::Decode {
                    kind: kind.to_string(),
                    source,
                })
            })
            .collect()
    }
}
