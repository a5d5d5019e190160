//! Request graph resolution
//!
//! Walks an OperandRequest through its registries to the Subscriptions it
//! implies, then down to each installed ClusterServiceVersion and the live
//! instances of its example templates.
//!
//! Only the request itself is required. Everything below it is best effort:
//! a registry, subscription, version or instance that cannot be fetched is
//! reported to the `DiagnosticSink` and left out, and resolution carries on
//! with its siblings. Fetches run one after another and are never retried.

use serde_json::Value;
use thiserror::Error;

use crate::kube::{ClusterClient, ClusterError};
use crate::models::odlm::parse_spec;
use crate::models::{OperandRegistrySpec, OperandRequestSpec, Operator, ResourceKind, ResourceRef, ValuePath};
use crate::tree::diagnostics::{DiagnosticSink, Skip};
use crate::tree::models::{InstanceNode, LinkGroup, RequestNode, SubscriptionNode, VersionNode};
use crate::tree::status::{
    conditions_summary, creation_timestamp, installed_version, subscription_state, version_summary,
};

/// Namespace that cluster-scoped operators are installed into
pub const OPERATORS_NAMESPACE: &str = "openshift-operators";

/// Annotation holding a version's example templates
pub const ALM_EXAMPLES_ANNOTATION: &str = "alm-examples";

/// Failures that abort resolution of a request
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("OperandRequest {0} not found")]
    RequestNotFound(ResourceRef),

    #[error("failed to fetch OperandRequest {request}")]
    Fetch {
        request: ResourceRef,
        #[source]
        source: ClusterError,
    },

    #[error("failed to list OperandRequests in namespace {namespace}")]
    List {
        namespace: String,
        #[source]
        source: ClusterError,
    },
}

/// Resolves OperandRequests into trees
pub struct GraphResolver<'a> {
    cluster: &'a dyn ClusterClient,
    sink: &'a dyn DiagnosticSink,
    operators_namespace: String,
}

impl<'a> GraphResolver<'a> {
    pub fn new(cluster: &'a dyn ClusterClient, sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            cluster,
            sink,
            operators_namespace: OPERATORS_NAMESPACE.to_string(),
        }
    }

    /// Override the namespace cluster-scoped operators resolve into
    pub fn with_operators_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.operators_namespace = namespace.into();
        self
    }

    /// Resolve a single request
    pub async fn resolve(&self, request: &ResourceRef) -> Result<RequestNode, ResolveError> {
        let obj = self
            .cluster
            .get(&ResourceKind::OperandRequest, request)
            .await
            .map_err(|source| {
                if source.is_not_found() {
                    ResolveError::RequestNotFound(request.clone())
                } else {
                    ResolveError::Fetch {
                        request: request.clone(),
                        source,
                    }
                }
            })?;

        Ok(self.resolve_object(&obj, request).await)
    }

    /// Resolve every request in a namespace, in list order
    pub async fn resolve_all(&self, namespace: &str) -> Result<Vec<RequestNode>, ResolveError> {
        let objs = self
            .cluster
            .list(&ResourceKind::OperandRequest, namespace)
            .await
            .map_err(|source| ResolveError::List {
                namespace: namespace.to_string(),
                source,
            })?;

        tracing::debug!("Found {} OperandRequests in {}", objs.len(), namespace);

        let mut nodes = Vec::with_capacity(objs.len());
        for obj in &objs {
            let reference = ResourceRef::new(
                obj.str_at(&["metadata", "namespace"]).unwrap_or(namespace),
                obj.str_at(&["metadata", "name"]).unwrap_or_default(),
            );
            nodes.push(self.resolve_object(obj, &reference).await);
        }
        Ok(nodes)
    }

    async fn resolve_object(&self, obj: &Value, reference: &ResourceRef) -> RequestNode {
        let links = self.link_groups(obj, reference);

        let mut subscriptions = Vec::new();
        for subscription in self.resolve_links(&links).await {
            if let Some(node) = self.resolve_subscription(&subscription).await {
                subscriptions.push(node);
            }
        }

        RequestNode {
            reference: reference.clone(),
            status: conditions_summary(obj),
            created: creation_timestamp(obj),
            links,
            subscriptions,
        }
    }

    /// Registry links of a request, in declaration order
    pub fn link_groups(&self, obj: &Value, reference: &ResourceRef) -> Vec<LinkGroup> {
        let spec: OperandRequestSpec = match parse_spec(obj) {
            Ok(spec) => spec,
            Err(e) => {
                self.sink.skipped(Skip::RequestSpec {
                    request: reference.clone(),
                    reason: e.to_string(),
                });
                return Vec::new();
            }
        };

        spec.requests
            .iter()
            .map(|req| LinkGroup {
                registry: ResourceRef::new(
                    req.registry_namespace_or(&reference.namespace),
                    req.registry.clone(),
                ),
                operand_names: req.operands.iter().map(|op| op.name.clone()).collect(),
            })
            .collect()
    }

    /// Map operand names to Subscription identities through their registries
    pub async fn resolve_links(&self, links: &[LinkGroup]) -> Vec<ResourceRef> {
        let mut subscriptions = Vec::new();

        for link in links {
            let registry = match self.fetch_registry(&link.registry).await {
                Ok(registry) => registry,
                Err(reason) => {
                    self.sink.skipped(Skip::Registry {
                        registry: link.registry.clone(),
                        reason,
                    });
                    continue;
                }
            };

            for operand in &link.operand_names {
                match registry.find_operator(operand) {
                    Some(operator) => subscriptions.push(self.subscription_ref(operator)),
                    None => self.sink.skipped(Skip::Operand {
                        registry: link.registry.clone(),
                        operand: operand.clone(),
                    }),
                }
            }
        }

        subscriptions
    }

    /// Subscription identity for a catalog entry
    ///
    /// Cluster-scoped operators always live in the operators namespace.
    pub fn subscription_ref(&self, operator: &Operator) -> ResourceRef {
        let namespace = if operator.is_cluster_scoped() {
            self.operators_namespace.as_str()
        } else {
            operator.namespace.as_str()
        };
        ResourceRef::new(namespace, operator.name.clone())
    }

    async fn fetch_registry(&self, key: &ResourceRef) -> Result<OperandRegistrySpec, String> {
        let obj = self
            .cluster
            .get(&ResourceKind::OperandRegistry, key)
            .await
            .map_err(|e| e.to_string())?;
        parse_spec(&obj).map_err(|e| format!("unreadable spec: {}", e))
    }

    async fn resolve_subscription(&self, key: &ResourceRef) -> Option<SubscriptionNode> {
        let obj = match self.cluster.get(&ResourceKind::Subscription, key).await {
            Ok(obj) => obj,
            Err(e) => {
                self.sink.skipped(Skip::Subscription {
                    subscription: key.clone(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        let version = match installed_version(&obj) {
            Some(csv) => {
                self.resolve_version(&ResourceRef::new(key.namespace.clone(), csv))
                    .await
            }
            None => None,
        };

        Some(SubscriptionNode {
            reference: key.clone(),
            state: subscription_state(&obj),
            created: creation_timestamp(&obj),
            version,
        })
    }

    async fn resolve_version(&self, key: &ResourceRef) -> Option<VersionNode> {
        let obj = match self
            .cluster
            .get(&ResourceKind::ClusterServiceVersion, key)
            .await
        {
            Ok(obj) => obj,
            Err(e) => {
                self.sink.skipped(Skip::Version {
                    version: key.clone(),
                    reason: e.to_string(),
                });
                return None;
            }
        };

        Some(VersionNode {
            reference: key.clone(),
            status: version_summary(&obj),
            created: creation_timestamp(&obj),
            instances: self.resolve_instances(&obj, key).await,
        })
    }

    async fn resolve_instances(&self, version: &Value, key: &ResourceRef) -> Vec<InstanceNode> {
        let Some(raw) = version.str_at(&["metadata", "annotations", ALM_EXAMPLES_ANNOTATION]) else {
            return Vec::new();
        };

        let templates: Vec<Value> = match serde_json::from_str(raw) {
            Ok(templates) => templates,
            Err(e) => {
                self.sink.skipped(Skip::Examples {
                    version: key.clone(),
                    reason: e.to_string(),
                });
                return Vec::new();
            }
        };

        let mut instances = Vec::new();
        for (index, template) in templates.iter().enumerate() {
            let (kind, instance) = match template_target(template, &key.namespace) {
                Ok(target) => target,
                Err(reason) => {
                    self.sink.skipped(Skip::Template {
                        version: key.clone(),
                        index,
                        reason,
                    });
                    continue;
                }
            };

            match self.cluster.get(&kind, &instance).await {
                Ok(live) => instances.push(InstanceNode {
                    kind: live
                        .str_at(&["kind"])
                        .unwrap_or(kind.as_str())
                        .to_string(),
                    status: conditions_summary(&live),
                    created: creation_timestamp(&live),
                    reference: instance,
                }),
                Err(e) => self.sink.skipped(Skip::Instance {
                    kind: kind.to_string(),
                    instance,
                    reason: e.to_string(),
                }),
            }
        }
        instances
    }
}

/// Kind and identity of the live object behind an example template
///
/// The template's own namespace wins; otherwise the instance lives beside
/// the version that declares it.
fn template_target(template: &Value, default_ns: &str) -> Result<(ResourceKind, ResourceRef), String> {
    let name = template
        .str_at(&["metadata", "name"])
        .filter(|name| !name.is_empty())
        .ok_or("missing metadata.name")?;
    let api_version = template
        .str_at(&["apiVersion"])
        .filter(|v| !v.is_empty())
        .ok_or("missing apiVersion")?;
    let kind = template
        .str_at(&["kind"])
        .filter(|k| !k.is_empty())
        .ok_or("missing kind")?;
    let namespace = template
        .str_at(&["metadata", "namespace"])
        .filter(|ns| !ns.is_empty())
        .unwrap_or(default_ns);

    Ok((
        ResourceKind::custom(api_version, kind),
        ResourceRef::new(namespace, name),
    ))
}
