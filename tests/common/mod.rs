//! In-memory cluster and object builders shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Mutex;

use kubectl_odlm::kube::{ClusterClient, ClusterError};
use kubectl_odlm::models::{ResourceKind, ResourceRef};

pub const CREATED: &str = "2024-05-01T10:00:00Z";

/// Objects keyed by kind name and identity, answered in insertion order
#[derive(Default)]
pub struct FakeCluster {
    objects: Vec<(String, ResourceRef, Value)>,
    broken: Vec<(String, ResourceRef)>,
    list_fails: bool,
    gets: Mutex<Vec<(String, ResourceRef)>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object; kind, namespace and name are read from it
    pub fn with(mut self, obj: Value) -> Self {
        let kind = obj["kind"].as_str().unwrap_or_default().to_string();
        let key = ResourceRef::new(
            obj["metadata"]["namespace"].as_str().unwrap_or_default(),
            obj["metadata"]["name"].as_str().unwrap_or_default(),
        );
        self.objects.push((kind, key, obj));
        self
    }

    /// Make every get of this object fail with a transport error
    pub fn broken(mut self, kind: &str, namespace: &str, name: &str) -> Self {
        self.broken
            .push((kind.to_string(), ResourceRef::new(namespace, name)));
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Number of gets issued for one object
    pub fn get_count(&self, kind: &str, namespace: &str, name: &str) -> usize {
        let key = ResourceRef::new(namespace, name);
        self.gets
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, r)| k == kind && *r == key)
            .count()
    }
}

#[async_trait]
impl ClusterClient for FakeCluster {
    async fn get(&self, kind: &ResourceKind, key: &ResourceRef) -> Result<Value, ClusterError> {
        self.gets
            .lock()
            .unwrap()
            .push((kind.as_str().to_string(), key.clone()));

        if self
            .broken
            .iter()
            .any(|(k, r)| k == kind.as_str() && r == key)
        {
            return Err(ClusterError::Unavailable("connection reset".to_string()));
        }

        self.objects
            .iter()
            .find(|(k, r, _)| k == kind.as_str() && r == key)
            .map(|(_, _, obj)| obj.clone())
            .ok_or_else(|| ClusterError::not_found(kind, key))
    }

    async fn list(&self, kind: &ResourceKind, namespace: &str) -> Result<Vec<Value>, ClusterError> {
        if self.list_fails {
            return Err(ClusterError::Unavailable("forbidden".to_string()));
        }
        Ok(self
            .objects
            .iter()
            .filter(|(k, r, _)| k == kind.as_str() && r.namespace == namespace)
            .map(|(_, _, obj)| obj.clone())
            .collect())
    }
}

fn metadata(namespace: &str, name: &str) -> Value {
    json!({
        "namespace": namespace,
        "name": name,
        "creationTimestamp": CREATED,
    })
}

/// OperandRequest with `(registry, registryNamespace, operands)` links
pub fn request(namespace: &str, name: &str, links: &[(&str, Option<&str>, &[&str])]) -> Value {
    let requests: Vec<Value> = links
        .iter()
        .map(|(registry, registry_ns, operands)| {
            let mut link = json!({
                "registry": registry,
                "operands": operands.iter().map(|o| json!({ "name": o })).collect::<Vec<_>>(),
            });
            if let Some(ns) = registry_ns {
                link["registryNamespace"] = json!(ns);
            }
            link
        })
        .collect();

    json!({
        "apiVersion": "operator.ibm.com/v1alpha1",
        "kind": "OperandRequest",
        "metadata": metadata(namespace, name),
        "spec": { "requests": requests },
        "status": { "phase": "Running" },
    })
}

/// OperandRegistry with `(name, namespace, scope)` catalog entries
pub fn registry(namespace: &str, name: &str, operators: &[(&str, &str, &str)]) -> Value {
    let operators: Vec<Value> = operators
        .iter()
        .map(|(op, ns, scope)| json!({ "name": op, "namespace": ns, "scope": scope }))
        .collect();

    json!({
        "apiVersion": "operator.ibm.com/v1alpha1",
        "kind": "OperandRegistry",
        "metadata": metadata(namespace, name),
        "spec": { "operators": operators },
    })
}

pub fn subscription(namespace: &str, name: &str, state: &str, installed: Option<&str>) -> Value {
    let mut status = json!({ "state": state });
    if let Some(csv) = installed {
        status["installedCSV"] = json!(csv);
    }
    json!({
        "apiVersion": "operators.coreos.com/v1alpha1",
        "kind": "Subscription",
        "metadata": metadata(namespace, name),
        "status": status,
    })
}

/// ClusterServiceVersion, optionally with a raw `alm-examples` annotation
pub fn version(namespace: &str, name: &str, examples: Option<&str>) -> Value {
    let mut meta = metadata(namespace, name);
    if let Some(raw) = examples {
        meta["annotations"] = json!({ "alm-examples": raw });
    }
    json!({
        "apiVersion": "operators.coreos.com/v1alpha1",
        "kind": "ClusterServiceVersion",
        "metadata": meta,
        "status": { "phase": "Succeeded", "reason": "InstallSucceeded" },
    })
}

/// Live operand instance with a single condition
pub fn instance(api_version: &str, kind: &str, namespace: &str, name: &str, ready: &str) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": metadata(namespace, name),
        "status": {
            "conditions": [
                { "type": "Ready", "status": ready, "reason": "Reconciled" }
            ]
        },
    })
}
