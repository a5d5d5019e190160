//! Typed views of the ODLM request and registry specs
//!
//! Only the fields the tree needs are modelled. Everything defaults, so a
//! partially filled spec still deserializes.

use serde::Deserialize;
use serde_json::Value;

/// Scope value that pins an operator to the shared operators namespace
pub const CLUSTER_SCOPE: &str = "cluster";

/// `OperandRequest.spec`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperandRequestSpec {
    #[serde(default)]
    pub requests: Vec<Request>,
}

/// One registry link declared by a request
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(default)]
    pub registry: String,
    #[serde(default)]
    pub registry_namespace: Option<String>,
    #[serde(default)]
    pub operands: Vec<Operand>,
}

/// Operand requested from a registry
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Operand {
    #[serde(default)]
    pub name: String,
}

/// `OperandRegistry.spec`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OperandRegistrySpec {
    #[serde(default)]
    pub operators: Vec<Operator>,
}

/// Catalog entry of a registry
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Operator {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub scope: Option<String>,
}

impl Request {
    /// Namespace of the linked registry, defaulting to the request's own
    pub fn registry_namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        match self.registry_namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => default,
        }
    }
}

impl Operator {
    pub fn is_cluster_scoped(&self) -> bool {
        self.scope.as_deref() == Some(CLUSTER_SCOPE)
    }
}

impl OperandRegistrySpec {
    /// First catalog entry with the given name
    pub fn find_operator(&self, name: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.name == name)
    }
}

/// Deserialize `obj.spec`, treating a missing spec as empty
pub fn parse_spec<T>(obj: &Value) -> serde_json::Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match obj.get("spec") {
        Some(spec) if !spec.is_null() => T::deserialize(spec),
        _ => Ok(T::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request_spec() {
        let obj = json!({
            "spec": {
                "requests": [{
                    "registry": "common-service",
                    "registryNamespace": "ibm-common-services",
                    "operands": [{"name": "ibm-iam-operator"}, {"name": "ibm-im-mongodb-operator"}]
                }]
            }
        });
        let spec: OperandRequestSpec = parse_spec(&obj).unwrap();
        assert_eq!(spec.requests.len(), 1);
        assert_eq!(spec.requests[0].registry, "common-service");
        assert_eq!(spec.requests[0].operands[1].name, "ibm-im-mongodb-operator");
    }

    #[test]
    fn test_missing_spec_is_empty() {
        let spec: OperandRequestSpec = parse_spec(&json!({"metadata": {}})).unwrap();
        assert!(spec.requests.is_empty());
    }

    #[test]
    fn test_mistyped_spec_is_an_error() {
        let result: serde_json::Result<OperandRegistrySpec> =
            parse_spec(&json!({"spec": {"operators": "nope"}}));
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_namespace_fallback() {
        let explicit = Request {
            registry_namespace: Some("reg-ns".to_string()),
            ..Default::default()
        };
        let empty = Request {
            registry_namespace: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(explicit.registry_namespace_or("ns1"), "reg-ns");
        assert_eq!(empty.registry_namespace_or("ns1"), "ns1");
        assert_eq!(Request::default().registry_namespace_or("ns1"), "ns1");
    }

    #[test]
    fn test_find_operator_takes_first_match() {
        let spec = OperandRegistrySpec {
            operators: vec![
                Operator {
                    name: "opB".to_string(),
                    namespace: "first".to_string(),
                    scope: None,
                },
                Operator {
                    name: "opB".to_string(),
                    namespace: "second".to_string(),
                    scope: None,
                },
            ],
        };
        assert_eq!(spec.find_operator("opB").map(|op| op.namespace.as_str()), Some("first"));
        assert!(spec.find_operator("opC").is_none());
    }
}
