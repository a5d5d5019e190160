//! Data structures for resolved request trees

use chrono::{DateTime, Utc};

use crate::models::{ResourceKind, ResourceRef};

/// Root of a resolved tree: one OperandRequest
#[derive(Debug, Clone, PartialEq)]
pub struct RequestNode {
    pub reference: ResourceRef,
    /// `status/reason` of the last condition, or the phase
    pub status: String,
    pub created: Option<DateTime<Utc>>,
    /// Registry links in declaration order
    pub links: Vec<LinkGroup>,
    /// Resolved subscriptions, flattened across links
    pub subscriptions: Vec<SubscriptionNode>,
}

/// Operand names requested from one registry (not rendered)
#[derive(Debug, Clone, PartialEq)]
pub struct LinkGroup {
    pub registry: ResourceRef,
    pub operand_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionNode {
    pub reference: ResourceRef,
    /// Raw `status.state`
    pub state: String,
    pub created: Option<DateTime<Utc>>,
    /// Present only when an installed version was recorded and fetched
    pub version: Option<VersionNode>,
}

/// Installed ClusterServiceVersion of a subscription
#[derive(Debug, Clone, PartialEq)]
pub struct VersionNode {
    pub reference: ResourceRef,
    /// `phase/reason`
    pub status: String,
    pub created: Option<DateTime<Utc>>,
    pub instances: Vec<InstanceNode>,
}

/// Live custom resource matching an example template
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceNode {
    pub reference: ResourceRef,
    pub kind: String,
    pub status: String,
    pub created: Option<DateTime<Utc>>,
}

/// Kind-agnostic node consumed by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: String,
    pub reference: ResourceRef,
    pub status: String,
    pub created: Option<DateTime<Utc>>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(
        kind: impl Into<String>,
        reference: ResourceRef,
        status: impl Into<String>,
        created: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            kind: kind.into(),
            reference,
            status: status.into(),
            created,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }
}

impl From<&InstanceNode> for TreeNode {
    fn from(node: &InstanceNode) -> Self {
        TreeNode::leaf(
            node.kind.clone(),
            node.reference.clone(),
            node.status.clone(),
            node.created,
        )
    }
}

impl From<&VersionNode> for TreeNode {
    fn from(node: &VersionNode) -> Self {
        TreeNode::leaf(
            ResourceKind::ClusterServiceVersion,
            node.reference.clone(),
            node.status.clone(),
            node.created,
        )
        .with_children(node.instances.iter().map(TreeNode::from).collect())
    }
}

impl From<&SubscriptionNode> for TreeNode {
    fn from(node: &SubscriptionNode) -> Self {
        TreeNode::leaf(
            ResourceKind::Subscription,
            node.reference.clone(),
            node.state.clone(),
            node.created,
        )
        .with_children(node.version.iter().map(TreeNode::from).collect())
    }
}

impl From<&RequestNode> for TreeNode {
    fn from(node: &RequestNode) -> Self {
        TreeNode::leaf(
            ResourceKind::OperandRequest,
            node.reference.clone(),
            node.status.clone(),
            node.created,
        )
        .with_children(node.subscriptions.iter().map(TreeNode::from).collect())
    }
}
